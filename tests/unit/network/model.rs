use super::*;
use crate::validate::DefectKind;

const DOC: &str = r##"
{
  "levels": [
    { "populations": [0.6, 0.4], "colors": [["#aa0000", "white"]], "labels": ["fox", "owl"] },
    { "populations": [0.25, 0.75], "occupation": [[0.5, 0.5], [1.0, 0.0]] }
  ],
  "options": { "canvas_width": 800, "separator_width": 4 }
}
"##;

#[test]
fn document_parses_levels_and_options() {
    let doc = NetworkDocument::from_json_str(DOC).unwrap();
    assert_eq!(doc.network.levels.len(), 2);
    assert_eq!(doc.network.species_count(), 4);
    assert_eq!(doc.options.canvas_width, 800.0);
    assert_eq!(doc.options.separator_width, 4.0);
    assert_eq!(doc.options.rectangle_height, 30.0);

    let prey = &doc.network.levels[1];
    let matrix = prey.occupation.as_ref().unwrap();
    assert_eq!(matrix.row_count(), 2);
    assert_eq!(matrix.get(1, 0), Some(1.0));
    assert_eq!(matrix.row(0), Some(&[0.5, 0.5][..]));
    assert!(prey.colors.is_none());
    assert!(prey.labels.is_none());
}

#[test]
fn options_are_optional() {
    let doc = NetworkDocument::from_json_str(r#"{"levels": []}"#).unwrap();
    assert_eq!(doc.options, NetworkConfig::default());
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = NetworkDocument::from_json_str(r#"{"levels": [ {"populations": "x"} ]}"#).unwrap_err();
    assert!(matches!(err, TrophicError::Serde(_)));
}

#[test]
fn missing_file_is_reported_with_its_path() {
    let err = NetworkDocument::from_path("does/not/exist.json").unwrap_err();
    assert!(matches!(err, TrophicError::Other(_)));
    assert!(format!("{err:#}").contains("does/not/exist.json"));
}

#[test]
fn document_json_survives_reload() {
    let doc = NetworkDocument::from_json_str(DOC).unwrap();
    let again = NetworkDocument::from_json_str(&doc.to_json_pretty().unwrap()).unwrap();
    assert_eq!(again.network, doc.network);
    assert_eq!(again.options, doc.options);
}

#[test]
fn three_layer_is_a_three_level_network() {
    let net = Network::three_layer(
        Level::new(vec![1.0]),
        Level::new(vec![0.5, 0.5]).with_occupation(vec![vec![1.0], vec![1.0]]),
        Level::new(vec![1.0]).with_occupation(vec![vec![0.3, 0.7]]),
    );
    assert_eq!(net.levels.len(), 3);
    net.validate(StochasticTolerance::default()).unwrap();
}

#[test]
fn validate_delegates_to_the_validator() {
    let net = Network::new(vec![Level::new(vec![1.0])]);
    let defects = net.validate(StochasticTolerance::default()).unwrap_err();
    assert_eq!(defects.count(DefectKind::Structural), 1);
}

#[test]
fn assemble_uses_document_options() {
    let doc = NetworkDocument::from_json_str(DOC).unwrap();
    let scene = doc.assemble().unwrap();
    assert_eq!(scene.canvas.width, 800.0);
    assert_eq!(scene.levels[0].boxes[0].label, "fox");
}
