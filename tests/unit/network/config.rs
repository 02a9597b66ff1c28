use super::*;

#[test]
fn defaults_match_documented_values() {
    let cfg = NetworkConfig::default();
    assert_eq!(cfg.separator_width, 5.0);
    assert_eq!(cfg.rectangle_height, 30.0);
    assert_eq!(cfg.space_between_levels, 150.0);
    assert_eq!(cfg.canvas_width, 500.0);
    assert_eq!(cfg.default_colors(), ColorPair::new("black", "white"));
    assert_eq!(cfg.label_font, LabelFont::default());
    assert_eq!(cfg.tolerance(), StochasticTolerance::new(2));
    assert_eq!(cfg.stacking, Stacking::TopDown);
    assert_eq!(cfg.level_pitch(), 180.0);
    cfg.validate().unwrap();
}

#[test]
fn partial_json_keeps_remaining_defaults() {
    let cfg: NetworkConfig =
        serde_json::from_str(r#"{"rectangle_height": 10, "stacking": "bottom_up"}"#).unwrap();
    assert_eq!(cfg.rectangle_height, 10.0);
    assert_eq!(cfg.stacking, Stacking::BottomUp);
    assert_eq!(cfg.canvas_width, 500.0);
    assert!(cfg.parallel);
}

#[test]
fn rejects_unusable_values() {
    let cases = [
        NetworkConfig {
            separator_width: -1.0,
            ..NetworkConfig::default()
        },
        NetworkConfig {
            canvas_width: 0.0,
            ..NetworkConfig::default()
        },
        NetworkConfig {
            rectangle_height: f64::NAN,
            ..NetworkConfig::default()
        },
        NetworkConfig {
            space_between_levels: f64::INFINITY,
            ..NetworkConfig::default()
        },
        NetworkConfig {
            sum_precision: 40,
            ..NetworkConfig::default()
        },
        NetworkConfig {
            label_font: LabelFont {
                family: " ".to_string(),
                size: 12.0,
            },
            ..NetworkConfig::default()
        },
    ];
    for cfg in cases {
        let err = cfg.validate().unwrap_err();
        assert!(matches!(err, TrophicError::Config(_)), "{cfg:?}");
    }
}
