use super::*;
use crate::validate::{Defect, DefectKind};

#[test]
fn display_prefixes_are_stable() {
    assert!(
        TrophicError::config("x")
            .to_string()
            .contains("configuration error:")
    );
    assert!(
        TrophicError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn invalid_lists_every_defect_on_its_own_line() {
    let defects = Defects {
        defects: vec![
            Defect {
                kind: DefectKind::StochasticSum,
                level: Some(0),
                row: None,
                message: "a".to_string(),
            },
            Defect {
                kind: DefectKind::ShapeMismatch,
                level: Some(2),
                row: Some(1),
                message: "b".to_string(),
            },
        ],
    };
    let err = TrophicError::from(defects);
    let msg = err.to_string();
    assert!(msg.starts_with("invalid trophic network:"));
    assert!(msg.contains("\nlevel 1: a"));
    assert!(msg.contains("\nlevel 3, row 2: b"));
    assert_eq!(err.defects().map(Defects::len), Some(2));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = TrophicError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
    assert!(err.defects().is_none());
}
