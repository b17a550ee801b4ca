// Tests for parameter validation

use serde_json::json;
use silentpush_core::constants::ENRICHMENT_DATA_RESOURCE_OPTIONS;
use silentpush_core::{ActionError, ParameterValidator, Validator};

#[test]
fn test_dropdown_accepts_each_option() {
    for option in ENRICHMENT_DATA_RESOURCE_OPTIONS {
        let canonical = Validator
            .validate_dropdown(option, "resource", ENRICHMENT_DATA_RESOURCE_OPTIONS)
            .unwrap();
        assert_eq!(&canonical, option);
    }
}

#[test]
fn test_dropdown_returns_canonical_casing() {
    let canonical = Validator
        .validate_dropdown("  DoMaIn\t", "resource", ENRICHMENT_DATA_RESOURCE_OPTIONS)
        .unwrap();
    assert_eq!(canonical, "domain");
}

#[test]
fn test_dropdown_rejects_unknown_and_empty() {
    for raw in ["", "ipv4", "domains", "url"] {
        let err = Validator
            .validate_dropdown(raw, "resource", ENRICHMENT_DATA_RESOURCE_OPTIONS)
            .unwrap_err();
        assert!(
            matches!(err, ActionError::InvalidParameter { ref field, .. } if field == "resource"),
            "input {:?} gave {:?}",
            raw,
            err
        );
    }
}

#[test]
fn test_flag_coercion() {
    assert_eq!(Validator.validate_flag(&json!(true), "explain").unwrap(), 1);
    assert_eq!(Validator.validate_flag(&json!(false), "explain").unwrap(), 0);
    assert_eq!(Validator.validate_flag(&json!(" 1 "), "explain").unwrap(), 1);
    assert_eq!(Validator.validate_flag(&json!("FALSE"), "explain").unwrap(), 0);
}

#[test]
fn test_flag_rejects_non_scalars() {
    for raw in [json!([1]), json!({"on": true}), json!(""), json!("on")] {
        let err = Validator.validate_flag(&raw, "scan_data").unwrap_err();
        assert!(
            matches!(err, ActionError::MalformedParameter { ref field, .. } if field == "scan_data"),
            "input {} gave {:?}",
            raw,
            err
        );
    }
}
