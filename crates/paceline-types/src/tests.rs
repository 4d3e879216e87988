//! Unit tests for paceline-types

use std::collections::HashMap;

use test_case::test_case;

use crate::{BikeConfig, BikeStyle, ConfigParseError, PartAttr, SparesRecord};

// ============================================================================
// Attribute Key Tests
// ============================================================================

#[test_case(PartAttr::Size, "size")]
#[test_case(PartAttr::Chain, "chain")]
#[test_case(PartAttr::TireSize, "tireSize")]
#[test_case(PartAttr::Style, "style")]
#[test_case(PartAttr::TapeColor, "tapeColor")]
#[test_case(PartAttr::FrontShock, "frontShock")]
#[test_case(PartAttr::RearShock, "rearShock")]
#[test_case(PartAttr::Flag, "flag")]
fn attr_names_are_camel_case(attr: PartAttr, expected: &str) {
    assert_eq!(attr.as_str(), expected);
    assert_eq!(attr.to_string(), expected);
    assert_eq!(expected.parse::<PartAttr>().unwrap(), attr);
}

#[test]
fn attr_serializes_to_camel_case_json() {
    let json = serde_json::to_string(&PartAttr::TireSize).unwrap();
    assert_eq!(json, "\"tireSize\"");
}

#[test]
fn unknown_attr_token_is_rejected() {
    let err = "tire_size".parse::<PartAttr>().unwrap_err();
    assert_eq!(err.to_string(), "unknown attribute key: tire_size");
}

#[test]
fn all_lists_every_attr_once() {
    let mut seen = PartAttr::ALL.to_vec();
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), PartAttr::ALL.len());
}

// ============================================================================
// Style Tests
// ============================================================================

#[test_case(BikeStyle::Road, "road")]
#[test_case(BikeStyle::Mountain, "mountain")]
#[test_case(BikeStyle::Recumbent, "recumbent")]
#[test_case(BikeStyle::Generic, "generic")]
fn style_names_round_trip(style: BikeStyle, expected: &str) {
    assert_eq!(style.as_str(), expected);
    assert_eq!(expected.parse::<BikeStyle>().unwrap(), style);
}

#[test]
fn unknown_style_token_is_rejected() {
    let err = "tandem".parse::<BikeStyle>().unwrap_err();
    assert_eq!(err.to_string(), "unknown bicycle style: tandem");
}

#[test_case(BikeStyle::Road, "10-speed", "23")]
#[test_case(BikeStyle::Mountain, "10-speed", "2.1")]
#[test_case(BikeStyle::Recumbent, "9-speed", "28")]
#[test_case(BikeStyle::Generic, "10-speed", "")]
fn style_defaults(style: BikeStyle, chain: &str, tire_size: &str) {
    assert_eq!(style.default_chain(), chain);
    assert_eq!(style.default_tire_size(), tire_size);
}

#[test]
fn local_attrs_never_contain_the_shared_pair() {
    for style in BikeStyle::ALL {
        for attr in style.local_attrs() {
            assert_ne!(*attr, PartAttr::Chain);
            assert_ne!(*attr, PartAttr::TireSize);
        }
    }
}

#[test]
fn generic_is_the_default_style() {
    assert_eq!(BikeStyle::default(), BikeStyle::Generic);
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn absent_attr_is_absent_not_empty() {
    let config = BikeConfig::new().with(PartAttr::Size, "M");
    assert_eq!(config.get(PartAttr::Size), Some("M"));
    assert_eq!(config.get(PartAttr::Chain), None);
    assert!(!config.contains(PartAttr::Chain));
    assert_eq!(config.len(), 1);
}

#[test]
fn insert_replaces_and_returns_previous() {
    let mut config = BikeConfig::new().with(PartAttr::Size, "S");
    let previous = config.insert(PartAttr::Size, "M");
    assert_eq!(previous.as_deref(), Some("S"));
    assert_eq!(config.get(PartAttr::Size), Some("M"));
}

#[test]
fn config_from_hash_map() {
    let mut map = HashMap::new();
    map.insert(PartAttr::Flag, "tall and orange".to_string());
    let config = BikeConfig::from(map);
    assert_eq!(config.get(PartAttr::Flag), Some("tall and orange"));
}

#[test]
fn config_parses_from_toml_text() {
    let config = BikeConfig::from_toml_str(
        r#"
        size = "M"
        tireSize = "25"
        tapeColor = "red"
        "#,
    )
    .unwrap();

    assert_eq!(config.get(PartAttr::Size), Some("M"));
    assert_eq!(config.get(PartAttr::TireSize), Some("25"));
    assert_eq!(config.get(PartAttr::TapeColor), Some("red"));
    assert_eq!(config.len(), 3);
}

#[test]
fn config_parses_from_json_text() {
    let config =
        BikeConfig::from_json_str(r#"{"frontShock": "Manitou", "rearShock": "Fox"}"#).unwrap();

    assert_eq!(config.get(PartAttr::FrontShock), Some("Manitou"));
    assert_eq!(config.get(PartAttr::RearShock), Some("Fox"));
}

#[test]
fn unknown_toml_key_is_rejected() {
    let result = BikeConfig::from_toml_str("mudguard = \"chrome\"");
    assert!(matches!(result, Err(ConfigParseError::Toml(_))));
}

#[test]
fn unknown_json_key_is_rejected() {
    let result = BikeConfig::from_json_str(r#"{"mudguard": "chrome"}"#);
    assert!(matches!(result, Err(ConfigParseError::Json(_))));
}

#[test]
fn config_json_round_trip() {
    let config = BikeConfig::new()
        .with(PartAttr::Size, "L")
        .with(PartAttr::Chain, "11-speed");

    let json = serde_json::to_string(&config).unwrap();
    let back = BikeConfig::from_json_str(&json).unwrap();
    assert_eq!(back, config);
}

// ============================================================================
// Spares Record Tests
// ============================================================================

#[test]
fn spares_record_iterates_in_key_order() {
    let mut spares = SparesRecord::new();
    spares.insert(PartAttr::Flag, "tall and orange");
    spares.insert(PartAttr::Chain, "9-speed");
    spares.insert(PartAttr::TireSize, "28");

    let keys: Vec<PartAttr> = spares.keys().collect();
    assert_eq!(keys, vec![PartAttr::Chain, PartAttr::TireSize, PartAttr::Flag]);
}

#[test]
fn spares_record_serializes_with_camel_case_keys() {
    let mut spares = SparesRecord::new();
    spares.insert(PartAttr::TireSize, "23");
    spares.insert(PartAttr::TapeColor, "red");

    let json = serde_json::to_string(&spares).unwrap();
    assert_eq!(json, r#"{"tireSize":"23","tapeColor":"red"}"#);
}

// ============================================================================
// Property-Based Tests
// ============================================================================

use proptest::prelude::*;

fn arb_attr() -> impl Strategy<Value = PartAttr> {
    prop::sample::select(PartAttr::ALL.to_vec())
}

proptest! {
    /// Property: every attribute name parses back to the same key
    #[test]
    fn prop_attr_display_from_str_round_trip(attr in arb_attr()) {
        let parsed: PartAttr = attr.to_string().parse().unwrap();
        prop_assert_eq!(parsed, attr);
    }

    /// Property: a config holds back exactly what was put in
    #[test]
    fn prop_config_returns_supplied_values(
        entries in prop::collection::hash_map(arb_attr(), "[a-zA-Z0-9 .-]{0,12}", 0..=8),
    ) {
        let config: BikeConfig = entries.clone().into_iter().collect();
        prop_assert_eq!(config.len(), entries.len());
        for (attr, value) in &entries {
            prop_assert_eq!(config.get(*attr), Some(value.as_str()));
        }
    }

    /// Property: JSON round-trip preserves any config
    #[test]
    fn prop_config_json_round_trip(
        entries in prop::collection::hash_map(arb_attr(), "[a-zA-Z0-9 .-]{0,12}", 0..=8),
    ) {
        let config: BikeConfig = entries.into_iter().collect();
        let json = serde_json::to_string(&config).unwrap();
        let back = BikeConfig::from_json_str(&json).unwrap();
        prop_assert_eq!(back, config);
    }
}
