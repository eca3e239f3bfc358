//! Tests for configuration validation

use server_table::config::TableConfig;

#[test]
fn test_defaults() {
    let config = TableConfig::new(20);
    assert_eq!(config.page_size, 20);
    assert_eq!(config.search_param_key, "search");
    assert_eq!(config.page_param_key, "page");
    assert_eq!(config.limit_param_key, "limit");
    assert_eq!(config.debounce_ms, 400);
    assert!(config.validate().is_ok());
}

#[test]
fn test_invalid_page_size() {
    assert!(TableConfig::new(0).validate().is_err());
}

#[test]
fn test_invalid_empty_key() {
    let config = TableConfig::new(10).with_search_param_key("");
    assert!(config.validate().is_err());
}

#[test]
fn test_invalid_colliding_keys() {
    let config = TableConfig::new(10).with_page_param_key("limit");
    assert!(config.validate().is_err());
}

#[test]
fn test_from_json_applies_defaults() {
    let config = TableConfig::from_json_str(r#"{ "page_size": 50 }"#).unwrap();
    assert_eq!(config, TableConfig::new(50));
}

#[test]
fn test_from_json_custom_keys() {
    let json = r#"{
        "page_size": 15,
        "search_param_key": "q",
        "page_param_key": "p",
        "limit_param_key": "per_page",
        "debounce_ms": 250
    }"#;
    let config = TableConfig::from_json_str(json).unwrap();
    assert_eq!(config.search_param_key, "q");
    assert_eq!(config.limit_param_key, "per_page");
    assert_eq!(config.debounce().as_millis(), 250);
}

#[test]
fn test_from_json_rejects_invalid() {
    assert!(TableConfig::from_json_str(r#"{ "page_size": 0 }"#).is_err());
    assert!(TableConfig::from_json_str("not json").is_err());
    assert!(TableConfig::from_json_str("{}").is_err());
}
