//! Tests for error types

use server_table::core::TableError;

#[test]
fn test_invalid_config_error() {
    let err = TableError::InvalidConfig("page_size must be greater than 0".to_string());
    assert_eq!(
        format!("{}", err),
        "invalid config: page_size must be greater than 0"
    );
}

#[test]
fn test_duplicate_key_error() {
    let err = TableError::DuplicateKey("status".to_string());
    assert_eq!(format!("{}", err), "duplicate key: status");
}

#[test]
fn test_cancelled_error() {
    assert_eq!(format!("{}", TableError::Cancelled), "export cancelled");
}

#[test]
fn test_source_error() {
    let err = TableError::Source("503 from orders api".to_string());
    assert_eq!(format!("{}", err), "source error: 503 from orders api");
}
