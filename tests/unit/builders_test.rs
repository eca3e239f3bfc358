//! Tests for builder modules

use std::sync::Arc;

use server_table::builders::TableControllerBuilder;
use server_table::config::TableConfig;
use server_table::core::{FilterSpec, TableError};
use server_table::infra::MemoryQueryStore;
use server_table::runtime::ManualScheduler;

#[test]
fn test_builder_collects_filters_in_order() {
    let builder = TableControllerBuilder::new(TableConfig::new(10))
        .filter(FilterSpec::new("status"))
        .filters_from([FilterSpec::new("city"), FilterSpec::new("seller")]);
    let keys: Vec<_> = builder.filters().iter().map(|f| f.key.as_str()).collect();
    assert_eq!(keys, vec!["status", "city", "seller"]);
    assert_eq!(builder.config().page_size, 10);
}

#[test]
fn test_builder_builds_with_scheduler() {
    let controller = TableControllerBuilder::new(TableConfig::new(10))
        .filter(FilterSpec::new("status").with_value("open"))
        .scheduler(Arc::new(ManualScheduler::new()))
        .build(MemoryQueryStore::new())
        .unwrap();
    assert_eq!(controller.filter("status").unwrap().value, "open");
    assert_eq!(controller.store().query_string(), "status=open");
}

#[test]
fn test_builder_rejects_duplicate_filters() {
    let result = TableControllerBuilder::new(TableConfig::new(10))
        .filter(FilterSpec::new("status"))
        .filter(FilterSpec::new("status"))
        .scheduler(Arc::new(ManualScheduler::new()))
        .build(MemoryQueryStore::new());
    assert!(matches!(result, Err(TableError::DuplicateKey(_))));
}

#[test]
fn test_builder_rejects_invalid_config() {
    let result = TableControllerBuilder::new(TableConfig::new(0))
        .scheduler(Arc::new(ManualScheduler::new()))
        .build(MemoryQueryStore::new());
    assert!(matches!(result, Err(TableError::InvalidConfig(_))));
}

#[test]
fn test_builder_from_json() {
    let builder = TableControllerBuilder::from_json_str(r#"{ "page_size": 30 }"#).unwrap();
    assert_eq!(builder.config().page_size, 30);
    assert!(TableControllerBuilder::from_json_str("{").is_err());
}

#[test]
fn test_builder_without_runtime_or_scheduler_fails() {
    let result = TableControllerBuilder::new(TableConfig::new(10)).build(MemoryQueryStore::new());
    assert!(matches!(result, Err(TableError::InvalidConfig(_))));
}

#[tokio::test]
async fn test_builder_defaults_to_tokio_scheduler() {
    let controller = TableControllerBuilder::new(TableConfig::new(10))
        .build(MemoryQueryStore::new())
        .unwrap();
    assert_eq!(controller.current_page(), 1);
}
