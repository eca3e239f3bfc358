//! Tests for query-string stores

use server_table::infra::{parse_query, render_query, MemoryQueryStore, QueryStore};

#[test]
fn test_memory_store_seed_and_read() {
    let store = MemoryQueryStore::from_query("?search=shoe&page=3&status=active");
    assert_eq!(store.read().len(), 3);
    assert_eq!(store.replace_count(), 0);
    assert_eq!(store.query_string(), "search=shoe&page=3&status=active");
}

#[test]
fn test_render_then_parse_keeps_order() {
    let pairs = vec![
        ("status".to_string(), "active".to_string()),
        ("city".to_string(), "São Paulo".to_string()),
    ];
    assert_eq!(parse_query(&render_query(&pairs)), pairs);
}

#[test]
fn test_empty_render() {
    assert_eq!(render_query(&[]), "");
}
