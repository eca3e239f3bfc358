//! Tests for telemetry helpers

use server_table::util::init_tracing;

#[test]
fn test_init_tracing_is_idempotent() {
    let _ = init_tracing();
    assert!(!init_tracing());
}
