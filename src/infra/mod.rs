//! Infrastructure adapters for the URL query string.

pub mod query_string;
pub mod store;

pub use query_string::{parse_query, render_query, QueryPairs};
pub use store::{MemoryQueryStore, QueryStore, SharedQueryStore};
