//! URL query stores.
//!
//! A [`QueryStore`] is the controller's view of the address bar. Exactly one
//! controller owns the writer for a page: every sync rewrites the whole query
//! string, so parameters set by anyone else are dropped on the next write.

pub mod memory;

pub use memory::{MemoryQueryStore, SharedQueryStore};

use super::QueryPairs;

/// Read/replace access to the current URL query.
pub trait QueryStore: Send {
    /// Current query pairs in URL order.
    fn read(&self) -> QueryPairs;
    /// Atomically replace the whole query string without adding a history entry.
    fn replace(&mut self, pairs: QueryPairs);
}
