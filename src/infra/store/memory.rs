//! In-process query stores.

use std::sync::Arc;

use parking_lot::Mutex;

use super::QueryStore;
use crate::infra::query_string::{parse_query, render_query, QueryPairs};

/// In-memory address bar holding query pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryQueryStore {
    pairs: QueryPairs,
    replace_count: usize,
}

impl MemoryQueryStore {
    /// Empty query string.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from a query string such as `?search=shoe&page=3`.
    pub fn from_query(query: &str) -> Self {
        Self {
            pairs: parse_query(query),
            replace_count: 0,
        }
    }

    /// Current query string without the leading `?`.
    pub fn query_string(&self) -> String {
        render_query(&self.pairs)
    }

    /// Current pairs.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Number of history-replacing writes so far.
    pub const fn replace_count(&self) -> usize {
        self.replace_count
    }
}

impl QueryStore for MemoryQueryStore {
    fn read(&self) -> QueryPairs {
        self.pairs.clone()
    }

    fn replace(&mut self, pairs: QueryPairs) {
        self.pairs = pairs;
        self.replace_count += 1;
    }
}

/// Clonable handle to a [`MemoryQueryStore`], so a host can watch the URL
/// while the controller holds the writer.
#[derive(Debug, Clone, Default)]
pub struct SharedQueryStore {
    inner: Arc<Mutex<MemoryQueryStore>>,
}

impl SharedQueryStore {
    /// Wrap a store.
    pub fn new(store: MemoryQueryStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Seed from a query string.
    pub fn from_query(query: &str) -> Self {
        Self::new(MemoryQueryStore::from_query(query))
    }

    /// Current query string without the leading `?`.
    pub fn query_string(&self) -> String {
        self.inner.lock().query_string()
    }

    /// Number of history-replacing writes so far.
    pub fn replace_count(&self) -> usize {
        self.inner.lock().replace_count()
    }
}

impl QueryStore for SharedQueryStore {
    fn read(&self) -> QueryPairs {
        self.inner.lock().read()
    }

    fn replace(&mut self, pairs: QueryPairs) {
        self.inner.lock().replace(pairs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_overwrites_everything() {
        let mut store = MemoryQueryStore::from_query("?a=1&b=2");
        store.replace(vec![("c".to_string(), "3".to_string())]);
        assert_eq!(store.query_string(), "c=3");
        assert_eq!(store.replace_count(), 1);
    }

    #[test]
    fn test_shared_handles_see_writes() {
        let observer = SharedQueryStore::from_query("x=1");
        let mut writer = observer.clone();
        writer.replace(Vec::new());
        assert_eq!(observer.query_string(), "");
        assert_eq!(observer.replace_count(), 1);
    }
}
