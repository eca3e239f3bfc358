//! Derived query parameters handed to data-fetching code.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::TableConfig;
use crate::core::FilterSpec;

/// A single query parameter value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Numeric value (page, page size).
    Number(u64),
    /// Text value (search, filters).
    Text(String),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Server query parameters. Absent keys mean "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryParams(BTreeMap<String, ParamValue>);

impl QueryParams {
    /// Empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a text parameter.
    pub fn insert_text(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), ParamValue::Text(value.into()));
    }

    /// Insert a numeric parameter.
    pub fn insert_number(&mut self, key: impl Into<String>, value: u64) {
        self.0.insert(key.into(), ParamValue::Number(value));
    }

    /// Copy with `key` set to a number, e.g. to request another page.
    #[must_use]
    pub fn with_number(mut self, key: impl Into<String>, value: u64) -> Self {
        self.insert_number(key, value);
        self
    }

    /// Look up a parameter.
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.get(key)
    }

    /// Look up a text parameter.
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.0.get(key) {
            Some(ParamValue::Text(s)) => Some(s),
            _ => None,
        }
    }

    /// Look up a numeric parameter.
    pub fn number(&self, key: &str) -> Option<u64> {
        match self.0.get(key) {
            Some(ParamValue::Number(n)) => Some(*n),
            _ => None,
        }
    }

    /// Whether `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if no parameters are set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate parameters in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, ParamValue> {
        self.0.iter()
    }

    /// Render as string pairs for an HTTP query string.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .map(|(k, v)| (k.clone(), v.to_string()))
            .collect()
    }
}

impl<'a> IntoIterator for &'a QueryParams {
    type Item = (&'a String, &'a ParamValue);
    type IntoIter = btree_map::Iter<'a, String, ParamValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Derive server params from the debounced search text, page and filters.
///
/// Limit and page are always present. Search and filters appear only when their
/// trimmed value is non-empty; hidden filters never appear.
pub fn derive_params(
    config: &TableConfig,
    debounced_search: &str,
    current_page: u32,
    filters: &[FilterSpec],
) -> QueryParams {
    let mut params = QueryParams::new();
    params.insert_number(config.limit_param_key.as_str(), u64::from(config.page_size));
    params.insert_number(config.page_param_key.as_str(), u64::from(current_page));

    let search = debounced_search.trim();
    if !search.is_empty() {
        params.insert_text(config.search_param_key.as_str(), search);
    }

    for filter in filters.iter().filter(|f| f.is_active()) {
        params.insert_text(filter.key.as_str(), filter.trimmed());
    }
    params
}
