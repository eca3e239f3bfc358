//! Named filters bound to filter controls.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::config::TableConfig;
use crate::core::TableError;

/// One selectable choice offered by a filter control. Advisory only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    /// Display label.
    pub label: String,
    /// Value written to the filter when selected.
    pub value: String,
}

impl FilterOption {
    /// Create an option.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// A named filter and its current value.
///
/// `value` is always a string; the empty string means "unset". Typed values are
/// converted at the caller boundary with [`FilterCodec`](crate::core::FilterCodec).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Stable identifier, also used as the query/URL key.
    pub key: String,
    /// Optional display label.
    #[serde(default)]
    pub label: Option<String>,
    /// Current value; `""` when unset.
    #[serde(default)]
    pub value: String,
    /// Choices offered by the control, in display order.
    #[serde(default)]
    pub options: Vec<FilterOption>,
    /// Optional placeholder text.
    #[serde(default)]
    pub placeholder: Option<String>,
    /// Hidden filters stay in state but never reach params or the URL.
    #[serde(default)]
    pub hidden: bool,
}

impl FilterSpec {
    /// Create an unset, visible filter.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: None,
            value: String::new(),
            options: Vec::new(),
            placeholder: None,
            hidden: false,
        }
    }

    /// Set the default value.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Set the display label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the offered options.
    #[must_use]
    pub fn with_options(mut self, options: impl IntoIterator<Item = FilterOption>) -> Self {
        self.options = options.into_iter().collect();
        self
    }

    /// Set the placeholder text.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Mark the filter hidden.
    #[must_use]
    pub const fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Trimmed value.
    pub fn trimmed(&self) -> &str {
        self.value.trim()
    }

    /// True when the filter contributes to params and the URL.
    pub fn is_active(&self) -> bool {
        !self.hidden && !self.trimmed().is_empty()
    }
}

/// Check filter keys are non-empty, unique and clear of the reserved parameter keys.
pub fn validate_filters(filters: &[FilterSpec], config: &TableConfig) -> Result<(), TableError> {
    let mut seen = HashSet::with_capacity(filters.len());
    for filter in filters {
        if filter.key.trim().is_empty() {
            return Err(TableError::InvalidConfig("filter key must not be empty".into()));
        }
        if config.is_reserved_key(&filter.key) || !seen.insert(filter.key.as_str()) {
            return Err(TableError::DuplicateKey(filter.key.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_active() {
        assert!(!FilterSpec::new("status").is_active());
        assert!(!FilterSpec::new("status").with_value("   ").is_active());
        assert!(FilterSpec::new("status").with_value(" open ").is_active());
        assert!(!FilterSpec::new("status").with_value("open").hidden(true).is_active());
    }

    #[test]
    fn test_validate_rejects_duplicates() {
        let config = TableConfig::new(10);
        let filters = vec![FilterSpec::new("status"), FilterSpec::new("status")];
        assert!(matches!(
            validate_filters(&filters, &config),
            Err(TableError::DuplicateKey(key)) if key == "status"
        ));
    }

    #[test]
    fn test_validate_rejects_reserved_keys() {
        let config = TableConfig::new(10);
        for key in ["search", "page", "limit"] {
            assert!(validate_filters(&[FilterSpec::new(key)], &config).is_err());
        }
    }

    #[test]
    fn test_validate_rejects_empty_key() {
        let config = TableConfig::new(10);
        assert!(matches!(
            validate_filters(&[FilterSpec::new(" ")], &config),
            Err(TableError::InvalidConfig(_))
        ));
    }
}
