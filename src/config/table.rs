//! Table controller configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default URL/query key for the search text.
pub const DEFAULT_SEARCH_PARAM_KEY: &str = "search";
/// Default URL/query key for the 1-based page number.
pub const DEFAULT_PAGE_PARAM_KEY: &str = "page";
/// Default query key for the page length.
pub const DEFAULT_LIMIT_PARAM_KEY: &str = "limit";
/// Default quiet period before the search text propagates to the query.
pub const DEFAULT_DEBOUNCE_MS: u64 = 400;

fn default_search_param_key() -> String {
    DEFAULT_SEARCH_PARAM_KEY.to_string()
}

fn default_page_param_key() -> String {
    DEFAULT_PAGE_PARAM_KEY.to_string()
}

fn default_limit_param_key() -> String {
    DEFAULT_LIMIT_PARAM_KEY.to_string()
}

const fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

/// Static configuration of one server-driven table view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Page length sent with every query.
    pub page_size: u32,
    /// Parameter name for the search text.
    #[serde(default = "default_search_param_key")]
    pub search_param_key: String,
    /// Parameter name for the current page.
    #[serde(default = "default_page_param_key")]
    pub page_param_key: String,
    /// Parameter name for the page length. Never written to the URL.
    #[serde(default = "default_limit_param_key")]
    pub limit_param_key: String,
    /// Search debounce window in milliseconds.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl TableConfig {
    /// Create a configuration with the default parameter keys and debounce window.
    pub fn new(page_size: u32) -> Self {
        Self {
            page_size,
            search_param_key: default_search_param_key(),
            page_param_key: default_page_param_key(),
            limit_param_key: default_limit_param_key(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }

    /// Override the search parameter key.
    #[must_use]
    pub fn with_search_param_key(mut self, key: impl Into<String>) -> Self {
        self.search_param_key = key.into();
        self
    }

    /// Override the page parameter key.
    #[must_use]
    pub fn with_page_param_key(mut self, key: impl Into<String>) -> Self {
        self.page_param_key = key.into();
        self
    }

    /// Override the page-size parameter key.
    #[must_use]
    pub fn with_limit_param_key(mut self, key: impl Into<String>) -> Self {
        self.limit_param_key = key.into();
        self
    }

    /// Override the debounce window.
    #[must_use]
    pub const fn with_debounce_ms(mut self, debounce_ms: u64) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }

    /// Debounce window as a [`Duration`].
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Whether `key` is one of the three parameter keys owned by the controller.
    pub fn is_reserved_key(&self, key: &str) -> bool {
        key == self.search_param_key || key == self.page_param_key || key == self.limit_param_key
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.page_size == 0 {
            return Err("page_size must be greater than 0".into());
        }
        let keys = [
            ("search_param_key", &self.search_param_key),
            ("page_param_key", &self.page_param_key),
            ("limit_param_key", &self.limit_param_key),
        ];
        for (name, key) in keys {
            if key.trim().is_empty() {
                return Err(format!("{name} must not be empty"));
            }
        }
        if self.search_param_key == self.page_param_key
            || self.search_param_key == self.limit_param_key
            || self.page_param_key == self.limit_param_key
        {
            return Err("search, page and limit parameter keys must be distinct".into());
        }
        Ok(())
    }

    /// Parse table configuration from a JSON string and validate.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }
}
