//! Configuration models for table controllers.

pub mod table;

pub use table::{
    TableConfig, DEFAULT_DEBOUNCE_MS, DEFAULT_LIMIT_PARAM_KEY, DEFAULT_PAGE_PARAM_KEY,
    DEFAULT_SEARCH_PARAM_KEY,
};
