//! Host-facing models describing a table view.

use serde::{Deserialize, Serialize};

use crate::core::{FilterSpec, QueryParams, ServerTableController};
use crate::infra::QueryStore;

/// Everything a table view binds to, captured at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSnapshot {
    /// Immediate search text.
    pub search_value: String,
    /// Debounced search text feeding `params`.
    pub debounced_search_value: String,
    /// Current 1-based page.
    pub current_page: u32,
    /// Static page length.
    pub page_size: u32,
    /// Filters in display order.
    pub filters: Vec<FilterSpec>,
    /// Derived server params.
    pub params: QueryParams,
}

/// Capture a controller's exposed state.
pub fn snapshot<S: QueryStore>(controller: &ServerTableController<S>) -> TableSnapshot {
    TableSnapshot {
        search_value: controller.search_value(),
        debounced_search_value: controller.debounced_search_value(),
        current_page: controller.current_page(),
        page_size: controller.page_size(),
        filters: controller.filters(),
        params: controller.params(),
    }
}
