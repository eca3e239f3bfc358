//! # Server Table
//!
//! Query-state controller for server-driven admin tables: search box, named
//! filters and pagination, kept in sync with the page URL.
//!
//! A [`ServerTableController`](core::ServerTableController) owns the state of one
//! table view. It derives the parameters for the server query (debounced search,
//! page, page size, active filters) and rewrites the URL query string whenever the
//! user-facing state changes, so every view is bookmarkable and survives reloads.
//!
//! ## Behaviour at a glance
//!
//! - **Search debouncing**: keystrokes update the URL right away but reach the
//!   query params only after a quiet period (400 ms by default).
//! - **Page resets**: changing the search or a filter returns to page 1.
//! - **Clean URLs**: page 1, the page size, hidden filters and blank values are
//!   never written.
//! - **Lenient parsing**: malformed URL input falls back to defaults instead of
//!   failing.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use server_table::builders::TableControllerBuilder;
//! use server_table::config::TableConfig;
//! use server_table::core::{FilterOption, FilterSpec};
//! use server_table::infra::SharedQueryStore;
//!
//! let url = SharedQueryStore::from_query("?search=shoe&status=active");
//! let mut orders = TableControllerBuilder::new(TableConfig::new(20))
//!     .filter(FilterSpec::new("status").with_options([
//!         FilterOption::new("Active", "active"),
//!         FilterOption::new("Inactive", "inactive"),
//!     ]))
//!     .build(url.clone())?;
//!
//! orders.set_current_page(3);
//! assert_eq!(url.query_string(), "search=shoe&page=3&status=active");
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Builders to construct controllers from configuration.
pub mod builders;
/// Configuration models for table views.
pub mod config;
/// Controller, filters, params, debouncing and export.
pub mod core;
/// URL query-string codec and stores.
pub mod infra;
/// Scheduler adapters and host-facing API models.
pub mod runtime;
/// Shared utilities.
pub mod util;
