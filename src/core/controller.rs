//! Server-driven table controller.
//!
//! Owns the search text, current page and named filters of one table view,
//! derives debounced server params from them, and mirrors the immediate state
//! into the URL query string.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use server_table::config::TableConfig;
//! use server_table::core::{FilterSpec, ServerTableController};
//! use server_table::infra::MemoryQueryStore;
//! use server_table::runtime::TokioScheduler;
//!
//! let mut table = ServerTableController::new(
//!     TableConfig::new(20),
//!     vec![FilterSpec::new("status")],
//!     MemoryQueryStore::from_query("?search=shoe&page=3"),
//!     Arc::new(TokioScheduler::current()),
//! )?;
//! let mut params = table.subscribe();
//! table.on_filter_change("status", "active");
//! params.changed().await?;
//! fetch_orders(&params.borrow()).await?;
//! ```

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;
use uuid::Uuid;

use crate::config::TableConfig;
use crate::core::codec::FilterCodec;
use crate::core::debounce::{Debouncer, Settled};
use crate::core::filter::{validate_filters, FilterSpec};
use crate::core::pagination;
use crate::core::params::{derive_params, QueryParams};
use crate::core::scheduler::Scheduler;
use crate::core::TableError;
use crate::infra::query_string::{first_value, QueryPairs};
use crate::infra::QueryStore;

/// Immediate, user-facing table state.
#[derive(Debug, Clone, PartialEq, Eq)]
struct TableState {
    search_value: String,
    current_page: u32,
    filters: Vec<FilterSpec>,
}

/// Parse a page number the lenient way: anything that is not a finite number
/// of at least one becomes page 1. Fractions truncate.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn parse_page(raw: Option<&str>) -> u32 {
    let Some(raw) = raw else {
        return 1;
    };
    match raw.trim().parse::<f64>() {
        Ok(n) if n.is_finite() && n >= 1.0 => {
            if n >= f64::from(u32::MAX) {
                u32::MAX
            } else {
                n.trunc() as u32
            }
        }
        _ => 1,
    }
}

/// Query state controller for one mounted table view.
///
/// The controller is the only writer of the query string in `S`; see
/// [`QueryStore`] for the ownership contract.
pub struct ServerTableController<S: QueryStore> {
    id: Uuid,
    config: Arc<TableConfig>,
    defaults: Vec<FilterSpec>,
    state: Arc<Mutex<TableState>>,
    search: Debouncer<String>,
    params_tx: Arc<watch::Sender<QueryParams>>,
    store: S,
}

impl<S: QueryStore> ServerTableController<S> {
    /// Create a controller seeded from the store's current query.
    ///
    /// Keys absent from the URL fall back to the supplied filter defaults. The
    /// URL is normalized right away, dropping parameters the controller does not own.
    pub fn new(
        config: TableConfig,
        initial_filters: Vec<FilterSpec>,
        store: S,
        scheduler: Arc<dyn Scheduler>,
    ) -> Result<Self, TableError> {
        config
            .validate()
            .map_err(|e| TableError::InvalidConfig(format!("config invalid: {e}")))?;
        validate_filters(&initial_filters, &config)?;

        let id = Uuid::new_v4();
        let config = Arc::new(config);
        let url = store.read();
        let state = seed_state(&config, &initial_filters, &url);
        let initial_params = derive_params(
            &config,
            &state.search_value,
            state.current_page,
            &state.filters,
        );
        let (params_tx, _) = watch::channel(initial_params);
        let params_tx = Arc::new(params_tx);

        let search_value = state.search_value.clone();
        let state = Arc::new(Mutex::new(state));

        let hook_state = Arc::clone(&state);
        let hook_config = Arc::clone(&config);
        let hook_tx = Arc::clone(&params_tx);
        let search = Debouncer::new(search_value, config.debounce(), scheduler).on_settle(
            move |settled: &Settled<String>| {
                // Table lock first, then the settled value: same order as `mutate`,
                // so whichever publish runs last carries the newest search.
                let state = hook_state.lock();
                let debounced = settled.get();
                let params = derive_params(
                    &hook_config,
                    &debounced,
                    state.current_page,
                    &state.filters,
                );
                tracing::trace!(table = %id, search = %debounced, "debounced search settled");
                publish(&hook_tx, params);
            },
        );

        tracing::debug!(
            table = %id,
            page_size = config.page_size,
            filters = initial_filters.len(),
            "table controller created"
        );

        let mut controller = Self {
            id,
            config,
            defaults: initial_filters,
            state,
            search,
            params_tx,
            store,
        };
        controller.sync_url();
        Ok(controller)
    }

    /// Instance identifier used in log events.
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Table configuration.
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Immediate search text, as typed.
    pub fn search_value(&self) -> String {
        self.state.lock().search_value.clone()
    }

    /// Search text after the debounce window.
    pub fn debounced_search_value(&self) -> String {
        self.search.value()
    }

    /// Current 1-based page.
    pub fn current_page(&self) -> u32 {
        self.state.lock().current_page
    }

    /// Static page length.
    pub fn page_size(&self) -> u32 {
        self.config.page_size
    }

    /// Filters in caller-supplied order.
    pub fn filters(&self) -> Vec<FilterSpec> {
        self.state.lock().filters.clone()
    }

    /// Filter by key.
    pub fn filter(&self, key: &str) -> Option<FilterSpec> {
        self.state.lock().filters.iter().find(|f| f.key == key).cloned()
    }

    /// Decode a filter value into a domain type.
    pub fn filter_as<T: FilterCodec>(&self, key: &str) -> Option<T> {
        self.filter(key).and_then(|f| T::decode(&f.value))
    }

    /// Server params derived from the debounced search, page and filters.
    pub fn params(&self) -> QueryParams {
        let state = self.state.lock();
        derive_params(
            &self.config,
            &self.search.value(),
            state.current_page,
            &state.filters,
        )
    }

    /// Watch derived params. The receiver only ticks when the params change.
    pub fn subscribe(&self) -> watch::Receiver<QueryParams> {
        self.params_tx.subscribe()
    }

    /// The query store owned by this controller.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Pages needed to show `total_items`.
    pub fn page_count(&self, total_items: u64) -> u32 {
        pagination::page_count(total_items, self.config.page_size)
    }

    /// Pagination window around the current page for `total_items`.
    pub fn page_window(&self, total_items: u64) -> Vec<Option<u32>> {
        pagination::page_window(self.page_count(total_items), self.current_page())
    }

    /// Search input changed. Resets to page 1.
    pub fn on_search_change(&mut self, value: impl Into<String>) {
        let value = value.into();
        let (search_changed, changed) = self.mutate(|state| {
            let search_changed = state.search_value != value;
            if search_changed {
                state.search_value.clone_from(&value);
            }
            state.current_page = 1;
        });
        if search_changed {
            tracing::debug!(table = %self.id, search = %value, "search changed");
            self.search.reschedule(value);
        }
        if changed {
            self.sync_url();
        }
    }

    /// Filter control changed. Resets to page 1; unknown keys leave the filters untouched.
    pub fn on_filter_change(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        let mut found = false;
        let (_, changed) = self.mutate(|state| {
            if let Some(filter) = state.filters.iter_mut().find(|f| f.key == key) {
                found = true;
                filter.value.clone_from(&value);
            }
            state.current_page = 1;
        });
        if found {
            tracing::debug!(table = %self.id, key, value = %value, "filter changed");
        } else {
            tracing::trace!(table = %self.id, key, "ignoring change for unknown filter");
        }
        if changed {
            self.sync_url();
        }
    }

    /// Set a filter from a typed value.
    pub fn set_filter<T: FilterCodec>(&mut self, key: &str, value: &T) {
        self.on_filter_change(key, value.encode());
    }

    /// Navigate to `page`. Page 0 is treated as page 1.
    pub fn set_current_page(&mut self, page: u32) {
        let page = page.max(1);
        let (_, changed) = self.mutate(|state| state.current_page = page);
        if changed {
            tracing::debug!(table = %self.id, page, "page changed");
            self.sync_url();
        }
    }

    /// Empty the search and every filter and return to page 1.
    ///
    /// Filters become `""`, not their construction-time defaults; use
    /// [`reset_to_defaults`](Self::reset_to_defaults) for that.
    pub fn clear_all(&mut self) {
        self.reset_with(|_| String::new());
        tracing::debug!(table = %self.id, "filters cleared");
    }

    /// Empty the search, restore each filter's construction-time default and
    /// return to page 1.
    pub fn reset_to_defaults(&mut self) {
        let defaults = self.defaults.clone();
        self.reset_with(|key| {
            defaults
                .iter()
                .find(|f| f.key == key)
                .map(|f| f.value.clone())
                .unwrap_or_default()
        });
        tracing::debug!(table = %self.id, "filters reset to defaults");
    }

    /// Commit a pending search immediately instead of waiting out the debounce.
    pub fn flush_search(&self) {
        self.search.flush();
    }

    fn reset_with(&mut self, value_for: impl Fn(&str) -> String) {
        let (search_changed, changed) = self.mutate(|state| {
            state.search_value.clear();
            state.current_page = 1;
            for filter in &mut state.filters {
                filter.value = value_for(&filter.key);
            }
        });
        if search_changed {
            self.search.reschedule(String::new());
        }
        if changed {
            self.sync_url();
        }
    }

    /// Apply `f` under the state lock and republish params.
    /// Returns (search text changed, any state changed).
    fn mutate(&self, f: impl FnOnce(&mut TableState)) -> (bool, bool) {
        let mut state = self.state.lock();
        let before = state.clone();
        f(&mut state);
        let search_changed = before.search_value != state.search_value;
        let changed = before != *state;
        if changed {
            let params = derive_params(
                &self.config,
                &self.search.value(),
                state.current_page,
                &state.filters,
            );
            publish(&self.params_tx, params);
        }
        (search_changed, changed)
    }

    /// Rewrite the whole query string from the immediate state.
    fn sync_url(&mut self) {
        let pairs = {
            let state = self.state.lock();
            url_pairs(&self.config, &state)
        };
        tracing::trace!(table = %self.id, params = pairs.len(), "syncing url");
        self.store.replace(pairs);
    }
}

impl<S: QueryStore> Drop for ServerTableController<S> {
    fn drop(&mut self) {
        self.search.cancel();
        tracing::debug!(table = %self.id, "table controller dropped");
    }
}

fn non_empty<'a>(url: &'a [(String, String)], key: &str) -> Option<&'a str> {
    first_value(url, key).filter(|v| !v.is_empty())
}

fn seed_state(
    config: &TableConfig,
    initial_filters: &[FilterSpec],
    url: &[(String, String)],
) -> TableState {
    let search_value = non_empty(url, &config.search_param_key)
        .unwrap_or_default()
        .to_string();
    let current_page = parse_page(first_value(url, &config.page_param_key));
    let filters = initial_filters
        .iter()
        .map(|filter| {
            let mut filter = filter.clone();
            if let Some(value) = non_empty(url, &filter.key) {
                filter.value = value.to_string();
            }
            filter
        })
        .collect();

    TableState {
        search_value,
        current_page,
        filters,
    }
}

fn url_pairs(config: &TableConfig, state: &TableState) -> QueryPairs {
    let mut pairs = Vec::new();
    if !state.search_value.trim().is_empty() {
        pairs.push((config.search_param_key.clone(), state.search_value.clone()));
    }
    if state.current_page > 1 {
        pairs.push((config.page_param_key.clone(), state.current_page.to_string()));
    }
    for filter in state.filters.iter().filter(|f| f.is_active()) {
        pairs.push((filter.key.clone(), filter.value.clone()));
    }
    pairs
}

fn publish(tx: &watch::Sender<QueryParams>, params: QueryParams) {
    tx.send_if_modified(|current| {
        if *current == params {
            false
        } else {
            *current = params;
            true
        }
    });
}
