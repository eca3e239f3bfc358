//! Builder for [`ServerTableController`].

use std::sync::Arc;

use crate::config::TableConfig;
use crate::core::{FilterSpec, Scheduler, ServerTableController, TableError};
use crate::infra::QueryStore;

/// Collects configuration, filters and collaborators for a table controller.
pub struct TableControllerBuilder {
    config: TableConfig,
    filters: Vec<FilterSpec>,
    scheduler: Option<Arc<dyn Scheduler>>,
}

impl TableControllerBuilder {
    /// Start from a configuration.
    pub const fn new(config: TableConfig) -> Self {
        Self {
            config,
            filters: Vec::new(),
            scheduler: None,
        }
    }

    /// Start from a JSON configuration string.
    pub fn from_json_str(input: &str) -> Result<Self, TableError> {
        TableConfig::from_json_str(input)
            .map(Self::new)
            .map_err(|e| TableError::InvalidConfig(format!("config invalid: {e}")))
    }

    /// Configuration being built.
    pub const fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Filters added so far.
    pub fn filters(&self) -> &[FilterSpec] {
        &self.filters
    }

    /// Append a filter; order is preserved.
    #[must_use]
    pub fn filter(mut self, filter: FilterSpec) -> Self {
        self.filters.push(filter);
        self
    }

    /// Append several filters.
    #[must_use]
    pub fn filters_from(mut self, filters: impl IntoIterator<Item = FilterSpec>) -> Self {
        self.filters.extend(filters);
        self
    }

    /// Use `scheduler` for the search debounce timer.
    #[must_use]
    pub fn scheduler(mut self, scheduler: Arc<dyn Scheduler>) -> Self {
        self.scheduler = Some(scheduler);
        self
    }

    /// Build a controller owning `store`.
    ///
    /// Without an explicit scheduler the tokio scheduler of the current runtime
    /// is used when the `tokio-runtime` feature is on.
    pub fn build<S: QueryStore>(self, store: S) -> Result<ServerTableController<S>, TableError> {
        let scheduler = match self.scheduler {
            Some(scheduler) => scheduler,
            None => default_scheduler()?,
        };
        ServerTableController::new(self.config, self.filters, store, scheduler)
    }
}

#[cfg(feature = "tokio-runtime")]
fn default_scheduler() -> Result<Arc<dyn Scheduler>, TableError> {
    tokio::runtime::Handle::try_current()
        .map(|handle| Arc::new(crate::runtime::TokioScheduler::new(handle)) as Arc<dyn Scheduler>)
        .map_err(|e| TableError::InvalidConfig(format!("no scheduler and no tokio runtime: {e}")))
}

#[cfg(not(feature = "tokio-runtime"))]
fn default_scheduler() -> Result<Arc<dyn Scheduler>, TableError> {
    Err(TableError::InvalidConfig("a scheduler is required".into()))
}
