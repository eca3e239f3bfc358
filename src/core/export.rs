//! Client-side export that walks every page of a server-driven table.
//!
//! Rows are fetched page by page with the table's current params, accumulated in
//! order, and progress is reported after each page. Encoding the rows (CSV or
//! otherwise) is left to the caller.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::{QueryParams, TableError};

/// Default upper bound on pages fetched by one export.
pub const DEFAULT_MAX_PAGES: u32 = 10_000;

/// One page of rows returned by a data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<R> {
    /// Rows on this page.
    pub rows: Vec<R>,
    /// Total matching rows, if the source reports it.
    pub total: Option<u64>,
}

/// Data source queried with derived table params.
///
/// # Example
///
/// ```rust,ignore
/// use async_trait::async_trait;
/// use server_table::core::{Page, PageSource, QueryParams, TableError};
///
/// struct OrdersApi { client: reqwest::Client }
///
/// #[async_trait]
/// impl PageSource<Order> for OrdersApi {
///     async fn fetch_page(&self, params: &QueryParams) -> Result<Page<Order>, TableError> {
///         self.client
///             .get("https://admin.example/api/orders")
///             .query(&params.to_pairs())
///             .send()
///             .await
///             .map_err(|e| TableError::Source(e.to_string()))?
///             .json()
///             .await
///             .map_err(|e| TableError::Source(e.to_string()))
///     }
/// }
/// ```
#[async_trait]
pub trait PageSource<R>: Send + Sync
where
    R: Send + 'static,
{
    /// Fetch the page selected by `params`.
    async fn fetch_page(&self, params: &QueryParams) -> Result<Page<R>, TableError>;
}

/// Progress reported after every fetched page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportProgress {
    /// Page just fetched (1-based).
    pub page: u32,
    /// Rows accumulated so far.
    pub fetched: u64,
    /// Total rows reported by the source, if known.
    pub total: Option<u64>,
}

impl ExportProgress {
    /// Completed fraction in `0.0..=1.0`, when the total is known.
    #[allow(clippy::cast_precision_loss)]
    pub fn ratio(&self) -> Option<f64> {
        match self.total {
            Some(0) => Some(1.0),
            Some(total) => Some((self.fetched as f64 / total as f64).min(1.0)),
            None => None,
        }
    }
}

/// Cancellation flag shared between the export and its caller.
#[derive(Debug, Clone, Default)]
pub struct ExportCancel(Arc<AtomicBool>);

impl ExportCancel {
    /// New, not cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation; the export stops before its next fetch.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Whether cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Options for [`export_all`].
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Parameter key carrying the page number.
    pub page_key: String,
    /// Parameter key carrying the page length.
    pub limit_key: String,
    /// Rows requested per page.
    pub page_size: u32,
    /// Stop after this many pages even if the source keeps returning full pages.
    pub max_pages: u32,
}

impl ExportOptions {
    /// Options matching a table configuration.
    pub fn from_config(config: &crate::config::TableConfig) -> Self {
        Self {
            page_key: config.page_param_key.clone(),
            limit_key: config.limit_param_key.clone(),
            page_size: config.page_size,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }

    /// Override the page cap.
    #[must_use]
    pub const fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages;
        self
    }
}

/// Fetch every page for `base_params` and return the accumulated rows.
///
/// The page and limit keys of `base_params` are overridden per request. The walk
/// ends on an empty or short page, once the reported total is reached, or at
/// `max_pages`.
pub async fn export_all<R, P, F>(
    source: &P,
    base_params: &QueryParams,
    options: &ExportOptions,
    cancel: &ExportCancel,
    mut on_progress: F,
) -> Result<Vec<R>, TableError>
where
    R: Send + 'static,
    P: PageSource<R> + ?Sized,
    F: FnMut(ExportProgress),
{
    if options.page_size == 0 {
        return Err(TableError::InvalidConfig("export page_size must be greater than 0".into()));
    }

    let mut rows = Vec::new();
    let mut page = 1_u32;
    loop {
        if cancel.is_cancelled() {
            tracing::debug!(page, fetched = rows.len(), "export cancelled");
            return Err(TableError::Cancelled);
        }

        let params = base_params
            .clone()
            .with_number(options.limit_key.as_str(), u64::from(options.page_size))
            .with_number(options.page_key.as_str(), u64::from(page));
        let batch = source.fetch_page(&params).await?;
        let batch_len = batch.rows.len();
        rows.extend(batch.rows);

        let fetched = rows.len() as u64;
        on_progress(ExportProgress {
            page,
            fetched,
            total: batch.total,
        });
        tracing::trace!(page, batch = batch_len, fetched, "export page fetched");

        let short_page = batch_len < options.page_size as usize;
        let reached_total = batch.total.is_some_and(|total| fetched >= total);
        if short_page || reached_total {
            break;
        }
        if page >= options.max_pages {
            tracing::debug!(max_pages = options.max_pages, "export page cap reached");
            break;
        }
        page += 1;
    }

    tracing::debug!(pages = page, rows = rows.len(), "export finished");
    Ok(rows)
}
