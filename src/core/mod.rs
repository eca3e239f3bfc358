//! Table query state, filters, derived params and debouncing.

pub mod codec;
pub mod controller;
pub mod debounce;
pub mod error;
pub mod export;
pub mod filter;
pub mod pagination;
pub mod params;
pub mod scheduler;

pub use codec::FilterCodec;
pub use controller::{parse_page, ServerTableController};
pub use debounce::{Debouncer, SettleHook, Settled};
pub use error::{AppResult, TableError};
pub use export::{
    export_all, ExportCancel, ExportOptions, ExportProgress, Page, PageSource, DEFAULT_MAX_PAGES,
};
pub use filter::{validate_filters, FilterOption, FilterSpec};
pub use pagination::{page_count, page_window};
pub use params::{derive_params, ParamValue, QueryParams};
pub use scheduler::{ScheduledFn, ScheduledHandle, Scheduler};
