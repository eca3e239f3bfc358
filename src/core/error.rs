//! Error types for table controller construction and export.

use thiserror::Error;

/// Errors produced by table components.
///
/// The controller's runtime handlers never fail; these cover construction-time
/// validation and the paged export loop.
#[derive(Debug, Error)]
pub enum TableError {
    /// Table configuration failed validation.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    /// A filter key is repeated or collides with a reserved parameter key.
    #[error("duplicate key: {0}")]
    DuplicateKey(String),
    /// Export was cancelled by the caller.
    #[error("export cancelled")]
    Cancelled,
    /// Data source failure with context.
    #[error("source error: {0}")]
    Source(String),
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
