//! Error types for aggregation.

use thiserror::Error;

/// Result type for aggregation operations.
pub type Result<T> = std::result::Result<T, StatsError>;

/// Errors that can occur while computing aggregates.
#[derive(Debug, Error)]
pub enum StatsError {
    /// Polars error
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),

    /// Aggregate extraction error
    #[error("Aggregate extraction error: {0}")]
    Extract(String),
}
