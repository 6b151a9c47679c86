//! Error types for figure building.

use thiserror::Error;

/// Result type for figure building.
pub type Result<T> = std::result::Result<T, ChartError>;

/// Errors that can occur while building a figure.
#[derive(Debug, Error)]
pub enum ChartError {
    /// Aggregation failed
    #[error("Aggregation error: {0}")]
    Stats(#[from] podium_stats::StatsError),
}
