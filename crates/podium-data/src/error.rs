//! Error types for dataset loading.

use thiserror::Error;

/// Result type for dataset operations.
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors that can occur while loading or validating the dataset.
#[derive(Debug, Error)]
pub enum DataError {
    /// Network error while fetching the CSV
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Polars error
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A column the dashboard depends on is absent from the CSV
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// Data extraction error
    #[error("Data parsing error: {0}")]
    Parse(String),
}
