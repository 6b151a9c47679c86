//! Handler error type and its HTTP mapping.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Errors surfaced by the HTTP handlers.
#[derive(Debug, Error)]
pub(crate) enum ApiError {
    /// Figure building failed
    #[error("Chart error: {0}")]
    Chart(#[from] podium_charts::ChartError),

    /// No year was supplied and the dataset has no Summer-season years
    #[error("No Summer-season years in the dataset")]
    NoYears,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Chart(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NoYears => StatusCode::BAD_REQUEST,
        };

        (status, Json(json!({"error": self.to_string()}))).into_response()
    }
}
