//! Error types for the valuation server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Api Error Enum ==
/// Errors surfaced to HTTP callers.
///
/// Only input validation produces client-visible errors; everything past
/// validation degrades inside the engine and still returns 200.
#[derive(Error, Debug)]
pub enum ApiError {
    /// One of make, model, year was missing or empty
    #[error("Missing required parameters: make, model, year")]
    MissingParameters,

    /// vehicle_type was something other than "car" or "bike"
    #[error("Invalid vehicle_type. Must be either \"car\" or \"bike\"")]
    InvalidVehicleType,

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::MissingParameters | ApiError::InvalidVehicleType => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the valuation server.
pub type Result<T> = std::result::Result<T, ApiError>;
