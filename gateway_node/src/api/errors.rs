//! API error handling for the gateway.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use std::fmt;

use crate::fuel::FuelClientError;

/// Error returned by route handlers; serializes to `{"error": message}`.
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    pub code: u16,
    pub message: String,
}

impl ApiError {
    pub fn new(code: u16, message: String) -> Self {
        Self { code, message }
    }

    pub fn bad_request(message: &str) -> Self {
        Self::new(400, message.to_string())
    }

    /// Missing/empty required field; names the field, per route contract.
    pub fn missing_field(field: &str) -> Self {
        Self::new(400, format!("{} is required", field))
    }

    pub fn internal_server_error(message: &str) -> Self {
        Self::new(500, message.to_string())
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "API Error {}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(json!({ "error": self.message }))).into_response()
    }
}

// Upstream failures are logged once here, at the conversion boundary,
// instead of at every call site.

impl From<FuelClientError> for ApiError {
    fn from(err: FuelClientError) -> Self {
        log::error!("fuel upstream call failed: {}", err);
        Self::internal_server_error(&err.to_string())
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        log::error!("ethereum upstream call failed: {}", err);
        Self::internal_server_error(&err.to_string())
    }
}

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;
