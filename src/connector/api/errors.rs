//! API error types mapped to HTTP status codes.
//!
//! Every variant produces a JSON body `{"error": "message"}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

use crate::domain::DomainError;

pub const INVALID_PAYLOAD: &str = "Invalid request payload";
pub const INTERNAL_ERROR: &str = "Internal server error";

#[derive(Debug)]
pub enum ApiError {
    /// Malformed or incomplete request body (400).
    BadRequest(String),
    /// Anything that went wrong after validation (500).
    Internal(String),
}

impl ApiError {
    pub fn invalid_payload() -> Self {
        Self::BadRequest(INVALID_PAYLOAD.to_string())
    }

    pub fn internal() -> Self {
        Self::Internal(INTERNAL_ERROR.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Domain details are logged, never returned to the client.
impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidInput(msg) => {
                error!("Rejected chat request: {}", msg);
                Self::invalid_payload()
            }
            other => {
                error!("An error occurred during chat request: {}", other);
                Self::internal()
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::BadRequest(msg) | Self::Internal(msg) => msg,
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
