//! The gateway's uniform failure envelope.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// The only shape any failure path produces. Rendered as
/// `{"error": message}` with status 400 (caller-fixable) or 500 (backend
/// unreachable or malformed).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct GatewayError {
    pub message: String,
    pub http_status: u16,
}

impl GatewayError {
    /// The caller's payload is malformed or unrecognized.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            http_status: 400,
        }
    }

    /// A backend could not be reached or answered with something unusable.
    pub fn upstream(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            http_status: 500,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.http_status)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(json!({ "error": self.message }))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;
