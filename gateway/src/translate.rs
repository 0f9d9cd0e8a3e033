//! Response translation: dispatch outcome -> gateway response.
//!
//! This layer only classifies and repackages. Backend status codes are
//! relayed untouched, error statuses included; the gateway never retries.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value;

use crate::error::GatewayError;
use crate::proxy::{DispatchError, ProxyResult};

/// Turn a dispatch outcome into the outbound response.
///
/// `requires_json` marks endpoints (chat) whose callers need a parsed
/// answer: an empty or unparsable backend body there becomes a 500 instead
/// of being relayed.
pub fn translate(
    outcome: Result<ProxyResult, DispatchError>,
    requires_json: bool,
    unreachable_message: &str,
) -> Response {
    let result = match outcome {
        Ok(result) => result,
        Err(e) => {
            tracing::warn!(error = %e, "backend call failed");
            return GatewayError::upstream(unreachable_message).into_response();
        }
    };

    let status = StatusCode::from_u16(result.status).unwrap_or(StatusCode::BAD_GATEWAY);

    match serde_json::from_slice::<Value>(&result.body) {
        Ok(body) => (status, Json(body)).into_response(),
        Err(_) if requires_json => {
            tracing::warn!(status = result.status, "backend returned an unusable body");
            GatewayError::upstream("invalid response from backend").into_response()
        }
        // Relay non-JSON bodies verbatim, keeping the backend's content type.
        Err(_) => match result.content_type {
            Some(content_type) => {
                (status, [(header::CONTENT_TYPE, content_type)], result.body).into_response()
            }
            None => (status, result.body).into_response(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Bytes;

    fn proxied(status: u16, body: &str) -> Result<ProxyResult, DispatchError> {
        Ok(ProxyResult {
            status,
            content_type: Some("application/json".to_string()),
            body: Bytes::copy_from_slice(body.as_bytes()),
        })
    }

    #[test]
    fn backend_error_statuses_are_relayed_unchanged() {
        let response = translate(proxied(418, r#"{"error":"tea"}"#), false, "unreachable");
        assert_eq!(response.status(), StatusCode::IM_A_TEAPOT);
    }

    #[test]
    fn empty_body_is_a_500_only_where_a_parsed_answer_is_required() {
        let response = translate(proxied(200, ""), true, "unreachable");
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = translate(proxied(200, ""), false, "unreachable");
        assert_eq!(response.status(), StatusCode::OK);
    }
}
