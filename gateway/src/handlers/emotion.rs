use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::response::Response;
use axum::routing::{get, post};
use axum::Router;
use serde_json::Value;

use crate::error::Result;
use crate::payload::{normalize, EndpointKind};
use crate::translate::translate;
use crate::AppState;

const UNREACHABLE: &str = "could not reach the emotion service";

/// POST /detectar-emocion - forward one text for emotion analysis.
async fn detect_emotion(State(state): State<Arc<AppState>>, body: Bytes) -> Result<Response> {
    let json = serde_json::from_slice::<Value>(&body).ok();
    let payload = normalize(EndpointKind::Text { field: "text" }, None, json.as_ref())?;

    let outcome = state
        .dispatcher
        .dispatch(&state.routes.detect_emotion, Some(payload))
        .await;
    Ok(translate(outcome, false, UNREACHABLE))
}

/// POST /batch-emociones - forward a batch of texts. Per-item failures are
/// the backend's concern; the gateway only checks the shape.
async fn batch_emotions(State(state): State<Arc<AppState>>, body: Bytes) -> Result<Response> {
    let json = serde_json::from_slice::<Value>(&body).ok();
    let payload = normalize(EndpointKind::TextBatch { field: "texts" }, None, json.as_ref())?;

    let outcome = state
        .dispatcher
        .dispatch(&state.routes.batch_emotion, Some(payload))
        .await;
    Ok(translate(outcome, false, UNREACHABLE))
}

/// GET /estado-emocion - relay the emotion service's status report.
async fn emotion_status(State(state): State<Arc<AppState>>) -> Response {
    let outcome = state
        .dispatcher
        .dispatch(&state.routes.emotion_status, None)
        .await;
    translate(outcome, false, UNREACHABLE)
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/detectar-emocion", post(detect_emotion))
        .route("/batch-emociones", post(batch_emotions))
        .route("/estado-emocion", get(emotion_status))
        .with_state(state)
}
