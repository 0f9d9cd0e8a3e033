//! Service status endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use gateway_common::ServiceStatus;

use crate::resolver;
use crate::state::AppState;

/// Build the status router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/estado", get(status))
}

/// GET /estado - report the serving model and supported emotions.
async fn status(State(state): State<Arc<AppState>>) -> Json<ServiceStatus> {
    Json(ServiceStatus {
        status: "online".to_string(),
        model: state.engine.model_id().to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        emociones_soportadas: resolver::supported_emotions(),
    })
}
