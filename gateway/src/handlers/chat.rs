use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::response::Response;
use axum::routing::post;
use axum::Router;
use serde_json::Value;

use crate::error::Result;
use crate::payload::{normalize, EndpointKind};
use crate::translate::translate;
use crate::AppState;

/// POST /chatbot - forward a question plus its context to the QA backend.
///
/// The QA answer must be parsable JSON; an empty or garbled backend body
/// becomes a 500 rather than being relayed.
async fn chatbot(State(state): State<Arc<AppState>>, body: Bytes) -> Result<Response> {
    let json = serde_json::from_slice::<Value>(&body).ok();
    let payload = normalize(EndpointKind::Question, None, json.as_ref())?;

    let outcome = state.dispatcher.dispatch(&state.routes.chat, Some(payload)).await;
    Ok(translate(outcome, true, "could not reach the chatbot service"))
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/chatbot", post(chatbot))
        .with_state(state)
}
