//! HTTP surface of the gateway, one module per backend.

pub mod chat;
pub mod classify;
pub mod emotion;
pub mod health;

use std::sync::Arc;

use axum::Router;

use crate::AppState;

/// Build the full gateway router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(health::router())
        .merge(chat::router(state.clone()))
        .merge(classify::router(state.clone()))
        .merge(emotion::router(state))
}
