//! HTTP API of the emotion service.

pub mod emotion;
pub mod status;

use std::sync::Arc;

use axum::Router;

use crate::state::AppState;

/// Build the API router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().merge(emotion::router()).merge(status::router())
}
