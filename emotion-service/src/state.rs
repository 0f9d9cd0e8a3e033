//! Shared application state.

use std::sync::Arc;

use crate::engine::SentimentEngine;

/// Shared application state passed to all handlers.
pub struct AppState {
    pub engine: Arc<dyn SentimentEngine>,
}

impl AppState {
    pub fn new(engine: Arc<dyn SentimentEngine>) -> Self {
        Self { engine }
    }
}
