//! Emotion service - fronts a sentiment model server and resolves class
//! predictions into emotion labels.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use emotion_service::api;
use emotion_service::config::Config;
use emotion_service::engine::{HttpSentimentEngine, SentimentEngine};
use emotion_service::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::load()?;
    tracing::info!("Starting emotion-service");

    // Probe the primary model, fall back to the alternative when it is not
    // serving.
    let primary = HttpSentimentEngine::new(&config.model.server_url, &config.model.primary);
    let engine: Arc<dyn SentimentEngine> = match primary.health_check().await {
        Ok(()) => Arc::new(primary),
        Err(e) => {
            tracing::warn!(
                error = %e,
                fallback = %config.model.fallback,
                "primary sentiment model unavailable, using fallback"
            );
            Arc::new(HttpSentimentEngine::new(
                &config.model.server_url,
                &config.model.fallback,
            ))
        }
    };
    tracing::info!("Serving sentiment model {}", engine.model_id());

    let state = Arc::new(AppState::new(engine));

    // Build router
    let app = Router::new()
        .merge(api::router())
        .layer(CorsLayer::permissive())
        .with_state(state);

    // Start server
    let addr = format!("{}:{}", config.api.host, config.api.port);
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
