pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod resolver;
pub mod state;

pub use config::Config;
pub use engine::{HttpSentimentEngine, SentimentEngine, SentimentPrediction};
pub use state::AppState;
