//! Sentiment model abstraction.
//!
//! The model itself runs out of process behind a small HTTP contract; this
//! module only moves text in and a class prediction out.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::error::{Error, Result};
use crate::resolver::EMOTION_LABELS;

/// Output of one model inference over a single text.
#[derive(Debug, Clone, Deserialize)]
pub struct SentimentPrediction {
    /// Index of the winning class, 0 (most negative) to 4 (most positive).
    pub predicted_index: usize,
    /// Softmax probabilities, one per class.
    pub probabilities: Vec<f32>,
}

/// A sentiment classifier reachable by the service.
#[async_trait]
pub trait SentimentEngine: Send + Sync {
    /// Identifier of the model backing this engine.
    fn model_id(&self) -> &str;

    /// Check that the model server is up.
    async fn health_check(&self) -> Result<()>;

    /// Classify one text into the five ordinal sentiment classes.
    async fn classify(&self, text: &str) -> Result<SentimentPrediction>;
}

/// Engine backed by an HTTP model server exposing `POST /predict` and
/// `GET /health`.
pub struct HttpSentimentEngine {
    http_client: Client,
    base_url: String,
    model: String,
}

impl HttpSentimentEngine {
    pub fn new(base_url: &str, model: &str) -> Self {
        Self {
            http_client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
        }
    }
}

#[async_trait]
impl SentimentEngine for HttpSentimentEngine {
    fn model_id(&self) -> &str {
        &self.model
    }

    async fn health_check(&self) -> Result<()> {
        let url = format!("{}/health", self.base_url);
        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Communication(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Error::Communication(format!(
                "model server health check returned {}",
                response.status()
            )));
        }

        Ok(())
    }

    async fn classify(&self, text: &str) -> Result<SentimentPrediction> {
        let url = format!("{}/predict", self.base_url);

        tracing::debug!("Sending prediction request to {}", url);

        let response = self
            .http_client
            .post(&url)
            .json(&json!({ "model": self.model, "text": text }))
            .send()
            .await
            .map_err(|e| Error::Communication(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::InferenceFailed(format!("{}: {}", status, body)));
        }

        let prediction: SentimentPrediction = response
            .json()
            .await
            .map_err(|e| Error::InferenceFailed(e.to_string()))?;

        if prediction.probabilities.len() != EMOTION_LABELS.len()
            || prediction.predicted_index >= prediction.probabilities.len()
        {
            return Err(Error::InferenceFailed(
                "model returned an out-of-range class prediction".to_string(),
            ));
        }

        Ok(prediction)
    }
}
