//! Emotion detection endpoints.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use gateway_common::{AnalysisOutcome, BatchAnalysisResponse, EmotionAnalysis};
use serde_json::Value;

use crate::engine::SentimentEngine;
use crate::error::{Error, Result};
use crate::resolver;
use crate::state::AppState;

/// Build the emotion router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/detectar-emocion", post(detect_emotion))
        .route("/batch", post(batch_analysis))
}

/// POST /detectar-emocion - analyze a single text.
///
/// A model failure is reported inside the outcome body, not as an HTTP
/// error; only a malformed request rejects.
async fn detect_emotion(
    State(state): State<Arc<AppState>>,
    body: Option<Json<Value>>,
) -> Result<Json<AnalysisOutcome>> {
    let Some(Json(body)) = body else {
        return Err(Error::InvalidRequest("request body must be JSON".to_string()));
    };

    let text = body
        .get("text")
        .and_then(Value::as_str)
        .ok_or_else(|| Error::InvalidRequest("field 'text' is required".to_string()))?;

    Ok(Json(analyze(state.engine.as_ref(), text).await))
}

/// POST /batch - analyze several texts in one request.
///
/// Items are analyzed sequentially and independently: a failing item
/// becomes its own failure entry, in place, without touching its siblings.
async fn batch_analysis(
    State(state): State<Arc<AppState>>,
    body: Option<Json<Value>>,
) -> Result<Json<BatchAnalysisResponse>> {
    let Some(Json(body)) = body else {
        return Err(Error::InvalidRequest("request body must be JSON".to_string()));
    };

    let texts = body
        .get("texts")
        .and_then(Value::as_array)
        .ok_or_else(|| Error::InvalidRequest("field 'texts' must be a list".to_string()))?;

    let mut resultados = Vec::with_capacity(texts.len());
    for item in texts {
        let outcome = match item.as_str() {
            Some(text) => analyze(state.engine.as_ref(), text).await,
            None => AnalysisOutcome::failure("batch items must be strings"),
        };
        resultados.push(outcome);
    }

    Ok(Json(BatchAnalysisResponse {
        success: true,
        resultados,
    }))
}

/// Run the classifier and the resolver over one text.
async fn analyze(engine: &dyn SentimentEngine, text: &str) -> AnalysisOutcome {
    let prediction = match engine.classify(text).await {
        Ok(prediction) => prediction,
        Err(e) => {
            tracing::warn!(error = %e, "classification failed");
            return AnalysisOutcome::failure(e.to_string());
        }
    };

    match resolver::resolve(text, prediction.predicted_index, &prediction.probabilities) {
        Some(record) => AnalysisOutcome::Analysis(EmotionAnalysis {
            success: true,
            text: record.text,
            emocion: record.resolved_label.to_string(),
            emoji: record.glyph.to_string(),
            confianza: record.confidence,
            emocion_base: record.base_label.to_string(),
        }),
        None => AnalysisOutcome::failure("model returned an out-of-range class prediction"),
    }
}
