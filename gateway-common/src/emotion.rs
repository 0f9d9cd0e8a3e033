//! Wire types for the emotion service endpoints.
//!
//! Response field names are part of the public contract consumed by the
//! frontend (`emocion`, `confianza`, ...) and must not be renamed.

use serde::{Deserialize, Serialize};

/// A successful emotion analysis of a single text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmotionAnalysis {
    pub success: bool,
    /// The analyzed text, echoed back.
    pub text: String,
    /// Final emotion label, after keyword overriding.
    pub emocion: String,
    /// Display glyph for `emocion`; empty string when unmapped.
    pub emoji: String,
    /// Model confidence at the predicted class, as a percentage (0-100).
    pub confianza: f64,
    /// Raw label the classifier predicted, before keyword overriding.
    pub emocion_base: String,
}

/// A per-item analysis failure. Inside a batch this replaces the item's
/// result without affecting its siblings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisFailure {
    pub success: bool,
    pub error: String,
}

/// Outcome of analyzing one text: either a full analysis or a failure record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalysisOutcome {
    Analysis(EmotionAnalysis),
    Failure(AnalysisFailure),
}

impl AnalysisOutcome {
    pub fn failure(error: impl Into<String>) -> Self {
        Self::Failure(AnalysisFailure {
            success: false,
            error: error.into(),
        })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Analysis(_))
    }
}

/// Response envelope for batch analysis. The batch itself always succeeds;
/// individual items report their own failures in order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchAnalysisResponse {
    pub success: bool,
    pub resultados: Vec<AnalysisOutcome>,
}

/// Health/status report for the emotion service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub status: String,
    /// Identifier of the sentiment model currently in use.
    pub model: String,
    pub version: String,
    pub emociones_soportadas: Vec<String>,
}
