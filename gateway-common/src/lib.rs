//! ML Gateway Common Types
//!
//! Shared types used by both the API gateway and the emotion service.

pub mod emotion;

pub use emotion::{
    AnalysisFailure, AnalysisOutcome, BatchAnalysisResponse, EmotionAnalysis, ServiceStatus,
};
