//! Static route table: logical endpoint -> backend binding.
//!
//! Built once at startup from configuration and carried read-only in the
//! application state; there is no dynamic registration.

use crate::config::Config;

/// How a payload is serialized toward the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForwardMode {
    /// Always a JSON body mirroring the normalized fields.
    Json,
    /// Multipart for byte-bearing payloads, JSON for the rest.
    JsonOrMultipart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// One logical endpoint's backend binding.
#[derive(Debug, Clone)]
pub struct Route {
    pub name: &'static str,
    pub backend_base_url: String,
    pub backend_path: &'static str,
    pub method: Method,
    pub forward_mode: ForwardMode,
}

impl Route {
    fn new(
        name: &'static str,
        base_url: &str,
        backend_path: &'static str,
        method: Method,
        forward_mode: ForwardMode,
    ) -> Self {
        Self {
            name,
            backend_base_url: base_url.trim_end_matches('/').to_string(),
            backend_path,
            method,
            forward_mode,
        }
    }

    /// Full backend URL for this route.
    pub fn url(&self) -> String {
        format!("{}{}", self.backend_base_url, self.backend_path)
    }
}

/// Fixed mapping from logical endpoint to backend binding.
#[derive(Debug, Clone)]
pub struct RouteTable {
    pub chat: Route,
    pub classify: Route,
    pub detect_emotion: Route,
    pub batch_emotion: Route,
    pub emotion_status: Route,
}

impl RouteTable {
    pub fn new(config: &Config) -> Self {
        Self {
            chat: Route::new(
                "chat",
                &config.chatbot_base_url,
                "/chat",
                Method::Post,
                ForwardMode::Json,
            ),
            classify: Route::new(
                "classify",
                &config.classifier_base_url,
                "/clasificar",
                Method::Post,
                ForwardMode::JsonOrMultipart,
            ),
            detect_emotion: Route::new(
                "detect-emotion",
                &config.emotion_base_url,
                "/detectar-emocion",
                Method::Post,
                ForwardMode::Json,
            ),
            batch_emotion: Route::new(
                "batch-emotion",
                &config.emotion_base_url,
                "/batch",
                Method::Post,
                ForwardMode::Json,
            ),
            emotion_status: Route::new(
                "emotion-status",
                &config.emotion_base_url,
                "/estado",
                Method::Get,
                ForwardMode::Json,
            ),
        }
    }
}
