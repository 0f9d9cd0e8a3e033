use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host (default: 0.0.0.0)
    pub host: String,
    /// Server port (default: 5000)
    pub port: u16,
    /// QA backend base URL (default: http://localhost:5001)
    pub chatbot_base_url: String,
    /// Image classifier backend base URL (default: http://localhost:5002)
    pub classifier_base_url: String,
    /// Emotion backend base URL (default: http://localhost:5003)
    pub emotion_base_url: String,
    /// Outbound request timeout in seconds. Absent means no timeout, which
    /// matches the historical behavior; set it in production.
    pub request_timeout_secs: Option<u64>,
    /// Log level (default: info)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidPort)?,
            chatbot_base_url: env::var("CHATBOT_SERVICE_URL")
                .unwrap_or_else(|_| "http://localhost:5001".to_string()),
            classifier_base_url: env::var("CLASSIFIER_SERVICE_URL")
                .unwrap_or_else(|_| "http://localhost:5002".to_string()),
            emotion_base_url: env::var("EMOTION_SERVICE_URL")
                .unwrap_or_else(|_| "http://localhost:5003".to_string()),
            request_timeout_secs: match env::var("REQUEST_TIMEOUT_SECS") {
                Ok(value) => Some(value.parse().map_err(|_| ConfigError::InvalidTimeout)?),
                Err(_) => None,
            },
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port number")]
    InvalidPort,
    #[error("Invalid request timeout")]
    InvalidTimeout,
}
