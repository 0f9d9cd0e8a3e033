//! Configuration for the emotion service.

use config::{Config as ConfigLoader, ConfigError, Environment, File};
use serde::Deserialize;

/// Main configuration structure for the emotion service.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub model: ModelConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// Base URL of the model server hosting the classifiers.
    #[serde(default = "default_server_url")]
    pub server_url: String,
    /// Model to serve.
    #[serde(default = "default_primary_model")]
    pub primary: String,
    /// Model used when the primary fails its startup health probe.
    #[serde(default = "default_fallback_model")]
    pub fallback: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            primary: default_primary_model(),
            fallback: default_fallback_model(),
        }
    }
}

impl Config {
    /// Load configuration from `config.toml` (optional) overlaid with
    /// `EMOTION__`-prefixed environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        ConfigLoader::builder()
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("EMOTION").separator("__"))
            .build()?
            .try_deserialize()
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5003
}

fn default_server_url() -> String {
    "http://localhost:8500".to_string()
}

fn default_primary_model() -> String {
    "nlptown/bert-base-multilingual-uncased-sentiment".to_string()
}

fn default_fallback_model() -> String {
    "cardiffnlp/twitter-xlm-roberta-base-sentiment".to_string()
}
