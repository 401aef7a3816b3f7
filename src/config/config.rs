use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::models::activity::DEFAULT_ACTIVITIES;

/// Sample credential shipped in `.env.example`; treated as "no key".
pub const SAMPLE_API_KEY: &str = "your_claude_api_key_here";

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// Listen port
    pub port: u16,
    /// Allowed CORS origins, `*` allows any
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 3001,
            cors_origins: vec!["*".into()],
        }
    }
}

/// History storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Backend type: "json_file" or "memory"
    pub backend: String,
    /// JSON file mirroring the rating history
    pub data_file: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: "json_file".into(),
            data_file: PathBuf::from("data/ratings.json"),
        }
    }
}

/// LLM endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// API key; analysis falls back to placeholders without one
    pub api_key: Option<String>,
    /// Messages endpoint
    pub endpoint: String,
    /// `anthropic-version` header value
    pub api_version: String,
    /// Model identifier
    pub model: String,
    /// Token budget for the reply
    pub max_tokens: u32,
    /// Request timeout (seconds)
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: "https://api.anthropic.com/v1/messages".into(),
            api_version: "2023-06-01".into(),
            model: "claude-3-sonnet-20240229".into(),
            max_tokens: 1000,
            timeout_secs: 60,
        }
    }
}

impl LlmConfig {
    /// The configured key, if it is usable.
    pub fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty() && *key != SAMPLE_API_KEY)
    }
}

/// Activity catalog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Ordered activity names served to clients
    pub activities: Vec<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            activities: DEFAULT_ACTIVITIES.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level, overridden by `RUST_LOG`
    pub level: String,
    /// Emit JSON lines instead of text
    pub structured: bool,
    /// Directory for daily rolling log files
    pub log_dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            structured: false,
            log_dir: None,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server
    pub server: ServerConfig,
    /// History storage
    pub storage: StorageConfig,
    /// LLM endpoint
    pub llm: LlmConfig,
    /// Activity catalog
    pub catalog: CatalogConfig,
    /// Logging
    pub logging: LoggingConfig,
    /// Name used in startup logs
    pub app_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            storage: StorageConfig::default(),
            llm: LlmConfig::default(),
            catalog: CatalogConfig::default(),
            logging: LoggingConfig::default(),
            app_name: "mood-tracker".into(),
        }
    }
}
