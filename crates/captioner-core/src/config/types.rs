//! Sub-configuration structs with their defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default upstream endpoint for caption generation.
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

/// Instruction sent alongside every image.
pub const DEFAULT_PROMPT: &str = "Caption this image in a single, detailed, and concise sentence.";

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Directory holding the frontend (served as the fallback route)
    pub static_dir: PathBuf,

    /// If set, every path-taking operation must resolve inside this directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_root: Option<PathBuf>,

    /// Folder picker backend: "disabled" or "native"
    pub folder_picker: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            static_dir: PathBuf::from("static"),
            allowed_root: None,
            folder_picker: "disabled".to_string(),
        }
    }
}

/// Folder scanning settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Image extensions to list (matched case-insensitively)
    pub supported_formats: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            supported_formats: vec![
                "jpg".to_string(),
                "jpeg".to_string(),
                "png".to_string(),
                "webp".to_string(),
            ],
        }
    }
}

/// Caption API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Chat-completion endpoint
    pub endpoint: String,

    /// Fallback API key when a request carries none (supports ${ENV_VAR} syntax)
    pub api_key: String,

    /// Fallback model when a request carries none
    pub default_model: String,

    /// Instruction text sent with the image
    pub prompt: String,

    /// Response size cap (`max_completion_tokens`)
    pub max_completion_tokens: u32,

    /// Client-side timeout in milliseconds
    pub timeout_ms: u64,

    /// Send the real image MIME type instead of always `image/jpeg`
    pub detect_mime_type: bool,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: "${OPENAI_API_KEY}".to_string(),
            default_model: "gpt-4.1-mini".to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
            max_completion_tokens: 4096,
            timeout_ms: 60_000,
            detect_mime_type: false,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
