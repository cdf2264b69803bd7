//! Error types for folder scanning, caption generation, and caption files.
//!
//! Every failure is surfaced as a distinct variant so the HTTP layer can map
//! each kind to its own status code. Messages include the path involved.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for Captioner operations.
#[derive(Error, Debug)]
pub enum CaptionError {
    /// The caller supplied something unusable (bad folder, missing API key)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The image file does not exist or is not a regular file
    #[error("Image not found: {0}")]
    NotFound(PathBuf),

    /// The path resolves outside the configured root directory
    #[error("Access denied: {0} is outside the allowed root")]
    Forbidden(PathBuf),

    /// The caption API failed
    #[error("Upstream error: {0}")]
    Upstream(#[from] UpstreamError),

    /// Local read/write failure on an image or caption file
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl CaptionError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Failures talking to the chat-completion API.
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// Non-2xx HTTP response
    #[error("caption API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The client-side timeout fired
    #[error("caption API request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    /// Connection, DNS or TLS failure
    #[error("caption API request failed: {0}")]
    Transport(String),

    /// The body was not JSON or lacked `choices[0].message.content`
    #[error("invalid caption API response: {0}")]
    InvalidResponse(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Convenience type alias for Captioner results.
pub type Result<T> = std::result::Result<T, CaptionError>;
