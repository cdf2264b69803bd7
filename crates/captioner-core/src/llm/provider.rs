//! Caption provider trait and request types.

use crate::error::UpstreamError;
use async_trait::async_trait;
use base64::Engine;
use std::path::Path;
use std::time::Duration;

/// MIME type sent when format detection is disabled.
pub const FALLBACK_MEDIA_TYPE: &str = "image/jpeg";

/// Base64-encoded image ready to send to a chat-completion API.
#[derive(Debug, Clone)]
pub struct ImageInput {
    /// Base64-encoded image bytes
    pub data: String,
    /// MIME type (e.g., "image/jpeg", "image/png")
    pub media_type: String,
}

impl ImageInput {
    /// Encode raw bytes, labelling them `image/jpeg` whatever their real format.
    pub fn jpeg(bytes: &[u8]) -> Self {
        Self {
            data: base64::engine::general_purpose::STANDARD.encode(bytes),
            media_type: FALLBACK_MEDIA_TYPE.to_string(),
        }
    }

    /// Encode raw bytes with a MIME type derived from the file extension.
    pub fn from_path_and_bytes(path: &Path, bytes: &[u8]) -> Self {
        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .unwrap_or_default();

        let media_type = match format.as_str() {
            "jpeg" | "jpg" => "image/jpeg",
            "png" => "image/png",
            "webp" => "image/webp",
            "gif" => "image/gif",
            other => {
                tracing::warn!("Unknown image format '{other}', defaulting to {FALLBACK_MEDIA_TYPE}");
                FALLBACK_MEDIA_TYPE
            }
        };

        Self {
            data: base64::engine::general_purpose::STANDARD.encode(bytes),
            media_type: media_type.to_string(),
        }
    }

    /// Return a data URL suitable for OpenAI-style APIs.
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.media_type, self.data)
    }
}

/// One caption request: credentials, model and the image with its prompt.
#[derive(Debug, Clone)]
pub struct CaptionRequest {
    /// Bearer token for the upstream API
    pub api_key: String,
    /// Model identifier
    pub model: String,
    /// The image to caption
    pub image: ImageInput,
    /// Instruction text
    pub prompt: String,
    /// Response size cap
    pub max_completion_tokens: u32,
}

/// Trait that caption backends implement.
///
/// Uses `async_trait` because native async fn in trait is not object-safe
/// (the generator holds an `Arc<dyn CaptionProvider>`).
#[async_trait]
pub trait CaptionProvider: Send + Sync {
    /// Provider name for logging.
    fn name(&self) -> &str;

    /// Send a single request and return the caption text.
    async fn generate(&self, request: &CaptionRequest) -> Result<String, UpstreamError>;

    /// Per-request timeout for this provider.
    fn timeout(&self) -> Duration;
}

/// Resolve `${ENV_VAR}` references in config strings.
pub fn resolve_env_var(value: &str) -> Option<String> {
    if value.starts_with("${") && value.ends_with('}') {
        let var_name = &value[2..value.len() - 1];
        std::env::var(var_name).ok().filter(|v| !v.is_empty())
    } else if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
