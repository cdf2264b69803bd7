//! Caption generation for a single image.

use super::openai::OpenAiProvider;
use super::provider::{resolve_env_var, CaptionProvider, CaptionRequest, ImageInput};
use crate::config::LlmConfig;
use crate::error::{CaptionError, Result, UpstreamError};
use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Reads an image, sends it to the caption provider once, and returns the text.
///
/// No retries and no caching: every call does its own file read and round trip.
pub struct CaptionGenerator {
    provider: Arc<dyn CaptionProvider>,
    config: LlmConfig,
}

impl CaptionGenerator {
    /// Build a generator backed by the OpenAI provider at the configured endpoint.
    pub fn new(config: LlmConfig) -> Self {
        let provider = OpenAiProvider::with_endpoint(
            &config.endpoint,
            Duration::from_millis(config.timeout_ms),
        );
        Self::with_provider(Arc::new(provider), config)
    }

    /// Build a generator around any provider.
    pub fn with_provider(provider: Arc<dyn CaptionProvider>, config: LlmConfig) -> Self {
        Self { provider, config }
    }

    /// Caption the image at `image_path`.
    ///
    /// Empty `api_key` or `model` fall back to the configured defaults.
    pub async fn generate(&self, api_key: &str, model: &str, image_path: &Path) -> Result<String> {
        let is_file = tokio::fs::metadata(image_path)
            .await
            .map(|m| m.is_file())
            .unwrap_or(false);
        if !is_file {
            return Err(CaptionError::NotFound(image_path.to_path_buf()));
        }

        let api_key = self.resolve_api_key(api_key)?;
        let model = if model.trim().is_empty() {
            self.config.default_model.clone()
        } else {
            model.to_string()
        };

        let bytes = tokio::fs::read(image_path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound | ErrorKind::PermissionDenied => {
                CaptionError::NotFound(image_path.to_path_buf())
            }
            _ => CaptionError::io(image_path, e),
        })?;
        let image = if self.config.detect_mime_type {
            ImageInput::from_path_and_bytes(image_path, &bytes)
        } else {
            ImageInput::jpeg(&bytes)
        };

        let request = CaptionRequest {
            api_key,
            model,
            image,
            prompt: self.config.prompt.clone(),
            max_completion_tokens: self.config.max_completion_tokens,
        };

        let start = Instant::now();
        match self.provider.generate(&request).await {
            Ok(caption) => {
                tracing::info!(
                    "Captioned {} with {}/{} in {}ms",
                    image_path.display(),
                    self.provider.name(),
                    request.model,
                    start.elapsed().as_millis()
                );
                Ok(caption)
            }
            Err(e) => {
                log_upstream_failure(self.provider.name(), image_path, &e);
                Err(e.into())
            }
        }
    }

    fn resolve_api_key(&self, api_key: &str) -> Result<String> {
        if !api_key.trim().is_empty() {
            return Ok(api_key.to_string());
        }
        resolve_env_var(&self.config.api_key).ok_or_else(|| {
            CaptionError::InvalidInput(
                "API key not set. Pass api_key or set OPENAI_API_KEY.".to_string(),
            )
        })
    }
}

fn log_upstream_failure(provider: &str, image_path: &Path, error: &UpstreamError) {
    match error {
        UpstreamError::Status { status, body } => tracing::error!(
            status = *status,
            body = %body,
            "{provider} API error for {}",
            image_path.display()
        ),
        other => tracing::error!("{provider} request for {} failed: {other}", image_path.display()),
    }
}
