//! Configuration validation with range checks.

use crate::error::ConfigError;

use super::Config;

/// Accepted values for `server.folder_picker`.
const FOLDER_PICKERS: &[&str] = &["disabled", "native"];

impl Config {
    /// Validate configuration values are within acceptable ranges.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::ValidationError(
                "server.port must be > 0".into(),
            ));
        }
        if !FOLDER_PICKERS.contains(&self.server.folder_picker.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "server.folder_picker must be one of {:?}, got '{}'",
                FOLDER_PICKERS, self.server.folder_picker
            )));
        }
        if self.scan.supported_formats.is_empty() {
            return Err(ConfigError::ValidationError(
                "scan.supported_formats must not be empty".into(),
            ));
        }
        if self.llm.endpoint.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "llm.endpoint must not be empty".into(),
            ));
        }
        if self.llm.max_completion_tokens == 0 {
            return Err(ConfigError::ValidationError(
                "llm.max_completion_tokens must be > 0".into(),
            ));
        }
        if self.llm.timeout_ms == 0 {
            return Err(ConfigError::ValidationError(
                "llm.timeout_ms must be > 0".into(),
            ));
        }
        Ok(())
    }
}
