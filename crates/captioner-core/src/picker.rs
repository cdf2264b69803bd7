//! Folder picker capability for the select-folder endpoint.
//!
//! The default picker is disabled and always answers `None`, which keeps the
//! server usable on headless machines. The native dialog is opt-in through
//! the `native-dialog` cargo feature.

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;

/// Asks the user to choose a directory.
#[async_trait]
pub trait FolderPicker: Send + Sync {
    /// Picker name for logging.
    fn name(&self) -> &str;

    /// Returns `None` when the user cancels or picking is unsupported.
    async fn pick_folder(&self) -> Option<PathBuf>;
}

/// Picker that never opens a dialog.
#[derive(Debug, Default)]
pub struct DisabledPicker;

#[async_trait]
impl FolderPicker for DisabledPicker {
    fn name(&self) -> &str {
        "disabled"
    }

    async fn pick_folder(&self) -> Option<PathBuf> {
        None
    }
}

/// Native OS directory dialog.
#[cfg(feature = "native-dialog")]
#[derive(Debug, Default)]
pub struct NativePicker;

#[cfg(feature = "native-dialog")]
#[async_trait]
impl FolderPicker for NativePicker {
    fn name(&self) -> &str {
        "native"
    }

    async fn pick_folder(&self) -> Option<PathBuf> {
        rfd::AsyncFileDialog::new()
            .set_title("Select image folder")
            .pick_folder()
            .await
            .map(|handle| handle.path().to_path_buf())
    }
}

/// Build the picker named in `server.folder_picker`.
pub fn picker_from_config(name: &str) -> Arc<dyn FolderPicker> {
    match name {
        #[cfg(feature = "native-dialog")]
        "native" => Arc::new(NativePicker),
        #[cfg(not(feature = "native-dialog"))]
        "native" => {
            tracing::warn!(
                "Native folder picker requested but built without the `native-dialog` feature; using disabled picker"
            );
            Arc::new(DisabledPicker)
        }
        _ => Arc::new(DisabledPicker),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_picker_returns_none() {
        assert_eq!(DisabledPicker.pick_folder().await, None);
    }

    #[test]
    fn test_picker_from_config_defaults_to_disabled() {
        assert_eq!(picker_from_config("disabled").name(), "disabled");
    }

    #[cfg(not(feature = "native-dialog"))]
    #[test]
    fn test_native_without_feature_falls_back() {
        assert_eq!(picker_from_config("native").name(), "disabled");
    }
}
