//! Caption files stored beside their images.
//!
//! The caption for `photo.jpg` lives in `photo.txt` in the same directory.
//! Scanning, saving and deleting all go through [`caption_path_for`], so the
//! three can never disagree about where a caption lives.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{CaptionError, Result};

/// Derive the caption file path for an image by swapping its extension for `txt`.
pub fn caption_path_for(image_path: &Path) -> PathBuf {
    image_path.with_extension("txt")
}

/// Write `caption_text` verbatim to the image's caption file, replacing any
/// previous content. Returns the caption path.
pub async fn save_caption(image_path: &Path, caption_text: &str) -> Result<PathBuf> {
    let caption_path = caption_path_for(image_path);
    tokio::fs::write(&caption_path, caption_text)
        .await
        .map_err(|e| CaptionError::io(&caption_path, e))?;

    tracing::debug!(
        "Saved caption ({} bytes) to {}",
        caption_text.len(),
        caption_path.display()
    );
    Ok(caption_path)
}

/// Remove the image's caption file.
///
/// Returns `false` when there was nothing to remove.
pub async fn delete_caption(image_path: &Path) -> Result<bool> {
    let caption_path = caption_path_for(image_path);
    match tokio::fs::remove_file(&caption_path).await {
        Ok(()) => {
            tracing::debug!("Deleted caption {}", caption_path.display());
            Ok(true)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(CaptionError::io(caption_path, e)),
    }
}
