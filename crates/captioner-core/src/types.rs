//! Core data types returned by folder scans.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One image in a scanned folder and the state of its caption file.
///
/// Built fresh on every scan; never cached. `caption_content` is `Some`
/// exactly when `has_caption` is true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    /// Just the filename portion
    pub filename: String,

    /// Absolute path to the image file
    pub absolute_path: PathBuf,

    /// Whether a sibling `.txt` caption file exists
    pub has_caption: bool,

    /// Full text of the caption file, if present
    pub caption_content: Option<String>,
}

impl ImageRecord {
    /// Build a record, deriving `has_caption` from the caption text.
    pub fn new(absolute_path: PathBuf, caption_content: Option<String>) -> Self {
        let filename = absolute_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            filename,
            absolute_path,
            has_caption: caption_content.is_some(),
            caption_content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_without_caption() {
        let record = ImageRecord::new(PathBuf::from("/photos/a.jpg"), None);
        assert_eq!(record.filename, "a.jpg");
        assert!(!record.has_caption);
        assert!(record.caption_content.is_none());
    }

    #[test]
    fn test_new_with_empty_caption_still_has_caption() {
        let record = ImageRecord::new(PathBuf::from("/photos/b.png"), Some(String::new()));
        assert!(record.has_caption);
        assert_eq!(record.caption_content.as_deref(), Some(""));
    }

    #[test]
    fn test_serializes_missing_caption_as_null() {
        let record = ImageRecord::new(PathBuf::from("/photos/a.jpg"), None);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["filename"], "a.jpg");
        assert_eq!(json["absolute_path"], "/photos/a.jpg");
        assert_eq!(json["has_caption"], false);
        assert!(json["caption_content"].is_null());
    }
}
