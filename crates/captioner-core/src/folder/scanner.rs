//! Folder scanning: list images and read their caption files.

use std::path::{Path, PathBuf};

use crate::config::ScanConfig;
use crate::error::{CaptionError, Result};
use crate::guard::PathGuard;
use crate::types::ImageRecord;

use super::discovery::FileDiscovery;
use super::sidecar::caption_path_for;

/// Lists the images of a folder along with their current captions.
///
/// Nothing is cached; every call re-reads the filesystem. Images or caption
/// files that resolve outside the guard's root are left out of the result.
#[derive(Debug, Clone)]
pub struct FolderScanner {
    discovery: FileDiscovery,
    guard: PathGuard,
}

impl FolderScanner {
    pub fn new(config: ScanConfig, guard: PathGuard) -> Self {
        Self {
            discovery: FileDiscovery::new(config),
            guard,
        }
    }

    /// Scan `folder` and return one record per supported image, sorted by path.
    pub async fn scan(&self, folder: &Path) -> Result<Vec<ImageRecord>> {
        let invalid =
            || CaptionError::InvalidInput(format!("Invalid folder path: {}", folder.display()));
        let folder = tokio::fs::canonicalize(folder).await.map_err(|_| invalid())?;
        let is_dir = tokio::fs::metadata(&folder)
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false);
        if !is_dir {
            return Err(invalid());
        }

        let discovery = self.discovery.clone();
        let listing_dir = folder.clone();
        let images = tokio::task::spawn_blocking(move || discovery.discover(&listing_dir))
            .await
            .map_err(|e| CaptionError::io(&folder, std::io::Error::other(e)))?;

        let mut records = Vec::with_capacity(images.len());
        for image in images {
            if self.guard.check(&image).await.is_err()
                || self.guard.check(&caption_path_for(&image)).await.is_err()
            {
                tracing::warn!("Skipping {}: resolves outside the allowed root", image.display());
                continue;
            }
            let caption = read_caption(&image).await?;
            records.push(ImageRecord::new(image, caption));
        }

        tracing::debug!(
            "Scanned {}: {} images, {} captioned",
            folder.display(),
            records.len(),
            records.iter().filter(|r| r.has_caption).count()
        );
        Ok(records)
    }
}

/// Read the caption file for an image, if one exists.
async fn read_caption(image: &Path) -> Result<Option<String>> {
    let caption_path: PathBuf = caption_path_for(image);
    let exists = tokio::fs::try_exists(&caption_path)
        .await
        .map_err(|e| CaptionError::io(&caption_path, e))?;
    if !exists {
        return Ok(None);
    }

    tokio::fs::read_to_string(&caption_path)
        .await
        .map(Some)
        .map_err(|e| CaptionError::io(caption_path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::folder::sidecar::{delete_caption, save_caption};
    use std::fs;

    fn scanner() -> FolderScanner {
        FolderScanner::new(ScanConfig::default(), PathGuard::default())
    }

    #[tokio::test]
    async fn test_scan_empty_folder() {
        let dir = tempfile::tempdir().unwrap();
        let records = scanner().scan(dir.path()).await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_scan_pairs_captions() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.png"), b"png").unwrap();
        fs::write(dir.path().join("b.txt"), "hello").unwrap();
        fs::write(dir.path().join("a.jpg"), b"jpg").unwrap();

        let records = scanner().scan(dir.path()).await.unwrap();
        let root = dir.path().canonicalize().unwrap();

        assert_eq!(
            records,
            vec![
                ImageRecord {
                    filename: "a.jpg".to_string(),
                    absolute_path: root.join("a.jpg"),
                    has_caption: false,
                    caption_content: None,
                },
                ImageRecord {
                    filename: "b.png".to_string(),
                    absolute_path: root.join("b.png"),
                    has_caption: true,
                    caption_content: Some("hello".to_string()),
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_scan_skips_unsupported_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["z.webp", "m.jpeg", "doc.pdf", "a.PNG", "readme.txt"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }

        let records = scanner().scan(dir.path()).await.unwrap();
        let names: Vec<_> = records.iter().map(|r| r.filename.as_str()).collect();
        assert_eq!(names, vec!["a.PNG", "m.jpeg", "z.webp"]);
        assert!(records.iter().all(|r| r.absolute_path.is_absolute()));
    }

    #[tokio::test]
    async fn test_scan_reflects_save_and_delete() {
        let dir = tempfile::tempdir().unwrap();
        let image = dir.path().join("cat.webp");
        fs::write(&image, b"webp").unwrap();

        save_caption(&image, "A cat asleep on a windowsill.").await.unwrap();
        let records = scanner().scan(dir.path()).await.unwrap();
        assert!(records[0].has_caption);
        assert_eq!(
            records[0].caption_content.as_deref(),
            Some("A cat asleep on a windowsill.")
        );

        delete_caption(&image).await.unwrap();
        let records = scanner().scan(dir.path()).await.unwrap();
        assert!(!records[0].has_caption);
        assert!(records[0].caption_content.is_none());
    }

    #[tokio::test]
    async fn test_scan_missing_folder_is_invalid_input() {
        let dir = tempfile::tempdir().unwrap();
        let err = scanner()
            .scan(&dir.path().join("does-not-exist"))
            .await
            .unwrap_err();
        assert!(matches!(err, CaptionError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_scan_file_path_is_invalid_input() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.jpg");
        fs::write(&file, b"x").unwrap();

        let err = scanner().scan(&file).await.unwrap_err();
        assert!(matches!(err, CaptionError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_scan_non_utf8_caption_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.jpg"), b"x").unwrap();
        fs::write(dir.path().join("a.txt"), [0xff, 0xfe, 0x00, 0xc3]).unwrap();

        let err = scanner().scan(dir.path()).await.unwrap_err();
        assert!(matches!(err, CaptionError::Io { .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_scan_skips_links_out_of_root() {
        use std::os::unix::fs::symlink;

        let root = tempfile::tempdir().unwrap();
        let outside = tempfile::tempdir().unwrap();
        fs::write(outside.path().join("secret.txt"), "TOPSECRET").unwrap();
        fs::write(outside.path().join("far.jpg"), b"x").unwrap();
        fs::write(root.path().join("a.jpg"), b"x").unwrap();
        symlink(outside.path().join("secret.txt"), root.path().join("a.txt")).unwrap();
        symlink(outside.path().join("far.jpg"), root.path().join("b.jpg")).unwrap();
        fs::write(root.path().join("c.jpg"), b"x").unwrap();

        let guard = PathGuard::new(Some(root.path())).unwrap();
        let records = FolderScanner::new(ScanConfig::default(), guard)
            .scan(root.path())
            .await
            .unwrap();

        let names: Vec<_> = records.iter().map(|r| r.filename.as_str()).collect();
        assert_eq!(names, vec!["c.jpg"]);
        assert!(records
            .iter()
            .all(|r| r.caption_content.as_deref() != Some("TOPSECRET")));

        // Without a root the same links are followed
        let records = scanner().scan(root.path()).await.unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].caption_content.as_deref(), Some("TOPSECRET"));
    }
}
