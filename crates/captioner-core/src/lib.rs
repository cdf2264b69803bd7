//! Captioner Core - scan image folders and manage sidecar captions.
//!
//! Captioner pairs every image in a folder with an optional caption file of
//! the same name and a `.txt` extension, asks a vision-capable chat
//! completion API for new captions, and writes or removes caption files.
//!
//! # Architecture
//!
//! ```text
//! scan(folder) → [ImageRecord] → generate_caption(image) → save/delete caption
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use captioner_core::{Captioner, Config};
//!
//! #[tokio::main]
//! async fn main() -> captioner_core::Result<()> {
//!     let captioner = Captioner::new(Config::load()?)?;
//!
//!     for image in captioner.scan("./photos".as_ref()).await? {
//!         if !image.has_caption {
//!             let caption = captioner
//!                 .generate_caption("", "", &image.absolute_path)
//!                 .await?;
//!             captioner.save_caption(&image.absolute_path, &caption).await?;
//!         }
//!     }
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod config;
pub mod error;
pub mod folder;
pub mod guard;
pub mod llm;
pub mod picker;
pub mod types;

// Re-exports for convenient access
pub use config::Config;
pub use error::{CaptionError, ConfigError, Result, UpstreamError};
pub use folder::{caption_path_for, FolderScanner};
pub use guard::PathGuard;
pub use llm::{CaptionGenerator, CaptionProvider};
pub use picker::{DisabledPicker, FolderPicker};
pub use types::ImageRecord;

use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Raw image bytes with their content type.
#[derive(Debug, Clone)]
pub struct ImageFile {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

/// Captioner service - the main entry point.
///
/// Built once at startup from a [`Config`] and shared read-only; holds no
/// mutable state, so every operation is independent.
pub struct Captioner {
    config: Config,
    scanner: FolderScanner,
    generator: CaptionGenerator,
    guard: PathGuard,
    picker: Arc<dyn FolderPicker>,
}

impl Captioner {
    /// Create a new Captioner with the given configuration.
    pub fn new(config: Config) -> Result<Self> {
        let generator = CaptionGenerator::new(config.llm.clone());
        let picker = picker::picker_from_config(&config.server.folder_picker);
        Self::with_parts(config, generator, picker)
    }

    /// Create a Captioner with an explicit generator and folder picker.
    pub fn with_parts(
        config: Config,
        generator: CaptionGenerator,
        picker: Arc<dyn FolderPicker>,
    ) -> Result<Self> {
        let guard = PathGuard::new(config.allowed_root().as_deref())?;
        tracing::debug!("Initializing Captioner v{}", VERSION);

        Ok(Self {
            scanner: FolderScanner::new(config.scan.clone(), guard.clone()),
            generator,
            guard,
            picker,
            config,
        })
    }

    /// Get a reference to the current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the path guard in use.
    pub fn guard(&self) -> &PathGuard {
        &self.guard
    }

    /// List the images in `folder` with their caption state.
    pub async fn scan(&self, folder: &Path) -> Result<Vec<ImageRecord>> {
        let folder = config::expand_path(folder);
        self.guard.check(&folder).await?;
        self.scanner.scan(&folder).await
    }

    /// Generate a caption for one image. Nothing is written to disk.
    pub async fn generate_caption(
        &self,
        api_key: &str,
        model: &str,
        image_path: &Path,
    ) -> Result<String> {
        self.guard.check(image_path).await?;
        self.generator.generate(api_key, model, image_path).await
    }

    /// Write the caption file for an image and return its path.
    pub async fn save_caption(&self, image_path: &Path, caption_text: &str) -> Result<PathBuf> {
        self.guard.check(&caption_path_for(image_path)).await?;
        folder::save_caption(image_path, caption_text).await
    }

    /// Remove the caption file for an image, reporting whether one existed.
    pub async fn delete_caption(&self, image_path: &Path) -> Result<bool> {
        self.guard.check(&caption_path_for(image_path)).await?;
        folder::delete_caption(image_path).await
    }

    /// Read an image for display.
    pub async fn read_image(&self, path: &Path) -> Result<ImageFile> {
        self.guard.check(path).await?;

        let is_file = tokio::fs::metadata(path)
            .await
            .map(|m| m.is_file())
            .unwrap_or(false);
        if !is_file {
            return Err(CaptionError::NotFound(path.to_path_buf()));
        }

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| CaptionError::io(path, e))?;
        let content_type = mime_guess::from_path(path)
            .first_or_octet_stream()
            .essence_str()
            .to_string();

        Ok(ImageFile {
            bytes,
            content_type,
        })
    }

    /// Ask the configured picker for a folder.
    pub async fn select_folder(&self) -> Option<PathBuf> {
        let folder = self.picker.pick_folder().await;
        tracing::debug!("Folder picker '{}' returned {:?}", self.picker.name(), folder);
        folder
    }
}
