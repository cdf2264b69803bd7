//! Image folders and their caption files.
//!
//! - **discovery**: list supported images directly inside a directory
//! - **scanner**: pair each image with its caption file
//! - **sidecar**: derive, write and remove caption files

pub mod discovery;
pub mod scanner;
pub mod sidecar;

pub use discovery::FileDiscovery;
pub use scanner::FolderScanner;
pub use sidecar::{caption_path_for, delete_caption, save_caption};
