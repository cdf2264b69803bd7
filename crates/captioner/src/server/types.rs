//! Request and response bodies for the JSON API.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
pub struct ScanRequest {
    pub folder_path: PathBuf,
}

#[derive(Debug, Deserialize)]
pub struct ImageQuery {
    pub path: PathBuf,
}

#[derive(Debug, Deserialize)]
pub struct CaptionRequest {
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub model: String,
    pub image_path: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct CaptionResponse {
    pub caption: String,
}

#[derive(Debug, Deserialize)]
pub struct SaveRequest {
    pub image_path: PathBuf,
    pub caption_text: String,
}

#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub status: &'static str,
    pub path: PathBuf,
}

#[derive(Debug, Deserialize)]
pub struct DeleteRequest {
    pub image_path: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub status: &'static str,
    pub deleted: bool,
}

#[derive(Debug, Serialize)]
pub struct SelectFolderResponse {
    pub folder_path: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}
