//! Route handlers. Each one is a thin wrapper over a `Captioner` call.

use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use captioner_core::ImageRecord;

use super::error::ApiResult;
use super::types::*;
use super::AppState;

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: captioner_core::VERSION,
    })
}

pub async fn select_folder(State(state): State<AppState>) -> Json<SelectFolderResponse> {
    Json(SelectFolderResponse {
        folder_path: state.captioner.select_folder().await,
    })
}

pub async fn scan(
    State(state): State<AppState>,
    Json(req): Json<ScanRequest>,
) -> ApiResult<Json<Vec<ImageRecord>>> {
    let records = state.captioner.scan(&req.folder_path).await?;
    tracing::info!("Scanned {} ({} images)", req.folder_path.display(), records.len());
    Ok(Json(records))
}

pub async fn image(
    State(state): State<AppState>,
    Query(query): Query<ImageQuery>,
) -> ApiResult<impl IntoResponse> {
    let file = state.captioner.read_image(&query.path).await?;
    Ok(([(header::CONTENT_TYPE, file.content_type)], file.bytes))
}

pub async fn caption(
    State(state): State<AppState>,
    Json(req): Json<CaptionRequest>,
) -> ApiResult<Json<CaptionResponse>> {
    let caption = state
        .captioner
        .generate_caption(&req.api_key, &req.model, &req.image_path)
        .await?;
    Ok(Json(CaptionResponse { caption }))
}

pub async fn save(
    State(state): State<AppState>,
    Json(req): Json<SaveRequest>,
) -> ApiResult<Json<SaveResponse>> {
    let path = state
        .captioner
        .save_caption(&req.image_path, &req.caption_text)
        .await?;
    tracing::info!("Saved caption {}", path.display());
    Ok(Json(SaveResponse {
        status: "success",
        path,
    }))
}

pub async fn delete(
    State(state): State<AppState>,
    Json(req): Json<DeleteRequest>,
) -> ApiResult<Json<DeleteResponse>> {
    let deleted = state.captioner.delete_caption(&req.image_path).await?;
    if deleted {
        tracing::info!("Deleted caption for {}", req.image_path.display());
    }
    Ok(Json(DeleteResponse {
        status: "success",
        deleted,
    }))
}
