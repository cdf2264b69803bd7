//! Maps library errors onto HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use captioner_core::{CaptionError, UpstreamError};
use serde_json::json;

/// API error: a status code and a message returned as `{"detail": ...}`.
#[derive(Debug)]
pub struct ApiError {
    pub status_code: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status_code: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status_code,
            message: message.into(),
        }
    }
}

impl From<CaptionError> for ApiError {
    fn from(err: CaptionError) -> Self {
        let status_code = match &err {
            CaptionError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            CaptionError::NotFound(_) => StatusCode::NOT_FOUND,
            CaptionError::Forbidden(_) => StatusCode::FORBIDDEN,
            CaptionError::Upstream(upstream) => upstream_status(upstream),
            CaptionError::Io { .. } | CaptionError::Config(_) => {
                tracing::error!("{err}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self::new(status_code, err.to_string())
    }
}

/// Upstream HTTP errors keep their status; everything else is a gateway failure.
fn upstream_status(err: &UpstreamError) -> StatusCode {
    match err {
        UpstreamError::Status { status, .. } => StatusCode::from_u16(*status)
            .ok()
            .filter(|s| s.is_client_error() || s.is_server_error())
            .unwrap_or(StatusCode::BAD_GATEWAY),
        UpstreamError::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
        UpstreamError::Transport(_) | UpstreamError::InvalidResponse(_) => StatusCode::BAD_GATEWAY,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code, Json(json!({ "detail": self.message }))).into_response()
    }
}

/// Result type alias for handlers.
pub type ApiResult<T> = Result<T, ApiError>;
