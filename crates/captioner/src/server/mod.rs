//! HTTP server: JSON API under `/api` plus the static frontend.

mod error;
mod handlers;
mod types;

use axum::{
    routing::{get, post},
    Router,
};
use captioner_core::Captioner;
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub captioner: Arc<Captioner>,
}

/// Create the router with all endpoints.
///
/// When `static_dir` exists it is served for every path the API does not claim.
pub fn create_router(state: AppState, static_dir: Option<&Path>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_router = Router::new()
        .route("/health", get(handlers::health))
        .route("/select-folder", post(handlers::select_folder))
        .route("/scan", post(handlers::scan))
        .route("/image", get(handlers::image))
        .route("/caption", post(handlers::caption))
        .route("/save", post(handlers::save))
        .route("/delete", post(handlers::delete))
        .with_state(state);

    let mut router = Router::new().nest("/api", api_router);

    match static_dir {
        Some(dir) if dir.is_dir() => {
            tracing::debug!("Serving frontend from {}", dir.display());
            router = router.fallback_service(ServeDir::new(dir));
        }
        Some(dir) => tracing::warn!(
            "Static directory {} not found; only the API is served",
            dir.display()
        ),
        None => {}
    }

    router.layer(cors).layer(TraceLayer::new_for_http())
}
