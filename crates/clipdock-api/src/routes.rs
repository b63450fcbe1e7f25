//! Route configuration.

use crate::api_doc::ApiDoc;
use crate::handlers;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

async fn health() -> &'static str {
    "ok"
}

async fn openapi_spec() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the application router.
///
/// Upload routes cap the readable body at the configured ceiling; a body
/// that runs past the cap fails the request instead of truncating.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health))
        .route("/api-docs/openapi.json", get(openapi_spec))
        .route("/api/v0/videos/{id}", get(handlers::video_get::get_video))
        .route(
            "/api/v0/videos/{id}/media",
            post(handlers::video_upload::upload_video)
                .layer(DefaultBodyLimit::max(state.config.max_video_size_bytes)),
        )
        .route(
            "/api/v0/videos/{id}/thumbnail",
            post(handlers::thumbnail_upload::upload_thumbnail)
                .layer(DefaultBodyLimit::max(state.config.max_thumbnail_size_bytes)),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
