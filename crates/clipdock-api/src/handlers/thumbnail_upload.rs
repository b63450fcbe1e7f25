//! Thumbnail upload: the degenerate pipeline (no probe, no remux).

use crate::auth::Caller;
use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use chrono::Utc;
use clipdock_core::constants::THUMBNAIL_CONTENT_TYPES;
use clipdock_core::models::{AssetRef, VideoResponse};
use clipdock_core::AppError;
use clipdock_storage::build_object_key;
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/api/v0/videos/{id}/thumbnail",
    tag = "videos",
    params(
        ("id" = Uuid, Path, description = "Video ID")
    ),
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Thumbnail uploaded", body = VideoResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Caller is not the owner", body = ErrorResponse),
        (status = 404, description = "Video not found", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, multipart), fields(video_id = %id, operation = "upload_thumbnail"))]
pub async fn upload_thumbnail(
    State(state): State<Arc<AppState>>,
    caller: Caller,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<VideoResponse>, HttpAppError> {
    let mut video = state
        .catalog
        .get_video(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Video not found".to_string()))?;

    if video.owner_id != caller.0 {
        return Err(AppError::Unauthorized("Not authorized to update this video".to_string()).into());
    }

    let (data, media_type) =
        super::read_file_field(&mut multipart, "thumbnail", THUMBNAIL_CONTENT_TYPES).await?;

    let key = build_object_key(None, &media_type);
    state
        .store
        .put_bytes(&state.config.s3_bucket, &key, data, &media_type)
        .await?;

    video.thumbnail_ref = Some(AssetRef::new(state.config.s3_bucket.clone(), key).to_string());
    video.updated_at = Utc::now();
    state.catalog.update_video(&video).await?;

    let response = super::resolve_video_response(&video, state.store.as_ref()).await?;
    Ok(Json(response))
}
