//! Video upload: the full ingestion path.

use crate::auth::Caller;
use crate::error::{ErrorResponse, HttpAppError};
use crate::services::upload::VideoIngest;
use crate::state::AppState;
use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use clipdock_core::constants::VIDEO_CONTENT_TYPES;
use clipdock_core::models::VideoResponse;
use clipdock_core::AppError;
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/api/v0/videos/{id}/media",
    tag = "videos",
    params(
        ("id" = Uuid, Path, description = "Video ID")
    ),
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Video uploaded and processed", body = VideoResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Caller is not the owner", body = ErrorResponse),
        (status = 404, description = "Video not found", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
        (status = 500, description = "Processing or storage failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, multipart), fields(video_id = %id, operation = "upload_video"))]
pub async fn upload_video(
    State(state): State<Arc<AppState>>,
    caller: Caller,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<VideoResponse>, HttpAppError> {
    // Ownership gates everything: no disk or network work before it holds.
    let video = state
        .catalog
        .get_video(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Video not found".to_string()))?;

    if video.owner_id != caller.0 {
        return Err(AppError::Unauthorized("Not authorized to update this video".to_string()).into());
    }

    let (staged, media_type) =
        super::stage_file_field(&mut multipart, "video", VIDEO_CONTENT_TYPES).await?;

    let video = VideoIngest::from_state(&state)
        .run(video, staged, &media_type)
        .await?;

    let response = super::resolve_video_response(&video, state.store.as_ref()).await?;
    Ok(Json(response))
}
