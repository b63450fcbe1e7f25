//! HTTP handlers.

pub mod thumbnail_upload;
pub mod video_get;
pub mod video_upload;

use crate::services::upload::StagedFile;
use axum::extract::multipart::{Multipart, MultipartError};
use axum::http::StatusCode;
use clipdock_core::constants::SIGNED_URL_TTL;
use clipdock_core::models::{AssetRef, Video, VideoResponse};
use clipdock_core::AppError;
use clipdock_storage::ObjectStore;

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge("Upload body exceeds the size limit".to_string())
    } else {
        AppError::BadRequest(format!("Failed to read multipart: {}", e))
    }
}

/// Declared media type of a part, lowercased, parameters stripped.
fn declared_media_type(raw: Option<&str>) -> Result<String, AppError> {
    let raw = raw.ok_or_else(|| AppError::BadRequest("Missing file content type".to_string()))?;
    Ok(raw.split(';').next().unwrap_or("").trim().to_ascii_lowercase())
}

fn check_allowed(media_type: &str, allowed: &[&str]) -> Result<(), AppError> {
    if allowed.contains(&media_type) {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!(
            "Invalid file type '{}'. Allowed types: {}",
            media_type,
            allowed.join(", ")
        )))
    }
}

/// Stream the named file part to a [`StagedFile`].
///
/// The declared content type is checked against the allow-list before the
/// first byte is written to disk.
pub(crate) async fn stage_file_field(
    multipart: &mut Multipart,
    field_name: &str,
    allowed: &[&str],
) -> Result<(StagedFile, String), AppError> {
    while let Some(mut field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(field_name) {
            continue;
        }

        let media_type = declared_media_type(field.content_type())?;
        check_allowed(&media_type, allowed)?;

        let mut staged = StagedFile::create().await?;
        while let Some(chunk) = field.chunk().await.map_err(multipart_error)? {
            staged.write_chunk(&chunk).await?;
        }
        staged.finalize().await?;

        return Ok((staged, media_type));
    }

    Err(AppError::BadRequest(format!(
        "Missing file field '{}'",
        field_name
    )))
}

/// Buffer the named file part in memory (thumbnail-sized payloads only).
pub(crate) async fn read_file_field(
    multipart: &mut Multipart,
    field_name: &str,
    allowed: &[&str],
) -> Result<(Vec<u8>, String), AppError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(field_name) {
            continue;
        }

        let media_type = declared_media_type(field.content_type())?;
        check_allowed(&media_type, allowed)?;

        let data = field.bytes().await.map_err(multipart_error)?;
        return Ok((data.to_vec(), media_type));
    }

    Err(AppError::BadRequest(format!(
        "Missing file field '{}'",
        field_name
    )))
}

/// Resolve a stored `bucket,key` composite to a presigned URL.
///
/// Values that don't parse as a composite pass through unchanged; the read
/// must not fail because of a stale or foreign value in the column.
async fn resolve_ref(
    stored: &Option<String>,
    store: &dyn ObjectStore,
) -> Result<Option<String>, AppError> {
    let Some(raw) = stored else { return Ok(None) };

    match AssetRef::parse(raw) {
        None => Ok(Some(raw.clone())),
        Some(asset) => {
            let url = store
                .presign_get(&asset.bucket, &asset.key, SIGNED_URL_TTL)
                .await?;
            Ok(Some(url))
        }
    }
}

/// Build the read-model for a record, presigning both stored references.
pub(crate) async fn resolve_video_response(
    video: &Video,
    store: &dyn ObjectStore,
) -> Result<VideoResponse, AppError> {
    Ok(VideoResponse {
        id: video.id,
        title: video.title.clone(),
        description: video.description.clone(),
        created_at: video.created_at,
        updated_at: video.updated_at,
        thumbnail_url: resolve_ref(&video.thumbnail_ref, store).await?,
        video_url: resolve_ref(&video.media_ref, store).await?,
    })
}
