//! OpenAPI documentation.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::video_get::get_video,
        crate::handlers::video_upload::upload_video,
        crate::handlers::thumbnail_upload::upload_thumbnail,
    ),
    components(schemas(
        clipdock_core::models::VideoResponse,
        crate::error::ErrorResponse,
    )),
    tags(
        (name = "videos", description = "Video ingestion and retrieval")
    )
)]
pub struct ApiDoc;
