//! Postgres-backed [`VideoCatalog`].

use crate::catalog::{CatalogError, VideoCatalog};
use async_trait::async_trait;
use clipdock_core::models::Video;
use sqlx::{PgPool, Postgres};
use uuid::Uuid;

#[derive(Clone)]
pub struct PgVideoCatalog {
    pool: PgPool,
}

impl PgVideoCatalog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VideoCatalog for PgVideoCatalog {
    async fn get_video(&self, id: Uuid) -> Result<Option<Video>, CatalogError> {
        let video = sqlx::query_as::<Postgres, Video>(
            r#"
            SELECT id, owner_id, title, description, created_at, updated_at,
                   thumbnail_ref, media_ref
            FROM videos
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(video)
    }

    async fn update_video(&self, video: &Video) -> Result<(), CatalogError> {
        let result = sqlx::query(
            r#"
            UPDATE videos
            SET title = $2,
                description = $3,
                updated_at = $4,
                thumbnail_ref = $5,
                media_ref = $6
            WHERE id = $1
            "#,
        )
        .bind(video.id)
        .bind(&video.title)
        .bind(&video.description)
        .bind(video.updated_at)
        .bind(&video.thumbnail_ref)
        .bind(&video.media_ref)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            tracing::warn!(video_id = %video.id, "update_video matched no rows");
        }

        Ok(())
    }
}
