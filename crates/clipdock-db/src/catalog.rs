//! The metadata-store collaborator interface.

use async_trait::async_trait;
use clipdock_core::models::Video;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<CatalogError> for clipdock_core::AppError {
    fn from(err: CatalogError) -> Self {
        clipdock_core::AppError::Database(err.to_string())
    }
}

/// Read-one / update-one access to video metadata records.
///
/// `update_video` is a whole-record overwrite; concurrent writers for the
/// same id resolve last-write-wins at the store. Ownership is re-checked
/// per request, so that is acceptable here.
#[async_trait]
pub trait VideoCatalog: Send + Sync {
    async fn get_video(&self, id: Uuid) -> Result<Option<Video>, CatalogError>;

    async fn update_video(&self, video: &Video) -> Result<(), CatalogError>;
}
