//! Storage abstraction trait.

use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Presign failed: {0}")]
    PresignFailed(String),

    #[error("Object not found: {0}")]
    NotFound(String),

    #[error("Storage backend error: {0}")]
    BackendError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

impl From<StorageError> for clipdock_core::AppError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound(msg) => clipdock_core::AppError::NotFound(msg),
            other => clipdock_core::AppError::Storage(other.to_string()),
        }
    }
}

/// Object-store operations used by the ingestion pipeline.
///
/// Bucket and key are explicit on every call: records persist both halves
/// and the read path presigns from them, so no backend may bake a bucket
/// into its state.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Upload a local file as a single object, streaming from disk where
    /// the transport supports it. Returns only after the store has
    /// acknowledged the write. Single attempt; retries belong to callers.
    async fn put_file(
        &self,
        bucket: &str,
        key: &str,
        path: &Path,
        content_type: &str,
    ) -> StorageResult<()>;

    /// Upload an in-memory buffer as a single object.
    async fn put_bytes(
        &self,
        bucket: &str,
        key: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> StorageResult<()>;

    /// Produce a time-bounded GET URL for an object without exposing
    /// store credentials. Computed at read time; never persisted.
    async fn presign_get(
        &self,
        bucket: &str,
        key: &str,
        expires_in: Duration,
    ) -> StorageResult<String>;
}
