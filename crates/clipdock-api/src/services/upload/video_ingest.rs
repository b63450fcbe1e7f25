//! The video ingestion pipeline.

use super::staging::StagedFile;
use chrono::Utc;
use clipdock_core::models::{AssetRef, Video};
use clipdock_core::AppError;
use clipdock_db::VideoCatalog;
use clipdock_processing::{Prober, Remuxer};
use clipdock_storage::{build_object_key, ObjectStore};
use std::sync::Arc;

/// Runs the staged upload through probe → remux → store → record update.
///
/// Steps are strictly sequential; each blocks until its child process or
/// network call returns. The staged input and the remuxed output are both
/// dropped (and their files removed) on every exit path, early returns
/// included. The caller has already loaded the record and verified
/// ownership.
pub struct VideoIngest {
    catalog: Arc<dyn VideoCatalog>,
    store: Arc<dyn ObjectStore>,
    prober: Arc<dyn Prober>,
    remuxer: Arc<dyn Remuxer>,
    bucket: String,
}

impl VideoIngest {
    pub fn new(
        catalog: Arc<dyn VideoCatalog>,
        store: Arc<dyn ObjectStore>,
        prober: Arc<dyn Prober>,
        remuxer: Arc<dyn Remuxer>,
        bucket: String,
    ) -> Self {
        Self {
            catalog,
            store,
            prober,
            remuxer,
            bucket,
        }
    }

    pub fn from_state(state: &crate::state::AppState) -> Self {
        Self::new(
            state.catalog.clone(),
            state.store.clone(),
            state.prober.clone(),
            state.remuxer.clone(),
            state.config.s3_bucket.clone(),
        )
    }

    /// Ingest a staged video upload and return the updated record.
    pub async fn run(
        &self,
        mut video: Video,
        staged: StagedFile,
        content_type: &str,
    ) -> Result<Video, AppError> {
        let class = self.prober.probe_aspect(staged.path()).await?;

        tracing::info!(
            video_id = %video.id,
            class = %class,
            size_bytes = staged.len(),
            "Upload staged and classified"
        );

        // The remuxed file, never the raw upload, is what gets stored.
        let remuxed = self.remuxer.remux_faststart(staged.path()).await?;

        let key = build_object_key(Some(class), content_type);
        self.store
            .put_file(&self.bucket, &key, &remuxed, content_type)
            .await?;

        video.media_ref = Some(AssetRef::new(self.bucket.clone(), key).to_string());
        video.updated_at = Utc::now();

        // If this update fails the uploaded object stays in the bucket
        // unlinked; only local temp files are reclaimed.
        self.catalog.update_video(&video).await?;

        tracing::info!(
            video_id = %video.id,
            media_ref = video.media_ref.as_deref().unwrap_or_default(),
            "Video ingest completed"
        );

        Ok(video)
    }
}
