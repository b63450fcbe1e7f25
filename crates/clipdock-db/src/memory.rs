//! In-memory [`VideoCatalog`] used by tests.

use crate::catalog::{CatalogError, VideoCatalog};
use async_trait::async_trait;
use clipdock_core::models::Video;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

#[derive(Clone, Default)]
pub struct InMemoryVideoCatalog {
    videos: Arc<Mutex<HashMap<Uuid, Video>>>,
}

impl InMemoryVideoCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a record (test setup).
    pub fn insert(&self, video: Video) {
        self.videos.lock().unwrap().insert(video.id, video);
    }

    /// Snapshot a record without going through the trait (test assertions).
    pub fn snapshot(&self, id: Uuid) -> Option<Video> {
        self.videos.lock().unwrap().get(&id).cloned()
    }
}

#[async_trait]
impl VideoCatalog for InMemoryVideoCatalog {
    async fn get_video(&self, id: Uuid) -> Result<Option<Video>, CatalogError> {
        Ok(self.videos.lock().unwrap().get(&id).cloned())
    }

    async fn update_video(&self, video: &Video) -> Result<(), CatalogError> {
        self.videos
            .lock()
            .unwrap()
            .insert(video.id, video.clone());
        Ok(())
    }
}
