//! Capability traits for the external media tools.

use crate::error::ProcessError;
use async_trait::async_trait;
use clipdock_core::models::AspectClass;
use std::path::Path;
use tempfile::TempPath;

/// Inspect a local media file and classify its first stream's geometry.
#[async_trait]
pub trait Prober: Send + Sync {
    async fn probe_aspect(&self, path: &Path) -> Result<AspectClass, ProcessError>;
}

/// Rewrite a local media file for progressive playback (stream copy, index
/// moved to the front). The returned [`TempPath`] owns the output file and
/// removes it when dropped, whichever way the request ends.
#[async_trait]
pub trait Remuxer: Send + Sync {
    async fn remux_faststart(&self, input: &Path) -> Result<TempPath, ProcessError>;
}
