//! Request-scoped upload staging.

use std::io;
use std::path::Path;
use tempfile::NamedTempFile;
use tokio::fs::File;
use tokio::io::{AsyncSeekExt, AsyncWriteExt};

/// A byte-for-byte copy of an upload on local disk.
///
/// The file is created before the first write and deleted when the value
/// drops, so it cannot outlive the request on any exit path. After
/// [`finalize`](Self::finalize) the write handle is flushed and rewound to
/// offset zero; readers (ffprobe, ffmpeg, the uploader) see the complete
/// content from the start.
pub struct StagedFile {
    temp: NamedTempFile,
    file: File,
    len: u64,
}

impl StagedFile {
    pub async fn create() -> io::Result<Self> {
        let temp = NamedTempFile::new()?;
        let file = File::create(temp.path()).await?;
        Ok(Self { temp, file, len: 0 })
    }

    pub async fn write_chunk(&mut self, chunk: &[u8]) -> io::Result<()> {
        self.file.write_all(chunk).await?;
        self.len += chunk.len() as u64;
        Ok(())
    }

    /// Flush and reposition at offset zero. Must be called after the last
    /// write and before handing the path to any reader.
    pub async fn finalize(&mut self) -> io::Result<()> {
        self.file.flush().await?;
        self.file.rewind().await?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_round_trip_from_offset_zero() {
        let payload = b"not actually an mp4 but enough bytes to matter".repeat(64);

        let mut staged = StagedFile::create().await.unwrap();
        for chunk in payload.chunks(100) {
            staged.write_chunk(chunk).await.unwrap();
        }
        staged.finalize().await.unwrap();

        assert_eq!(staged.len(), payload.len() as u64);
        let read_back = tokio::fs::read(staged.path()).await.unwrap();
        assert_eq!(read_back, payload);
    }

    #[tokio::test]
    async fn test_removed_on_drop() {
        let staged = StagedFile::create().await.unwrap();
        let path = staged.path().to_path_buf();
        assert!(path.exists());

        drop(staged);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_drop_tolerates_already_deleted_file() {
        let staged = StagedFile::create().await.unwrap();
        let path = staged.path().to_path_buf();

        // Someone else removed the file first; dropping must not panic.
        std::fs::remove_file(&path).unwrap();
        drop(staged);
        assert!(!path.exists());
    }
}
