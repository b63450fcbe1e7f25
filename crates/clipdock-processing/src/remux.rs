//! Fast-start remuxing via ffmpeg.
//!
//! Stream copy only: sample data is untouched, the container index moves
//! to the front so playback can begin before the download finishes.

use crate::error::ProcessError;
use crate::traits::Remuxer;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tempfile::TempPath;
use tokio::process::Command;

/// [`Remuxer`] backed by an ffmpeg binary.
pub struct FfmpegRemuxer {
    ffmpeg_path: String,
}

impl FfmpegRemuxer {
    pub fn new(ffmpeg_path: impl Into<String>) -> Self {
        Self {
            ffmpeg_path: ffmpeg_path.into(),
        }
    }

    /// Sibling path for the remuxed output: `<input>.faststart.mp4`.
    fn output_path(input: &Path) -> PathBuf {
        let mut os = input.as_os_str().to_os_string();
        os.push(".faststart.mp4");
        PathBuf::from(os)
    }
}

#[async_trait]
impl Remuxer for FfmpegRemuxer {
    async fn remux_faststart(&self, input: &Path) -> Result<TempPath, ProcessError> {
        let output_path = Self::output_path(input);
        let start = std::time::Instant::now();

        let output = Command::new(&self.ffmpeg_path)
            .arg("-i")
            .arg(input)
            .args(["-c", "copy", "-movflags", "faststart", "-f", "mp4", "-y"])
            .arg(&output_path)
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|source| ProcessError::Spawn {
                tool: "ffmpeg",
                source,
            })?;

        // Owns whatever ffmpeg wrote, including partial output on failure.
        let result = TempPath::from_path(output_path);

        if !output.status.success() {
            return Err(ProcessError::ToolFailed {
                tool: "ffmpeg",
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        let size = tokio::fs::metadata(&result).await?.len();
        if size == 0 {
            return Err(ProcessError::EmptyOutput);
        }

        tracing::info!(
            input = %input.display(),
            size_bytes = size,
            duration_ms = start.elapsed().as_millis() as u64,
            "Fast-start remux completed"
        );

        Ok(result)
    }
}
