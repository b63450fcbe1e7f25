//! Processing failures.
//!
//! Each failure mode is a distinct variant; none of them downgrade to a
//! default classification.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProcessError {
    /// The external tool could not be spawned at all.
    #[error("failed to run {tool}: {source}")]
    Spawn {
        tool: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// The external tool ran and exited non-zero.
    #[error("{tool} exited with an error: {stderr}")]
    ToolFailed { tool: &'static str, stderr: String },

    /// ffprobe produced output we could not parse.
    #[error("failed to parse ffprobe output: {0}")]
    UnparsableOutput(#[from] serde_json::Error),

    /// ffprobe reported no streams for the input.
    #[error("no video streams found")]
    NoStreams,

    /// ffmpeg reported success but wrote an empty file.
    #[error("remuxed output file is empty")]
    EmptyOutput,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ProcessError> for clipdock_core::AppError {
    fn from(err: ProcessError) -> Self {
        clipdock_core::AppError::Processing(err.to_string())
    }
}
