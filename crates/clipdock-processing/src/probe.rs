//! Stream geometry probing via ffprobe.

use crate::error::ProcessError;
use crate::traits::Prober;
use async_trait::async_trait;
use clipdock_core::models::AspectClass;
use serde::Deserialize;
use std::path::Path;
use tokio::process::Command;

#[derive(Debug, Deserialize)]
struct ProbeOutput {
    #[serde(default)]
    streams: Vec<ProbeStream>,
}

#[derive(Debug, Deserialize)]
struct ProbeStream {
    #[serde(default)]
    width: i64,
    #[serde(default)]
    height: i64,
}

/// Classify the first stream of an ffprobe JSON document.
fn classify_probe_output(raw: &[u8]) -> Result<AspectClass, ProcessError> {
    let output: ProbeOutput = serde_json::from_slice(raw)?;

    let stream = output.streams.first().ok_or(ProcessError::NoStreams)?;

    Ok(AspectClass::from_dimensions(stream.width, stream.height))
}

/// [`Prober`] backed by an ffprobe binary.
pub struct FfprobeProber {
    ffprobe_path: String,
}

impl FfprobeProber {
    pub fn new(ffprobe_path: impl Into<String>) -> Self {
        Self {
            ffprobe_path: ffprobe_path.into(),
        }
    }
}

#[async_trait]
impl Prober for FfprobeProber {
    async fn probe_aspect(&self, path: &Path) -> Result<AspectClass, ProcessError> {
        let start = std::time::Instant::now();

        let output = Command::new(&self.ffprobe_path)
            .args(["-v", "error", "-print_format", "json", "-show_streams"])
            .arg(path)
            .output()
            .await
            .map_err(|source| ProcessError::Spawn {
                tool: "ffprobe",
                source,
            })?;

        if !output.status.success() {
            return Err(ProcessError::ToolFailed {
                tool: "ffprobe",
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        let class = classify_probe_output(&output.stdout)?;

        tracing::info!(
            path = %path.display(),
            class = %class,
            duration_ms = start.elapsed().as_millis() as u64,
            "Stream probe completed"
        );

        Ok(class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classifies_first_stream() {
        let raw = br#"{"streams":[{"width":1920,"height":1080,"codec_name":"h264"},{"width":0,"height":0}]}"#;
        assert_eq!(classify_probe_output(raw).unwrap(), AspectClass::Landscape);
    }

    #[test]
    fn test_portrait_stream() {
        let raw = br#"{"streams":[{"width":1080,"height":1920}]}"#;
        assert_eq!(classify_probe_output(raw).unwrap(), AspectClass::Portrait);
    }

    #[test]
    fn test_non_standard_dimensions() {
        let raw = br#"{"streams":[{"width":1440,"height":1080}]}"#;
        assert_eq!(classify_probe_output(raw).unwrap(), AspectClass::Other);
    }

    #[test]
    fn test_zero_streams_is_an_error() {
        let raw = br#"{"streams":[]}"#;
        assert!(matches!(
            classify_probe_output(raw),
            Err(ProcessError::NoStreams)
        ));

        let raw = br#"{}"#;
        assert!(matches!(
            classify_probe_output(raw),
            Err(ProcessError::NoStreams)
        ));
    }

    #[test]
    fn test_garbage_output_is_an_error() {
        let raw = b"moov atom not found";
        assert!(matches!(
            classify_probe_output(raw),
            Err(ProcessError::UnparsableOutput(_))
        ));
    }

    #[test]
    fn test_audio_only_stream_defaults_to_zero_dimensions() {
        // Streams without width/height (audio) deserialize as 0x0, which
        // classifies as landscape (0 == 16*0/9). Parity with the original
        // behavior of reading the first stream unconditionally.
        let raw = br#"{"streams":[{"codec_name":"aac"}]}"#;
        assert_eq!(classify_probe_output(raw).unwrap(), AspectClass::Landscape);
    }
}
