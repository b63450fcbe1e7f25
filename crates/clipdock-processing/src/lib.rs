//! External media-tool collaborators: stream probing (ffprobe) and
//! fast-start remuxing (ffmpeg).
//!
//! Both are exposed as capability traits so the ingestion pipeline can be
//! exercised with test doubles instead of real media tools.

pub mod error;
pub mod probe;
pub mod remux;
pub mod traits;

pub use error::ProcessError;
pub use probe::FfprobeProber;
pub use remux::FfmpegRemuxer;
pub use traits::{Prober, Remuxer};
