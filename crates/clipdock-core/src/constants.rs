//! Application-wide constants.

use std::time::Duration;

/// Ceiling for a video upload body. Bytes beyond this are never accepted
/// onto disk; the request fails instead of truncating.
pub const MAX_VIDEO_UPLOAD_BYTES: usize = 1 << 30;

/// Ceiling for a thumbnail upload body.
pub const MAX_THUMBNAIL_UPLOAD_BYTES: usize = 10 << 20;

/// Lifetime of presigned retrieval URLs issued on the read path.
pub const SIGNED_URL_TTL: Duration = Duration::from_secs(5 * 60);

/// Content types accepted for the video upload path.
pub const VIDEO_CONTENT_TYPES: &[&str] = &["video/mp4"];

/// Content types accepted for the thumbnail upload path.
pub const THUMBNAIL_CONTENT_TYPES: &[&str] = &["image/jpeg", "image/png"];
