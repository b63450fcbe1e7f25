//! Aspect-ratio classification for probed video streams.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Coarse aspect class of a video's first stream, used only to pick the
/// storage-key prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectClass {
    Landscape,
    Portrait,
    Other,
}

impl AspectClass {
    /// Classify integer stream dimensions.
    ///
    /// The comparison is an exact equality on integer-truncated division:
    /// landscape iff `w == 16 * h / 9`, portrait iff `h == 16 * w / 9`.
    /// Near-16:9 sizes that don't divide exactly (1918x1080) classify as
    /// `Other`, while truncation lets some non-exact sizes (853x480)
    /// through. Not an epsilon comparison; do not change without sign-off.
    pub fn from_dimensions(width: i64, height: i64) -> Self {
        if width == 16 * height / 9 {
            AspectClass::Landscape
        } else if height == 16 * width / 9 {
            AspectClass::Portrait
        } else {
            AspectClass::Other
        }
    }

    /// Storage-key prefix for this class.
    pub fn key_prefix(&self) -> &'static str {
        match self {
            AspectClass::Landscape => "landscape",
            AspectClass::Portrait => "portrait",
            AspectClass::Other => "other",
        }
    }
}

impl Display for AspectClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.key_prefix())
    }
}
