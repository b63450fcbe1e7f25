//! Persisted object reference.
//!
//! Video records store `bucket,key`, never a resolved URL, because
//! presigned URLs expire. Resolution happens on the read path.

use std::fmt::{Display, Formatter, Result as FmtResult};

/// A stored object's location: bucket plus key.
///
/// The persisted form is the two halves joined by a comma. Readers must
/// not treat the string as fetchable; it is an internal encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRef {
    pub bucket: String,
    pub key: String,
}

impl AssetRef {
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }

    /// Parse the persisted `bucket,key` form. Returns `None` for anything
    /// that is not two non-empty halves; callers treat that as "no usable
    /// reference" rather than an error.
    pub fn parse(raw: &str) -> Option<Self> {
        let (bucket, key) = raw.split_once(',')?;
        if bucket.is_empty() || key.is_empty() {
            return None;
        }
        Some(Self::new(bucket, key))
    }
}

impl Display for AssetRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{},{}", self.bucket, self.key)
    }
}
