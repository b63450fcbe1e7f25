use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::AssetRef;

/// A video metadata record.
///
/// `thumbnail_ref` / `media_ref` hold the persisted `bucket,key` composite
/// (see [`AssetRef`]) once an asset has been uploaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Video {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub thumbnail_ref: Option<String>,
    pub media_ref: Option<String>,
}

impl Video {
    /// The stored media reference, if present and well-formed.
    pub fn media_asset(&self) -> Option<AssetRef> {
        self.media_ref.as_deref().and_then(AssetRef::parse)
    }

    /// The stored thumbnail reference, if present and well-formed.
    pub fn thumbnail_asset(&self) -> Option<AssetRef> {
        self.thumbnail_ref.as_deref().and_then(AssetRef::parse)
    }
}

/// Read-model returned over HTTP: same record with the stored references
/// resolved to retrievable URLs at read time.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VideoResponse {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_video() -> Video {
        Video {
            id: Uuid::new_v4(),
            owner_id: Uuid::new_v4(),
            title: "launch recap".to_string(),
            description: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            thumbnail_ref: None,
            media_ref: None,
        }
    }

    #[test]
    fn test_media_asset_parses_stored_composite() {
        let mut video = sample_video();
        video.media_ref = Some("clipdock-media,landscape/abc.mp4".to_string());
        let asset = video.media_asset().unwrap();
        assert_eq!(asset.bucket, "clipdock-media");
        assert_eq!(asset.key, "landscape/abc.mp4");
    }

    #[test]
    fn test_media_asset_tolerates_malformed_ref() {
        let mut video = sample_video();
        video.media_ref = Some("not-a-composite".to_string());
        assert!(video.media_asset().is_none());
    }
}
