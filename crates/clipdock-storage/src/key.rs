//! Object-key generation.
//!
//! Key format: `{class}/{uuid}.{ext}` for classified video assets,
//! `{uuid}.{ext}` for thumbnails. The fresh v4 UUID carries uniqueness
//! across concurrent uploads; the extension comes from the declared
//! content type's subtype.

use clipdock_core::models::AspectClass;
use uuid::Uuid;

/// Build a unique relative object key for an upload.
pub fn build_object_key(class: Option<AspectClass>, content_type: &str) -> String {
    let ext = content_type
        .split_once('/')
        .map(|(_, subtype)| subtype)
        .filter(|s| !s.is_empty())
        .unwrap_or("bin");
    let token = Uuid::new_v4();

    match class {
        Some(class) => format!("{}/{}.{}", class.key_prefix(), token, ext),
        None => format!("{}.{}", token, ext),
    }
}
