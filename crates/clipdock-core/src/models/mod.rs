mod asset_ref;
mod aspect;
mod video;

pub use asset_ref::AssetRef;
pub use aspect::AspectClass;
pub use video::{Video, VideoResponse};
