//! Object-store access for clipdock.
//!
//! The [`ObjectStore`] trait covers the three operations the ingestion
//! pipeline needs: put a file, put a byte buffer, and presign a GET.
//! Backends: S3 (and S3-compatibles) for deployment, an in-memory map
//! for tests.

pub mod key;
pub mod memory;
pub mod s3;
pub mod traits;

pub use key::build_object_key;
pub use memory::MemoryObjectStore;
pub use s3::S3ObjectStore;
pub use traits::{ObjectStore, StorageError, StorageResult};
