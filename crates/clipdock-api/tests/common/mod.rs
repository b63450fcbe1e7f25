//! Shared test fixtures: in-memory collaborators, canned media tools,
//! and multipart body construction.

#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use chrono::Utc;
use clipdock_api::{auth, router, AppState};
use clipdock_core::models::{AspectClass, Video};
use clipdock_core::Config;
use clipdock_db::InMemoryVideoCatalog;
use clipdock_processing::{ProcessError, Prober, Remuxer};
use clipdock_storage::MemoryObjectStore;
use std::path::Path;
use std::sync::Arc;
use tempfile::{NamedTempFile, TempPath};
use uuid::Uuid;

pub const BUCKET: &str = "clipdock-test";
pub const JWT_SECRET: &str = "integration-test-secret";
pub const BOUNDARY: &str = "clipdock-test-boundary";

pub fn test_config(max_video_size_bytes: usize, max_thumbnail_size_bytes: usize) -> Config {
    Config {
        server_port: 0,
        database_url: "postgres://unused-in-tests".to_string(),
        db_max_connections: 1,
        jwt_secret: JWT_SECRET.to_string(),
        s3_bucket: BUCKET.to_string(),
        s3_region: "us-east-1".to_string(),
        s3_endpoint: None,
        ffmpeg_path: "ffmpeg".to_string(),
        ffprobe_path: "ffprobe".to_string(),
        max_video_size_bytes,
        max_thumbnail_size_bytes,
        environment: "test".to_string(),
    }
}

pub enum CannedProbe {
    Class(AspectClass),
    NoStreams,
}

/// [`Prober`] double returning a canned result.
pub struct FakeProber(pub CannedProbe);

#[async_trait]
impl Prober for FakeProber {
    async fn probe_aspect(&self, _path: &Path) -> Result<AspectClass, ProcessError> {
        match &self.0 {
            CannedProbe::Class(class) => Ok(*class),
            CannedProbe::NoStreams => Err(ProcessError::NoStreams),
        }
    }
}

pub enum CannedRemux {
    /// Write these bytes as the remuxed output.
    Bytes(Vec<u8>),
    /// Copy the input through unchanged.
    Copy,
    /// Behave as if ffmpeg produced an empty file.
    EmptyOutput,
}

/// [`Remuxer`] double with canned behavior.
pub struct FakeRemuxer(pub CannedRemux);

#[async_trait]
impl Remuxer for FakeRemuxer {
    async fn remux_faststart(&self, input: &Path) -> Result<TempPath, ProcessError> {
        match &self.0 {
            CannedRemux::EmptyOutput => Err(ProcessError::EmptyOutput),
            CannedRemux::Bytes(bytes) => {
                let file = NamedTempFile::new()?;
                tokio::fs::write(file.path(), bytes).await?;
                Ok(file.into_temp_path())
            }
            CannedRemux::Copy => {
                let file = NamedTempFile::new()?;
                tokio::fs::copy(input, file.path()).await?;
                Ok(file.into_temp_path())
            }
        }
    }
}

pub struct TestApp {
    pub server: TestServer,
    pub catalog: InMemoryVideoCatalog,
    pub store: MemoryObjectStore,
}

pub fn setup_app(prober: FakeProber, remuxer: FakeRemuxer, config: Config) -> TestApp {
    let catalog = InMemoryVideoCatalog::new();
    let store = MemoryObjectStore::new();

    let state = AppState {
        config,
        catalog: Arc::new(catalog.clone()),
        store: Arc::new(store.clone()),
        prober: Arc::new(prober),
        remuxer: Arc::new(remuxer),
    };

    let server = TestServer::new(router(Arc::new(state))).expect("failed to start test server");

    TestApp {
        server,
        catalog,
        store,
    }
}

/// An app wired for the happy path: landscape probe, pass-through remux.
pub fn setup_default_app() -> TestApp {
    setup_app(
        FakeProber(CannedProbe::Class(AspectClass::Landscape)),
        FakeRemuxer(CannedRemux::Copy),
        test_config(64 * 1024, 64 * 1024),
    )
}

pub fn seed_video(catalog: &InMemoryVideoCatalog, owner_id: Uuid) -> Video {
    let video = Video {
        id: Uuid::new_v4(),
        owner_id,
        title: "draft upload".to_string(),
        description: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
        thumbnail_ref: None,
        media_ref: None,
    };
    catalog.insert(video.clone());
    video
}

pub fn auth_header(user_id: Uuid) -> String {
    let token = auth::create_token(user_id, JWT_SECRET, chrono::Duration::hours(1))
        .expect("failed to sign test token");
    format!("Bearer {}", token)
}

/// A single-file multipart form in axum-test's own encoding.
pub fn file_form(field_name: &str, filename: &str, content_type: &str, data: &[u8]) -> MultipartForm {
    let part = Part::bytes(data.to_vec())
        .file_name(filename)
        .mime_type(content_type);
    MultipartForm::new().add_part(field_name, part)
}

/// A single-file multipart body with a fixed boundary.
pub fn multipart_body(
    field_name: &str,
    filename: &str,
    content_type: &str,
    data: &[u8],
) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"{field_name}\"; filename=\"{filename}\"\r\n\
             Content-Type: {content_type}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={BOUNDARY}")
}
