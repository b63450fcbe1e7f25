use clipdock_api::{router, AppState};
use clipdock_core::Config;
use clipdock_db::PgVideoCatalog;
use clipdock_processing::{FfmpegRemuxer, FfprobeProber};
use clipdock_storage::S3ObjectStore;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect(&config.database_url)
        .await?;
    clipdock_db::run_migrations(&pool).await?;

    let store = S3ObjectStore::new(config.s3_region.clone(), config.s3_endpoint.clone()).await;

    let state = AppState {
        catalog: Arc::new(PgVideoCatalog::new(pool)),
        store: Arc::new(store),
        prober: Arc::new(FfprobeProber::new(config.ffprobe_path.clone())),
        remuxer: Arc::new(FfmpegRemuxer::new(config.ffmpeg_path.clone())),
        config,
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], state.config.server_port));
    let app = router(Arc::new(state));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(address = %addr, "clipdock-api listening");
    axum::serve(listener, app).await?;

    Ok(())
}
