//! Metadata-store access for clipdock.
//!
//! The ingestion pipeline only ever reads one video record by id and
//! overwrites it whole; [`VideoCatalog`] captures exactly that. The
//! Postgres implementation backs the deployed binary, the in-memory one
//! backs the tests.

pub mod catalog;
pub mod memory;
pub mod postgres;

pub use catalog::{CatalogError, VideoCatalog};
pub use memory::InMemoryVideoCatalog;
pub use postgres::PgVideoCatalog;

/// Apply embedded migrations.
pub async fn run_migrations(pool: &sqlx::PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
