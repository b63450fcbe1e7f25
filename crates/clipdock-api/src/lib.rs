//! clipdock HTTP API
//!
//! Handlers, auth, the ingestion orchestrator, and application wiring.

mod api_doc;

pub mod auth;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod services;
pub mod state;

pub use error::{ErrorResponse, HttpAppError};
pub use routes::router;
pub use state::AppState;
