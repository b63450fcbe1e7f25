//! Application state.

use clipdock_core::Config;
use clipdock_db::VideoCatalog;
use clipdock_processing::{Prober, Remuxer};
use clipdock_storage::ObjectStore;
use std::sync::Arc;

/// Immutable per-process context handed to every handler: configuration
/// plus the external collaborators behind their capability traits. Built
/// once at startup (or per test) and never mutated.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub catalog: Arc<dyn VideoCatalog>,
    pub store: Arc<dyn ObjectStore>,
    pub prober: Arc<dyn Prober>,
    pub remuxer: Arc<dyn Remuxer>,
}

#[allow(dead_code)]
fn _assert_app_state_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    assert_send::<AppState>();
    assert_sync::<AppState>();
}
