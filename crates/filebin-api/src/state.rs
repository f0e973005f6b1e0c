//! Application state injected into the router at construction time.

use filebin_db::FileRepository;
use filebin_storage::Storage;
use std::sync::Arc;

/// Shared state: the metadata repository and the blob storage the router
/// orchestrates. Both are injected so tests can substitute in-memory
/// backends.
#[derive(Clone)]
pub struct AppState {
    pub files: FileRepository,
    pub storage: Arc<dyn Storage>,
}

fn _assert_app_state_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    assert_send::<AppState>();
    assert_sync::<AppState>();
}
