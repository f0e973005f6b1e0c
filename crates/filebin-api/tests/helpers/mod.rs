//! Test helpers: build the router over temp-dir-backed stores.
//!
//! Run from workspace root: `cargo test -p filebin-api --test files_test`.

use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use filebin_api::setup::routes::setup_routes;
use filebin_api::state::AppState;
use filebin_db::{FileRepository, JsonDocumentStore, MemoryDocumentStore};
use filebin_storage::{LocalStorage, MemoryStorage};
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

/// Test application: server plus the paths of its two stores, so tests can
/// tamper with disk state (dangling metadata, orphan blobs, corruption).
pub struct TestApp {
    pub server: TestServer,
    pub upload_dir: PathBuf,
    pub metadata_file: PathBuf,
    pub _temp_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }
}

/// Setup test app with isolated on-disk stores.
pub async fn setup_test_app() -> TestApp {
    let temp_dir = TempDir::new().expect("create temp dir");
    let upload_dir = temp_dir.path().join("uploads");
    let metadata_file = temp_dir.path().join("files.json");

    let storage = LocalStorage::new(&upload_dir)
        .await
        .expect("create local storage");

    let files = FileRepository::new(Arc::new(JsonDocumentStore::new(&metadata_file)));
    files.init().await.expect("init metadata document");

    let state = Arc::new(AppState {
        files,
        storage: Arc::new(storage),
    });
    let server = TestServer::new(setup_routes(state)).expect("start test server");

    TestApp {
        server,
        upload_dir,
        metadata_file,
        _temp_dir: temp_dir,
    }
}

/// Setup test app over in-memory stores, no disk involved. Exercises the
/// store-substitution seam the router is built against.
pub async fn setup_memory_test_app() -> TestServer {
    let files = FileRepository::new(Arc::new(MemoryDocumentStore::new()));
    files.init().await.expect("init metadata document");

    let state = Arc::new(AppState {
        files,
        storage: Arc::new(MemoryStorage::new()),
    });
    TestServer::new(setup_routes(state)).expect("start test server")
}

/// Multipart form with a single `file` part.
pub fn file_form(filename: &str, content: &[u8], mimetype: &str) -> MultipartForm {
    MultipartForm::new().add_part(
        "file",
        Part::bytes(content.to_vec())
            .file_name(filename)
            .mime_type(mimetype),
    )
}

/// Multipart form with a `file` part and a `privacy` field.
pub fn file_form_with_privacy(
    filename: &str,
    content: &[u8],
    mimetype: &str,
    privacy: &str,
) -> MultipartForm {
    file_form(filename, content, mimetype).add_text("privacy", privacy)
}
