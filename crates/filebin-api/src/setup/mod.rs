//! Application setup and initialization
//!
//! This module contains all application initialization logic extracted from
//! main.rs for better organization and testability.

pub mod routes;
pub mod server;

use crate::state::AppState;
use anyhow::{Context, Result};
use filebin_core::Config;
use filebin_db::{FileRepository, JsonDocumentStore};
use filebin_storage::LocalStorage;
use std::sync::Arc;

/// Initialize the application: blob directory, metadata document, router.
///
/// Both stores are prepared idempotently before any request is served: the
/// upload directory is created if missing, and the metadata document is
/// created holding an empty sequence on first-ever startup.
pub async fn initialize_app(config: &Config) -> Result<(Arc<AppState>, axum::Router)> {
    let storage = LocalStorage::new(&config.upload_dir)
        .await
        .context("Failed to prepare upload directory")?;

    let files = FileRepository::new(Arc::new(JsonDocumentStore::new(&config.metadata_file)));
    files
        .init()
        .await
        .context("Failed to initialize metadata document")?;

    tracing::info!(
        upload_dir = %config.upload_dir.display(),
        metadata_file = %config.metadata_file.display(),
        "Stores initialized"
    );

    let state = Arc::new(AppState {
        files,
        storage: Arc::new(storage),
    });
    let router = routes::setup_routes(state.clone());

    Ok((state, router))
}
