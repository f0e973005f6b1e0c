//! Fetch-by-id handler.

use crate::error::HttpAppError;
use crate::handlers::blob_response;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::Response,
};
use filebin_core::AppError;
use std::sync::Arc;

/// Handle `GET /files/{id}`: look the record up in metadata, then return the
/// blob bytes. A record whose blob is gone (dangling metadata) is Not Found.
#[tracing::instrument(skip(state), fields(operation = "download_file", id = %id))]
pub async fn download_file(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response, HttpAppError> {
    let record = state
        .files
        .get(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("File not found".to_string()))?;

    let data = state.storage.get(&record.id).await?;
    blob_response(data)
}
