//! Delete-by-id handler.

use crate::error::HttpAppError;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use filebin_core::AppError;
use std::sync::Arc;

/// Handle `DELETE /files/{id}`: remove the blob (silently skipped when
/// already absent), then the metadata record. If the record removal fails
/// after the blob is gone, the stores diverge (accepted, no rollback).
#[tracing::instrument(skip(state), fields(operation = "delete_file", id = %id))]
pub async fn delete_file(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, HttpAppError> {
    let record = state
        .files
        .get(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("File not found".to_string()))?;

    state.storage.delete(&record.id).await?;
    state.files.remove(&id).await?;

    tracing::info!(id = %id, "File deleted");

    Ok(Json(serde_json::json!({})))
}
