//! List handler.

use crate::error::HttpAppError;
use crate::state::AppState;
use axum::{extract::State, Json};
use filebin_core::FileRecord;
use std::sync::Arc;

/// Handle `GET /files`: the full metadata sequence, insertion order.
#[tracing::instrument(skip(state), fields(operation = "list_files"))]
pub async fn list_files(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<FileRecord>>, HttpAppError> {
    let records = state.files.list().await?;
    Ok(Json(records))
}
