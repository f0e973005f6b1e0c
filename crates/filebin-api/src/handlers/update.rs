//! Privacy-update handler.

use crate::error::HttpAppError;
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};
use filebin_core::{AppError, FileRecord};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Default, Deserialize)]
pub struct UpdateFileRequest {
    pub privacy: Option<String>,
}

/// Handle `PATCH /files/{id}`.
///
/// An empty body reads as `{}`. A present, non-empty `privacy` value
/// overwrites the record's field and persists the document; otherwise
/// nothing is mutated. Either way the response is the current record.
#[tracing::instrument(skip(state, body), fields(operation = "update_file", id = %id))]
pub async fn update_file(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<FileRecord>, HttpAppError> {
    let request: UpdateFileRequest = if body.is_empty() {
        UpdateFileRequest::default()
    } else {
        serde_json::from_slice(&body)
            .map_err(|e| AppError::BadRequest(format!("Invalid JSON body: {e}")))?
    };

    let record = match request.privacy.filter(|privacy| !privacy.is_empty()) {
        Some(privacy) => state.files.set_privacy(&id, &privacy).await?,
        None => state.files.get(&id).await?,
    }
    .ok_or_else(|| AppError::NotFound("File not found".to_string()))?;

    Ok(Json(record))
}
