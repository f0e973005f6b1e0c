//! Create-upload handler.

use crate::error::HttpAppError;
use crate::state::AppState;
use axum::{
    extract::{Multipart, State},
    Json,
};
use filebin_core::{AppError, FileRecord, UploadResponse, DEFAULT_PRIVACY};
use filebin_storage::keys;
use std::sync::Arc;

/// Handle `POST /upload`.
///
/// Reads the multipart body: the `file` part (required) carries the bytes,
/// client filename, and declared content type; the optional `privacy` part
/// overrides the `"private"` default. The blob is written first, then the
/// record is appended to the metadata document; if the append fails after
/// the blob write the two stores diverge (accepted, no rollback).
#[tracing::instrument(skip(state, multipart), fields(operation = "upload_file"))]
pub async fn upload_file(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, HttpAppError> {
    let mut file_part: Option<(String, String, Vec<u8>)> = None;
    let mut privacy: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(bad_multipart)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let original_name = field.file_name().unwrap_or_default().to_string();
                let mimetype = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let data = field.bytes().await.map_err(bad_multipart)?;
                file_part = Some((original_name, mimetype, data.to_vec()));
            }
            "privacy" => {
                privacy = Some(field.text().await.map_err(bad_multipart)?);
            }
            _ => {}
        }
    }

    let Some((original_name, mimetype, data)) = file_part else {
        return Err(AppError::BadRequest("missing file".to_string()).into());
    };

    let id = keys::blob_filename(&original_name);
    let size = data.len() as u64;

    state.storage.put(&id, data).await?;

    let record = FileRecord {
        id,
        original_name,
        size,
        mimetype,
        privacy: privacy.unwrap_or_else(|| DEFAULT_PRIVACY.to_string()),
    };
    state.files.append(record.clone()).await?;

    tracing::info!(
        id = %record.id,
        original_name = %record.original_name,
        size_bytes = record.size,
        "File uploaded"
    );

    Ok(Json(UploadResponse { file: record }))
}

fn bad_multipart(err: axum::extract::multipart::MultipartError) -> HttpAppError {
    HttpAppError(AppError::BadRequest(format!("Invalid multipart body: {err}")))
}
