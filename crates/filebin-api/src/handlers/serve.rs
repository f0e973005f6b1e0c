//! Raw blob serving, bypassing metadata.

use crate::error::HttpAppError;
use crate::handlers::blob_response;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::Response,
};
use std::sync::Arc;

/// Handle `GET /uploads/{filename}`: serve a blob straight from storage by
/// filename, without consulting the metadata document. Same bytes and same
/// filename scheme as the id-based fetch.
#[tracing::instrument(skip(state), fields(operation = "serve_blob", filename = %filename))]
pub async fn serve_blob(
    State(state): State<Arc<AppState>>,
    Path(filename): Path<String>,
) -> Result<Response, HttpAppError> {
    let data = state.storage.get(&filename).await?;
    blob_response(data)
}
