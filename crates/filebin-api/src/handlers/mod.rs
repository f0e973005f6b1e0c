//! HTTP handlers, one module per operation.

pub mod delete;
pub mod download;
pub mod list;
pub mod serve;
pub mod ui;
pub mod update;
pub mod upload;

use crate::error::HttpAppError;
use axum::{
    body::Body,
    http::{header, StatusCode},
    response::Response,
};
use filebin_core::AppError;

/// Fallback handler: anything outside the route table is Not Found.
pub async fn not_found() -> HttpAppError {
    HttpAppError(AppError::NotFound("Not found".to_string()))
}

/// Raw-bytes response shared by the two blob-serving routes, so the id-based
/// fetch and the metadata-bypassing raw serve stay behaviorally identical.
pub(crate) fn blob_response(data: Vec<u8>) -> Result<Response, HttpAppError> {
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/octet-stream")
        .body(Body::from(data))
        .map_err(|e| HttpAppError(AppError::Internal(e.to_string())))
}
