//! Route configuration and setup

use crate::handlers;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the application router.
///
/// Requests outside the route table fall back to 404. An unsupported method
/// on `/files/{id}` answers 405 from the method router; the other matched
/// paths fall through to 404 for unsupported methods, matching the original
/// routing contract. The default body limit is disabled: uploads have no
/// size cap.
pub fn setup_routes(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::ui::index).fallback(handlers::not_found))
        .route(
            "/uploads/{filename}",
            get(handlers::serve::serve_blob).fallback(handlers::not_found),
        )
        .route(
            "/upload",
            post(handlers::upload::upload_file).fallback(handlers::not_found),
        )
        .route(
            "/files",
            get(handlers::list::list_files).fallback(handlers::not_found),
        )
        .route(
            "/files/{id}",
            get(handlers::download::download_file)
                .delete(handlers::delete::delete_file)
                .patch(handlers::update::update_file),
        )
        .fallback(handlers::not_found)
        .layer(DefaultBodyLimit::disable())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
