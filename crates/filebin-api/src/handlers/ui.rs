//! Static UI page.

use axum::response::Html;

/// Handle `GET /`: the upload page, embedded at compile time.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}
