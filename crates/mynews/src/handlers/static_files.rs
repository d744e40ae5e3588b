//! Static asset handler for the client script.

use axum::{http::header, response::IntoResponse};

/// Client script, compiled into the binary.
const NEWS_JS: &str = include_str!("../../assets/news.js");

/// GET /assets/news.js - Serve the pager script.
pub async fn news_js() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "application/javascript; charset=utf-8"),
            (header::CACHE_CONTROL, "public, max-age=3600"),
        ],
        NEWS_JS,
    )
}
