//! Page query endpoint used by the client script.

use axum::{
    extract::{rejection::FormRejection, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Form, Json,
};
use serde::Deserialize;

use mynews_core::news::PageResult;

use super::csrf::{tokens_match, CSRF_HEADER};
use super::AppError;
use crate::state::AppState;

/// Form body of a page query.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub page: Option<i64>,
    #[serde(rename = "perPage", default)]
    pub per_page: Option<i64>,
    /// Anti-forgery token, unless sent in the `X-CSRF-Token` header.
    #[serde(default)]
    pub sessid: Option<String>,
}

/// Helper to create error responses with logging.
fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let msg = message.into();
    tracing::warn!(status = %status, message = %msg, "API error");
    (status, msg).into_response()
}

/// POST /api/news/page - Fetch one page of news.
#[axum::debug_handler]
pub async fn news_page(
    State(state): State<AppState>,
    headers: HeaderMap,
    form_result: Result<Form<PageQuery>, FormRejection>,
) -> Result<Json<PageResult>, Response> {
    let Form(query) = form_result.map_err(|e| {
        error_response(StatusCode::BAD_REQUEST, format!("Failed to parse form: {e}"))
    })?;

    let provided = headers
        .get(CSRF_HEADER)
        .and_then(|value| value.to_str().ok())
        .or(query.sessid.as_deref())
        .unwrap_or_default();

    if !tokens_match(&state.csrf_token, provided) {
        return Err(error_response(
            StatusCode::FORBIDDEN,
            "Missing or invalid anti-forgery token",
        ));
    }

    let page = query.page.unwrap_or(0);
    let per_page = query
        .per_page
        .unwrap_or(state.default_page_size)
        .min(state.max_page_size);

    let result = state
        .news
        .get_page(page, per_page)
        .await
        .map_err(|e| AppError::from(e).into_response())?;

    tracing::debug!(
        requested = page,
        served = result.page,
        pages = result.page_count,
        items = result.items.len(),
        "Served news page"
    );

    Ok(Json(result))
}
