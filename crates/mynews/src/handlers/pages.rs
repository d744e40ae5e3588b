use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use mynews_core::news::NewsItem;

use super::AppError;
use crate::state::AppState;

/// Template wrapper that converts Askama templates into HTML responses.
struct HtmlTemplate<T>(T);

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: Template,
{
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to render template: {err}"),
            )
                .into_response(),
        }
    }
}

/// News list page with the first page of items already rendered.
#[derive(Template)]
#[template(path = "news.html")]
struct NewsTemplate {
    items: Vec<NewsItem>,
    page: u64,
    pages: u64,
    per_page: u64,
    total: u64,
    csrf_token: String,
}

/// Handler for the news page (GET / and GET /news).
pub async fn news_index(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let result = state.news.get_page(0, state.default_page_size).await?;

    Ok(HtmlTemplate(NewsTemplate {
        items: result.items,
        page: result.page,
        pages: result.page_count,
        per_page: result.page_size,
        total: result.total_count,
        csrf_token: state.csrf_token.to_string(),
    }))
}
