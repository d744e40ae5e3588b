//! Normalisation of raw store records into the served read model.

use chrono::{DateTime, Utc};

use super::{NewsItem, NewsRecord, PageResult, PageWindow};

/// Format used to render publication dates (`DD.MM.YYYY HH:MM:SS`).
pub const DISPLAY_DATE_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

/// Renders an optional timestamp for display, empty when absent.
pub fn format_published_at(published_at: Option<&DateTime<Utc>>) -> String {
    published_at
        .map(|dt| dt.format(DISPLAY_DATE_FORMAT).to_string())
        .unwrap_or_default()
}

/// Converts a store record into a news item.
pub fn record_to_item(record: NewsRecord) -> NewsItem {
    NewsItem {
        id: record.id,
        published_at: format_published_at(record.published_at.as_ref()),
        title: record.title,
        body: record.body,
    }
}

/// Assembles a page from the records fetched for `window`.
pub fn build_page(
    records: Vec<NewsRecord>,
    window: PageWindow,
    page_size: u64,
    total_count: u64,
) -> PageResult {
    PageResult {
        items: records.into_iter().map(record_to_item).collect(),
        page: window.page,
        page_count: window.page_count,
        page_size,
        total_count,
    }
}
