use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A raw news row as returned by the record store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsRecord {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub published_at: Option<DateTime<Utc>>,
    /// Explicit ordering field. Records without one sort first.
    pub sort: Option<i64>,
}

impl NewsRecord {
    /// Creates a record with no publication date and no sort value.
    pub fn new(id: i64, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
            published_at: None,
            sort: None,
        }
    }

    /// Sets the publication timestamp.
    pub fn with_published_at(mut self, published_at: DateTime<Utc>) -> Self {
        self.published_at = Some(published_at);
        self
    }

    /// Sets the sort value.
    pub fn with_sort(mut self, sort: i64) -> Self {
        self.sort = Some(sort);
        self
    }
}

/// A news item as served to clients.
///
/// Field names on the wire follow the upper-case convention the front-end
/// script expects (`ID`, `TITLE`, `TEXT`, `DATE`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "TITLE")]
    pub title: String,
    #[serde(rename = "TEXT")]
    pub body: String,
    /// Display string for the publication date, empty when unknown.
    #[serde(rename = "DATE")]
    pub published_at: String,
}

/// A sanitised page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub page_size: u64,
}

impl PageRequest {
    /// Builds a request from raw caller input.
    ///
    /// Negative pages become `0` and page sizes below `1` become `1`.
    /// No upper bound is applied to the page size here.
    pub fn new(page: i64, page_size: i64) -> Self {
        Self {
            page: page.max(0).unsigned_abs(),
            page_size: page_size.max(1).unsigned_abs(),
        }
    }
}

/// One page of news plus the paging metadata needed to navigate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResult {
    pub items: Vec<NewsItem>,
    /// The page actually served, after wrap-around.
    pub page: u64,
    #[serde(rename = "pages")]
    pub page_count: u64,
    #[serde(rename = "perPage")]
    pub page_size: u64,
    #[serde(rename = "total")]
    pub total_count: u64,
}

impl PageResult {
    /// The page served when the cache layer cannot be used.
    pub fn empty(page_size: u64) -> Self {
        Self {
            items: Vec::new(),
            page: 0,
            page_count: 1,
            page_size: page_size.max(1),
            total_count: 0,
        }
    }
}
