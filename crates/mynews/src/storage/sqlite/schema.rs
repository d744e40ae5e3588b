//! SQLite schema definitions and SQL query constants.

/// Name of the news table.
pub const NEWS_TABLE: &str = "news";

/// SQL statement to create the news table and its paging index.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS news (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    body TEXT NOT NULL,
    published_at TEXT,
    sort INTEGER
);

CREATE INDEX IF NOT EXISTS idx_news_sort_id ON news(sort, id);
"#;

/// Checks whether a table exists.
pub const TABLE_EXISTS: &str =
    "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1";

pub const COUNT_NEWS: &str = "SELECT COUNT(*) FROM news";

pub const INSERT_NEWS: &str = r#"
INSERT INTO news (title, body, published_at, sort)
VALUES (?1, ?2, ?3, ?4)
"#;

/// Builds the paged select for an `ORDER BY` body such as `sort ASC, id ASC`.
///
/// The order body comes from `NewsOrder::to_sql`, which only emits known
/// column names and directions.
pub fn select_news_page(order_by: &str) -> String {
    format!(
        "SELECT id, title, body, published_at, sort FROM news ORDER BY {order_by} LIMIT ?1 OFFSET ?2"
    )
}
