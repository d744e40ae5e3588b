//! Conversions between SQLite rows and news records.

use chrono::{DateTime, Utc};
use rusqlite::Row;

use mynews_core::news::NewsRecord;

/// Convert a SQLite row to a NewsRecord.
///
/// Expected columns: id, title, body, published_at, sort
pub fn row_to_record(row: &Row) -> rusqlite::Result<NewsRecord> {
    let published_at: Option<String> = row.get(3)?;

    Ok(NewsRecord {
        id: row.get(0)?,
        title: row.get(1)?,
        body: row.get(2)?,
        published_at: published_at.as_deref().map(parse_datetime).transpose()?,
        sort: row.get(4)?,
    })
}

/// Parse an RFC 3339 timestamp stored as TEXT.
fn parse_datetime(s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(3, rusqlite::types::Type::Text, Box::new(e))
        })
}

/// Format a DateTime for SQLite storage (RFC 3339).
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}
