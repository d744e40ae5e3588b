//! SQLite repository implementation.
//!
//! Implements [`NewsRepository`] from `mynews_core::storage` using SQLite.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use mynews_core::news::{NewsOrder, NewsRecord};
use mynews_core::storage::{NewsRepository, RepositoryError, Result};

use super::conversions::{format_datetime, row_to_record};
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based news repository.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Opens an already provisioned database.
    ///
    /// Fails with [`RepositoryError::NotProvisioned`] when the `news` table
    /// is missing. Schema is never created here.
    pub async fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        if !Self::table_exists(&conn).await? {
            return Err(RepositoryError::NotProvisioned(format!(
                "table '{}' does not exist in {path}; run `mynews provision` first",
                schema::NEWS_TABLE
            )));
        }

        Ok(Self { conn })
    }

    /// Creates the schema and seeds it when the table is empty.
    ///
    /// Returns the number of records inserted, which is zero when the table
    /// already held data.
    pub async fn provision(path: &str, seed: Vec<NewsRecord>) -> Result<usize> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::provision_connection(&conn, seed).await
    }

    /// Creates a provisioned in-memory database holding `seed`.
    #[cfg(test)]
    pub async fn new_in_memory(seed: Vec<NewsRecord>) -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::provision_connection(&conn, seed).await?;

        Ok(Self { conn })
    }

    async fn table_exists(conn: &Connection) -> Result<bool> {
        conn.call(|conn| {
            let count: i64 = conn
                .query_row(schema::TABLE_EXISTS, [schema::NEWS_TABLE], |row| row.get(0))
                .map_err(wrap_err)?;
            Ok(count > 0)
        })
        .await
        .map_err(map_tokio_rusqlite_error)
    }

    async fn provision_connection(conn: &Connection, seed: Vec<NewsRecord>) -> Result<usize> {
        conn.call(move |conn| {
            let tx = conn.transaction().map_err(wrap_err)?;
            tx.execute_batch(schema::CREATE_TABLES).map_err(wrap_err)?;

            let existing: i64 = tx
                .query_row(schema::COUNT_NEWS, [], |row| row.get(0))
                .map_err(wrap_err)?;
            if existing > 0 {
                return Ok(0);
            }

            let mut inserted = 0;
            {
                let mut stmt = tx.prepare(schema::INSERT_NEWS).map_err(wrap_err)?;
                for record in &seed {
                    stmt.execute(rusqlite::params![
                        record.title,
                        record.body,
                        record.published_at.as_ref().map(format_datetime),
                        record.sort,
                    ])
                    .map_err(wrap_err)?;
                    inserted += 1;
                }
            }

            tx.commit().map_err(wrap_err)?;
            Ok(inserted)
        })
        .await
        .map_err(map_tokio_rusqlite_error)
    }
}

#[async_trait]
impl NewsRepository for SqliteRepository {
    async fn count(&self) -> Result<u64> {
        let count: i64 = self
            .conn
            .call(|conn| {
                conn.query_row(schema::COUNT_NEWS, [], |row| row.get(0))
                    .map_err(wrap_err)
            })
            .await
            .map_err(map_tokio_rusqlite_error)?;

        u64::try_from(count)
            .map_err(|_| RepositoryError::InvalidData(format!("negative record count {count}")))
    }

    async fn query(&self, order: &NewsOrder, offset: u64, limit: u64) -> Result<Vec<NewsRecord>> {
        let sql = schema::select_news_page(&order.to_sql());
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let offset = i64::try_from(offset).unwrap_or(i64::MAX);

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(&sql).map_err(wrap_err)?;
                let rows = stmt
                    .query_map([limit, offset], row_to_record)
                    .map_err(wrap_err)?;

                let mut records = Vec::new();
                for row_result in rows {
                    records.push(row_result.map_err(wrap_err)?);
                }
                Ok(records)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }
}
