//! In-memory repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use mynews_core::news::{sort_records, NewsOrder, NewsRecord};
use mynews_core::storage::{NewsRepository, Result};

/// In-memory news store.
///
/// Records live in a `Vec` behind `Arc<RwLock<_>>` and are sorted on
/// every query. Data is not persisted.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    records: Arc<RwLock<Vec<NewsRecord>>>,
}

impl InMemoryRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository holding `records`.
    pub fn with_records(records: Vec<NewsRecord>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }
}

#[async_trait]
impl NewsRepository for InMemoryRepository {
    async fn count(&self) -> Result<u64> {
        let records = self.records.read().await;
        Ok(records.len() as u64)
    }

    async fn query(&self, order: &NewsOrder, offset: u64, limit: u64) -> Result<Vec<NewsRecord>> {
        let mut sorted = self.records.read().await.clone();
        sort_records(&mut sorted, order);

        let offset = usize::try_from(offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);

        Ok(sorted.into_iter().skip(offset).take(limit).collect())
    }
}
