use async_trait::async_trait;

use crate::news::{NewsOrder, NewsRecord};

use super::Result;

/// Read access to the news record store.
#[async_trait]
pub trait NewsRepository: Send + Sync {
    /// Returns the total number of news records.
    async fn count(&self) -> Result<u64>;

    /// Returns up to `limit` records starting at `offset` under `order`.
    async fn query(&self, order: &NewsOrder, offset: u64, limit: u64) -> Result<Vec<NewsRecord>>;
}
