//! Cache-aside paging over the news record store.

use std::sync::Arc;
use std::time::Duration;

use mynews_core::cache::{deserialize_page, news_page_key, serialize_page, Cache};
use mynews_core::news::{build_page, resolve_window, NewsOrder, PageRequest, PageResult};
use mynews_core::storage::{NewsRepository, Result};

/// Serves pages of news, reading through the cache to the record store.
///
/// Pages are cached under the requested (pre-wrap) page number, so a
/// request for page 5 of a four-page list is cached separately from page 1
/// even though both hold the same items.
pub struct PagedNewsService {
    repository: Arc<dyn NewsRepository>,
    cache: Arc<dyn Cache>,
    ttl: Duration,
    order: NewsOrder,
}

impl PagedNewsService {
    /// Creates a service using the default paging order (sort, then id).
    pub fn new(repository: Arc<dyn NewsRepository>, cache: Arc<dyn Cache>, ttl: Duration) -> Self {
        Self {
            repository,
            cache,
            ttl,
            order: NewsOrder::default(),
        }
    }

    /// Returns one page of news.
    ///
    /// Negative pages are treated as `0` and page sizes below `1` as `1`.
    /// Pages past the end wrap around. When the cache cannot be read an
    /// empty page is returned instead of an error; store failures are
    /// propagated.
    pub async fn get_page(&self, page: i64, page_size: i64) -> Result<PageResult> {
        let request = PageRequest::new(page, page_size);
        let cache_key = news_page_key(request.page, request.page_size);

        match self.cache.get(&cache_key).await {
            Ok(Some(bytes)) => match deserialize_page(&bytes) {
                Ok(cached) => {
                    tracing::trace!(key = %cache_key, "Cache hit for news page");
                    return Ok(cached);
                }
                Err(err) => {
                    tracing::warn!(key = %cache_key, error = %err, "Cached news page is unreadable");
                }
            },
            Ok(None) => {
                tracing::trace!(key = %cache_key, "Cache miss for news page");
            }
            Err(err) => {
                tracing::warn!(
                    key = %cache_key,
                    error = %err,
                    "Cache unavailable, serving empty news page"
                );
                return Ok(PageResult::empty(request.page_size));
            }
        }

        let total_count = self.repository.count().await?;
        let window = resolve_window(request, total_count);
        let records = self
            .repository
            .query(&self.order, window.offset, window.limit)
            .await?;
        let result = build_page(records, window, request.page_size, total_count);

        match serialize_page(&result) {
            Ok(bytes) => {
                if let Err(err) = self.cache.set(&cache_key, &bytes, Some(self.ttl)).await {
                    tracing::warn!(key = %cache_key, error = %err, "Failed to cache news page");
                }
            }
            Err(err) => {
                tracing::warn!(key = %cache_key, error = %err, "Failed to serialize news page");
            }
        }

        Ok(result)
    }

    /// Returns the number of records in the store, bypassing the cache.
    pub async fn total_count(&self) -> Result<u64> {
        self.repository.count().await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::num::NonZeroUsize;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use mynews_core::cache::CacheError;
    use mynews_core::news::NewsRecord;
    use mynews_core::storage::RepositoryError;

    use super::*;
    use crate::cache::MemoryCache;
    use crate::mock_data::demo_records;
    use crate::storage::InMemoryRepository;

    const TTL: Duration = Duration::from_secs(3600);

    /// Wraps the in-memory store and counts calls.
    struct CountingRepository {
        inner: InMemoryRepository,
        counts: AtomicUsize,
        queries: AtomicUsize,
    }

    impl CountingRepository {
        fn new(records: Vec<NewsRecord>) -> Self {
            Self {
                inner: InMemoryRepository::with_records(records),
                counts: AtomicUsize::new(0),
                queries: AtomicUsize::new(0),
            }
        }

        fn queries(&self) -> usize {
            self.queries.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl NewsRepository for CountingRepository {
        async fn count(&self) -> Result<u64> {
            self.counts.fetch_add(1, Ordering::SeqCst);
            self.inner.count().await
        }

        async fn query(
            &self,
            order: &NewsOrder,
            offset: u64,
            limit: u64,
        ) -> Result<Vec<NewsRecord>> {
            self.queries.fetch_add(1, Ordering::SeqCst);
            self.inner.query(order, offset, limit).await
        }
    }

    struct FailingRepository;

    #[async_trait]
    impl NewsRepository for FailingRepository {
        async fn count(&self) -> Result<u64> {
            Err(RepositoryError::NotProvisioned("table news is missing".to_string()))
        }

        async fn query(&self, _: &NewsOrder, _: u64, _: u64) -> Result<Vec<NewsRecord>> {
            Err(RepositoryError::NotProvisioned("table news is missing".to_string()))
        }
    }

    /// A cache whose reads and writes can fail independently.
    #[derive(Default)]
    struct FlakyCache {
        fail_get: bool,
        fail_set: bool,
        inner: Option<MemoryCache>,
    }

    #[async_trait]
    impl Cache for FlakyCache {
        async fn get(&self, key: &str) -> mynews_core::cache::Result<Option<Vec<u8>>> {
            if self.fail_get {
                return Err(CacheError::ConnectionFailed("connection refused".to_string()));
            }
            match &self.inner {
                Some(cache) => cache.get(key).await,
                None => Ok(None),
            }
        }

        async fn set(
            &self,
            key: &str,
            value: &[u8],
            ttl: Option<Duration>,
        ) -> mynews_core::cache::Result<()> {
            if self.fail_set {
                return Err(CacheError::OperationFailed("read only replica".to_string()));
            }
            match &self.inner {
                Some(cache) => cache.set(key, value, ttl).await,
                None => Ok(()),
            }
        }
    }

    fn memory_cache() -> Arc<MemoryCache> {
        Arc::new(MemoryCache::new(NonZeroUsize::new(100).unwrap()))
    }

    fn service_with(
        repository: Arc<dyn NewsRepository>,
        cache: Arc<dyn Cache>,
        ttl: Duration,
    ) -> PagedNewsService {
        PagedNewsService::new(repository, cache, ttl)
    }

    fn demo_service(count: usize) -> (PagedNewsService, Arc<CountingRepository>) {
        let repository = Arc::new(CountingRepository::new(demo_records(count)));
        let service = service_with(repository.clone(), memory_cache(), TTL);
        (service, repository)
    }

    fn ids(page: &PageResult) -> Vec<i64> {
        page.items.iter().map(|item| item.id).collect()
    }

    #[tokio::test]
    async fn test_first_page() {
        let (service, _) = demo_service(8);

        let page = service.get_page(0, 2).await.unwrap();

        assert_eq!(ids(&page), vec![1, 2]);
        assert_eq!(page.page, 0);
        assert_eq!(page.page_count, 4);
        assert_eq!(page.page_size, 2);
        assert_eq!(page.total_count, 8);
    }

    #[tokio::test]
    async fn test_last_page() {
        let (service, _) = demo_service(8);

        let page = service.get_page(3, 2).await.unwrap();

        assert_eq!(ids(&page), vec![7, 8]);
        assert_eq!(page.page, 3);
    }

    #[tokio::test]
    async fn test_page_past_end_wraps() {
        let (service, _) = demo_service(8);

        let page = service.get_page(5, 2).await.unwrap();

        assert_eq!(ids(&page), vec![3, 4]);
        assert_eq!(page.page, 1);
        assert_eq!(page.page_count, 4);
    }

    #[tokio::test]
    async fn test_negative_page_and_size_are_clamped() {
        let (service, _) = demo_service(8);

        let page = service.get_page(-3, 0).await.unwrap();

        assert_eq!(ids(&page), vec![1]);
        assert_eq!(page.page, 0);
        assert_eq!(page.page_size, 1);
        assert_eq!(page.page_count, 8);
    }

    #[tokio::test]
    async fn test_partial_last_page() {
        let (service, _) = demo_service(7);

        let page = service.get_page(3, 2).await.unwrap();

        assert_eq!(ids(&page), vec![7]);
        assert_eq!(page.page_count, 4);
    }

    #[tokio::test]
    async fn test_empty_store() {
        let (service, _) = demo_service(0);

        let page = service.get_page(7, 3).await.unwrap();

        assert!(page.items.is_empty());
        assert_eq!(page.page, 0);
        assert_eq!(page.page_count, 1);
        assert_eq!(page.page_size, 3);
        assert_eq!(page.total_count, 0);
    }

    #[tokio::test]
    async fn test_pages_repeat_every_page_count() {
        let (service, _) = demo_service(8);

        for p in 0..4 {
            let base = service.get_page(p, 2).await.unwrap();
            for k in 1..3 {
                let shifted = service.get_page(p + k * 4, 2).await.unwrap();
                assert_eq!(shifted.items, base.items);
                assert_eq!(shifted.page, base.page);
            }
        }
    }

    #[tokio::test]
    async fn test_pages_cover_every_record_once() {
        let (service, _) = demo_service(8);
        let mut seen = HashSet::new();

        for p in 0..3 {
            for id in ids(&service.get_page(p, 3).await.unwrap()) {
                assert!(seen.insert(id), "duplicate id {id}");
            }
        }

        assert_eq!(seen.len(), 8);
    }

    #[tokio::test]
    async fn test_orders_by_sort_then_id() {
        let records = vec![
            NewsRecord::new(1, "a", "a").with_sort(20),
            NewsRecord::new(2, "b", "b").with_sort(10),
            NewsRecord::new(3, "c", "c").with_sort(10),
            NewsRecord::new(4, "d", "d"),
        ];
        let service = service_with(
            Arc::new(InMemoryRepository::with_records(records)),
            memory_cache(),
            TTL,
        );

        let page = service.get_page(0, 10).await.unwrap();

        assert_eq!(ids(&page), vec![4, 2, 3, 1]);
    }

    #[tokio::test]
    async fn test_repeated_calls_are_idempotent() {
        let (service, _) = demo_service(8);

        let first = service.get_page(2, 2).await.unwrap();
        let second = service.get_page(2, 2).await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_cache_hit_skips_store() {
        let (service, repository) = demo_service(8);

        service.get_page(1, 2).await.unwrap();
        service.get_page(1, 2).await.unwrap();

        assert_eq!(repository.queries(), 1);
        assert_eq!(repository.counts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_wrapped_request_is_cached_separately() {
        let (service, repository) = demo_service(8);

        service.get_page(1, 2).await.unwrap();
        service.get_page(5, 2).await.unwrap();

        assert_eq!(repository.queries(), 2);
    }

    #[tokio::test]
    async fn test_expired_entry_requeries_store() {
        let repository = Arc::new(CountingRepository::new(demo_records(8)));
        let service = service_with(
            repository.clone(),
            memory_cache(),
            Duration::from_millis(50),
        );

        service.get_page(0, 2).await.unwrap();
        tokio::time::sleep(Duration::from_millis(100)).await;
        service.get_page(0, 2).await.unwrap();

        assert_eq!(repository.queries(), 2);
    }

    #[tokio::test]
    async fn test_unreadable_cache_entry_is_a_miss() {
        let repository = Arc::new(CountingRepository::new(demo_records(8)));
        let cache = memory_cache();
        cache
            .set(&news_page_key(0, 2), b"not json", None)
            .await
            .unwrap();
        let service = service_with(repository.clone(), cache, TTL);

        let page = service.get_page(0, 2).await.unwrap();

        assert_eq!(ids(&page), vec![1, 2]);
        assert_eq!(repository.queries(), 1);
    }

    #[tokio::test]
    async fn test_cache_read_failure_serves_empty_page() {
        let repository = Arc::new(CountingRepository::new(demo_records(8)));
        let cache = Arc::new(FlakyCache {
            fail_get: true,
            ..Default::default()
        });
        let service = service_with(repository.clone(), cache, TTL);

        let page = service.get_page(2, 0).await.unwrap();

        assert_eq!(page, PageResult::empty(1));
        assert_eq!(repository.queries(), 0);
    }

    #[tokio::test]
    async fn test_cache_write_failure_serves_fresh_page() {
        let cache = Arc::new(FlakyCache {
            fail_set: true,
            inner: Some(MemoryCache::new(NonZeroUsize::new(10).unwrap())),
            ..Default::default()
        });
        let repository = Arc::new(CountingRepository::new(demo_records(8)));
        let service = service_with(repository.clone(), cache, TTL);

        let page = service.get_page(1, 2).await.unwrap();
        service.get_page(1, 2).await.unwrap();

        assert_eq!(ids(&page), vec![3, 4]);
        assert_eq!(repository.queries(), 2);
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let service = service_with(Arc::new(FailingRepository), memory_cache(), TTL);

        let result = service.get_page(0, 2).await;

        assert!(matches!(result, Err(RepositoryError::NotProvisioned(_))));
    }

    #[tokio::test]
    async fn test_total_count() {
        let (service, _) = demo_service(5);
        assert_eq!(service.total_count().await.unwrap(), 5);

        let failing = service_with(Arc::new(FailingRepository), memory_cache(), TTL);
        assert!(failing.total_count().await.is_err());
    }
}
