use std::sync::Arc;

use mynews_core::cache::Cache;
use mynews_core::storage::NewsRepository;

use crate::config::Config;
use crate::handlers::csrf::generate_token;
use crate::service::PagedNewsService;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub news: Arc<PagedNewsService>,
    /// Anti-forgery token expected on every page query.
    pub csrf_token: Arc<str>,
    pub default_page_size: i64,
    pub max_page_size: i64,
}

impl AppState {
    fn build(
        repository: Arc<dyn NewsRepository>,
        cache: Arc<dyn Cache>,
        config: &Config,
    ) -> Self {
        let csrf_token = config.csrf_token.clone().unwrap_or_else(generate_token);

        Self {
            news: Arc::new(PagedNewsService::new(repository, cache, config.cache_ttl())),
            csrf_token: csrf_token.into(),
            default_page_size: config.default_page_size,
            max_page_size: config.max_page_size,
        }
    }

    /// Creates the state with the storage and cache backends selected by
    /// cargo features.
    pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
        let repository = build_repository(config).await?;
        let cache = build_cache(config).await?;

        Ok(Self::build(repository, cache, config))
    }
}

#[cfg(feature = "inmemory")]
async fn build_repository(config: &Config) -> Result<Arc<dyn NewsRepository>, anyhow::Error> {
    use crate::mock_data::demo_records;
    use crate::storage::InMemoryRepository;

    tracing::info!(
        items = config.demo_item_count,
        "Using in-memory news store with demo data"
    );
    Ok(Arc::new(InMemoryRepository::with_records(demo_records(
        config.demo_item_count,
    ))))
}

#[cfg(feature = "sqlite")]
async fn build_repository(config: &Config) -> Result<Arc<dyn NewsRepository>, anyhow::Error> {
    use crate::storage::SqliteRepository;

    tracing::info!(path = %config.sqlite_path, "Using SQLite news store");
    Ok(Arc::new(SqliteRepository::open(&config.sqlite_path).await?))
}

#[cfg(feature = "memory")]
async fn build_cache(config: &Config) -> Result<Arc<dyn Cache>, anyhow::Error> {
    use crate::cache::MemoryCache;

    tracing::info!(
        max_entries = config.cache_max_entries.get(),
        "Using in-memory page cache"
    );
    Ok(Arc::new(MemoryCache::new(config.cache_max_entries)))
}

#[cfg(feature = "redis")]
async fn build_cache(config: &Config) -> Result<Arc<dyn Cache>, anyhow::Error> {
    use crate::cache::RedisCache;

    tracing::info!(url = %config.redis_url, "Using Redis page cache");
    Ok(Arc::new(RedisCache::new(&config.redis_url).await?))
}


#[cfg(test)]
pub use test_helpers::TEST_CSRF_TOKEN;
