use std::{env, num::NonZeroUsize, str::FromStr, time::Duration};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Cache TTL in seconds (default: 3600)
    pub cache_ttl_seconds: u64,
    /// Maximum number of cache entries (default: 10,000)
    pub cache_max_entries: NonZeroUsize,
    /// Page size used by the news page and when `perPage` is omitted (default: 2)
    pub default_page_size: i64,
    /// Upper bound the endpoint applies to `perPage` (default: 100)
    pub max_page_size: i64,
    /// Number of demo records loaded into the in-memory store (default: 8)
    pub demo_item_count: usize,
    /// Path to SQLite database file (default: "mynews.db")
    #[cfg_attr(not(feature = "sqlite"), allow(dead_code))]
    pub sqlite_path: String,
    /// Redis connection URL (default: "redis://localhost:6379")
    #[cfg_attr(not(feature = "redis"), allow(dead_code))]
    pub redis_url: String,
    /// Fixed anti-forgery token. A random one is generated when unset.
    pub csrf_token: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CACHE_TTL_SECONDS` - Cache TTL in seconds (default: 3600)
    /// - `CACHE_MAX_ENTRIES` - Maximum cache entries (default: 10,000)
    /// - `NEWS_DEFAULT_PAGE_SIZE` - Default page size (default: 2)
    /// - `NEWS_MAX_PAGE_SIZE` - Maximum page size accepted by the API (default: 100)
    /// - `NEWS_DEMO_ITEMS` - Demo records for the in-memory store (default: 8)
    /// - `SQLITE_PATH` - SQLite database path (default: "mynews.db")
    /// - `REDIS_URL` - Redis connection URL (default: "redis://localhost:6379")
    /// - `CSRF_TOKEN` - Anti-forgery token shared by all instances (default: random)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let default_page_size = parse_var::<i64>(&lookup, "NEWS_DEFAULT_PAGE_SIZE")
            .filter(|v| *v >= 1)
            .unwrap_or(2);

        Self {
            cache_ttl_seconds: parse_var(&lookup, "CACHE_TTL_SECONDS").unwrap_or(3600),
            cache_max_entries: parse_var(&lookup, "CACHE_MAX_ENTRIES")
                .and_then(NonZeroUsize::new)
                .unwrap_or(DEFAULT_CACHE_MAX_ENTRIES),
            default_page_size,
            max_page_size: parse_var(&lookup, "NEWS_MAX_PAGE_SIZE")
                .unwrap_or(100)
                .max(default_page_size),
            demo_item_count: parse_var(&lookup, "NEWS_DEMO_ITEMS").unwrap_or(8),
            sqlite_path: lookup("SQLITE_PATH").unwrap_or_else(|| "mynews.db".to_string()),
            redis_url: lookup("REDIS_URL")
                .unwrap_or_else(|| "redis://localhost:6379".to_string()),
            csrf_token: lookup("CSRF_TOKEN").filter(|v| !v.is_empty()),
        }
    }

    /// Get cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|v| v.trim().parse().ok())
}

const DEFAULT_CACHE_MAX_ENTRIES: NonZeroUsize = match NonZeroUsize::new(10_000) {
    Some(n) => n,
    None => NonZeroUsize::MIN,
};

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
