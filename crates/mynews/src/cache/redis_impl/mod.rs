//! Redis cache backend implementation.
//!
//! Provides a shared cache for multi-instance deployments. Every instance
//! reads and writes the same page keys, so a page computed by one instance
//! is served by all of them until it expires.

mod cache;
mod error;

pub use cache::RedisCache;
