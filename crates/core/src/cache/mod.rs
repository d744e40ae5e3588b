mod error;
mod keys;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use keys::{news_page_key, NEWS_PAGE_PREFIX};
pub use serialization::{deserialize_page, serialize_page, SerializationError};
pub use traits::Cache;
