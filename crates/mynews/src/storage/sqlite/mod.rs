//! SQLite storage backend implementation.
//!
//! Uses `rusqlite` for synchronous operations and `tokio-rusqlite` for
//! async wrapping. The read path expects a provisioned database; see
//! [`SqliteRepository::provision`].

mod conversions;
mod error;
mod repository;
mod schema;

pub use repository::SqliteRepository;
