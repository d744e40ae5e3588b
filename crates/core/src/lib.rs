//! Core types and pure functions for the mynews service.
//!
//! Everything in this crate is free of I/O. The collaborator traits
//! ([`storage::NewsRepository`] and [`cache::Cache`]) are defined here and
//! implemented by the `mynews` binary crate.

pub mod cache;
pub mod news;
pub mod storage;
