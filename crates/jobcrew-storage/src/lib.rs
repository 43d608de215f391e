//! JobCrew Storage Layer
//!
//! Durable string storage that survives process restarts.
//! The session layer only ever sees the [`KeyValueStore`] trait.

mod database;
mod error;
mod migrations;
mod store;

pub use database::Database;
pub use error::StorageError;
pub use store::{keys, KeyValueStore, MemoryStore};

pub type Result<T> = std::result::Result<T, StorageError>;
