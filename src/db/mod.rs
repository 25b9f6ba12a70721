//! Database abstraction layer.
//!
//! Trait-based abstractions for data access so the tool layer never sees
//! the storage backend.
//!
//! # Architecture
//!
//! - `error`: Storage-agnostic error types
//! - `models`: Domain entities (Project, Todo)
//! - `repository`: Trait definitions for data access
//! - `kv`: Key-value store implementation with secondary id indices

mod error;
pub mod kv;
mod models;
mod repository;
pub mod utils;


pub use error::{DbError, DbResult};
pub use kv::{KvDatabase, KvStore, MemoryStore, SqliteStore};
pub use models::*;
pub use repository::*;
