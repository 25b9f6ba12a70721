//! Key-value backed implementation of the repository traits.
//!
//! Entities live as JSON records in a flat string-keyed store. Enumeration
//! goes through secondary id indices (see [`index::IdIndex`]) that are kept
//! in sync by read-modify-write, since the store offers no multi-key
//! transactions and no compare-and-swap.
//!
//! Write ordering keeps the likely partial-failure states unreachable:
//! records are written before they are indexed, and un-indexed before they
//! are deleted. Readers skip index entries whose record is gone.

mod database;
pub mod index;
pub mod keys;
mod memory;
mod project;
mod sqlite;
mod todo;

#[cfg(test)]
mod index_test;
#[cfg(test)]
mod project_test;
#[cfg(test)]
pub(crate) mod testing;

use std::future::Future;

use serde::{Serialize, de::DeserializeOwned};

use crate::db::{DbError, DbResult};

pub use database::KvDatabase;
pub use index::IdIndex;
pub use memory::MemoryStore;
pub use project::KvProjectRepository;
pub use sqlite::SqliteStore;
pub use todo::KvTodoRepository;

/// A string-keyed, string-valued store with single-key operations only.
pub trait KvStore: Send + Sync {
    /// Read the value under `key`, `None` if absent.
    fn get(&self, key: &str) -> impl Future<Output = DbResult<Option<String>>> + Send;

    /// Write `value` under `key`, replacing any previous value.
    fn put(&self, key: &str, value: &str) -> impl Future<Output = DbResult<()>> + Send;

    /// Remove `key`. Removing an absent key is not an error.
    fn delete(&self, key: &str) -> impl Future<Output = DbResult<()>> + Send;

    /// Prepare the backend for use.
    fn migrate(&self) -> impl Future<Output = DbResult<()>> + Send {
        async { Ok(()) }
    }
}

/// Read and decode a JSON value.
pub(crate) async fn get_json<S, T>(store: &S, key: &str) -> DbResult<Option<T>>
where
    S: KvStore,
    T: DeserializeOwned,
{
    match store.get(key).await? {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| DbError::corrupt(key, e)),
        None => Ok(None),
    }
}

/// Encode and write a JSON value.
pub(crate) async fn put_json<S, T>(store: &S, key: &str, value: &T) -> DbResult<()>
where
    S: KvStore,
    T: Serialize + Sync,
{
    let raw = serde_json::to_string(value).map_err(|e| DbError::InvalidData {
        message: format!("cannot encode value for key '{}': {}", key, e),
        help: "this is a bug in the record type".to_string(),
    })?;
    store.put(key, &raw).await
}
