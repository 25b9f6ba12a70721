//! Ordered id indices stored as JSON arrays.
//!
//! An index is a derived list of ids used for enumeration. Mutations are a
//! non-atomic read-modify-write against the store: concurrent writers to the
//! same index can lose each other's updates (last writer wins). Indices are
//! never cached; every call re-reads the stored value.

use tracing::debug;

use super::{KvStore, get_json, keys, put_json};
use crate::db::{DbResult, Id};

/// Handle on one ordered set of ids stored under a single key.
pub struct IdIndex<'a, S> {
    store: &'a S,
    key: String,
}

impl<'a, S: KvStore> IdIndex<'a, S> {
    pub fn new(store: &'a S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// The global index of all project ids.
    pub fn projects(store: &'a S) -> Self {
        Self::new(store, keys::PROJECT_INDEX)
    }

    /// The index of todo ids belonging to one project.
    pub fn project_todos(store: &'a S, project_id: &str) -> Self {
        Self::new(store, keys::project_todos(project_id))
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Current ids in insertion order. An absent key reads as empty.
    pub async fn read(&self) -> DbResult<Vec<Id>> {
        Ok(get_json::<S, Vec<Id>>(self.store, &self.key)
            .await?
            .unwrap_or_default())
    }

    /// Append `id` unless it is already present.
    pub async fn add(&self, id: &str) -> DbResult<()> {
        let mut ids = self.read().await?;
        if ids.iter().any(|existing| existing == id) {
            return Ok(());
        }
        ids.push(id.to_string());
        debug!(index = %self.key, %id, len = ids.len(), "Appending to index");
        put_json(self.store, &self.key, &ids).await
    }

    /// Remove `id`. Returns whether it was present; nothing is written
    /// when it was not.
    pub async fn remove(&self, id: &str) -> DbResult<bool> {
        let mut ids = self.read().await?;
        let before = ids.len();
        ids.retain(|existing| existing != id);
        if ids.len() == before {
            return Ok(false);
        }
        debug!(index = %self.key, %id, len = ids.len(), "Removing from index");
        put_json(self.store, &self.key, &ids).await?;
        Ok(true)
    }

    /// Drop the whole index.
    pub async fn clear(&self) -> DbResult<()> {
        self.store.delete(&self.key).await
    }
}
