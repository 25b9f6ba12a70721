//! Failure-injecting store for exercising partial writes.

use std::collections::HashSet;
use std::sync::Mutex;

use super::{KvStore, MemoryStore};
use crate::db::{DbError, DbResult};

/// Wraps a [`MemoryStore`] and fails writes to chosen keys.
pub(crate) struct FlakyStore {
    inner: MemoryStore,
    failing_puts: Mutex<HashSet<String>>,
    failing_deletes: Mutex<HashSet<String>>,
}

impl FlakyStore {
    pub(crate) fn new(inner: MemoryStore) -> Self {
        Self {
            inner,
            failing_puts: Mutex::new(HashSet::new()),
            failing_deletes: Mutex::new(HashSet::new()),
        }
    }

    pub(crate) fn fail_put(&self, key: impl Into<String>) {
        self.failing_puts.lock().unwrap().insert(key.into());
    }

    pub(crate) fn fail_delete(&self, key: impl Into<String>) {
        self.failing_deletes.lock().unwrap().insert(key.into());
    }

    pub(crate) fn heal(&self) {
        self.failing_puts.lock().unwrap().clear();
        self.failing_deletes.lock().unwrap().clear();
    }

    fn injected(op: &str, key: &str) -> DbError {
        DbError::Database {
            message: format!("injected {} failure for '{}'", op, key),
        }
    }
}

impl KvStore for FlakyStore {
    async fn get(&self, key: &str) -> DbResult<Option<String>> {
        self.inner.get(key).await
    }

    async fn put(&self, key: &str, value: &str) -> DbResult<()> {
        let fail = self.failing_puts.lock().unwrap().contains(key);
        if fail {
            return Err(Self::injected("put", key));
        }
        self.inner.put(key, value).await
    }

    async fn delete(&self, key: &str) -> DbResult<()> {
        let fail = self.failing_deletes.lock().unwrap().contains(key);
        if fail {
            return Err(Self::injected("delete", key));
        }
        self.inner.delete(key).await
    }
}
