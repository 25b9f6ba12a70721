//! Database implementation over any key-value store.

use super::{KvProjectRepository, KvStore, KvTodoRepository, MemoryStore};
use crate::db::{Database, DbResult};

/// Hands out repositories that share one store.
pub struct KvDatabase<S> {
    store: S,
}

impl<S: KvStore> KvDatabase<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Access the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

impl KvDatabase<MemoryStore> {
    /// Create a database backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }
}

impl<S: KvStore> Database for KvDatabase<S> {
    type Projects<'a>
        = KvProjectRepository<'a, S>
    where
        Self: 'a;
    type Todos<'a>
        = KvTodoRepository<'a, S>
    where
        Self: 'a;

    async fn migrate(&self) -> DbResult<()> {
        self.store.migrate().await
    }

    fn projects(&self) -> Self::Projects<'_> {
        KvProjectRepository::new(&self.store)
    }

    fn todos(&self) -> Self::Todos<'_> {
        KvTodoRepository::new(&self.store)
    }
}
