//! Tests for IdIndex.

use crate::db::kv::{IdIndex, KvStore, MemoryStore, keys};
use crate::db::DbError;

#[tokio::test]
async fn absent_index_reads_empty() {
    let store = MemoryStore::new();
    let index = IdIndex::projects(&store);

    assert_eq!(index.key(), keys::PROJECT_INDEX);
    assert!(index.read().await.unwrap().is_empty());
    assert!(store.is_empty(), "Reading must not create the key");
}

#[tokio::test]
async fn add_preserves_insertion_order() {
    let store = MemoryStore::new();
    let index = IdIndex::project_todos(&store, "p1");

    index.add("c").await.unwrap();
    index.add("a").await.unwrap();
    index.add("b").await.unwrap();

    assert_eq!(index.read().await.unwrap(), vec!["c", "a", "b"]);
    assert_eq!(
        store.get("project:p1:todos").await.unwrap().as_deref(),
        Some(r#"["c","a","b"]"#)
    );
}

#[tokio::test]
async fn add_ignores_duplicates() {
    let store = MemoryStore::new();
    let index = IdIndex::projects(&store);

    index.add("a").await.unwrap();
    index.add("a").await.unwrap();

    assert_eq!(index.read().await.unwrap(), vec!["a"]);
}

#[tokio::test]
async fn remove_filters_out_only_the_given_id() {
    let store = MemoryStore::new();
    let index = IdIndex::projects(&store);
    for id in ["a", "b", "c"] {
        index.add(id).await.unwrap();
    }

    assert!(index.remove("b").await.unwrap());
    assert!(!index.remove("b").await.unwrap());
    assert_eq!(index.read().await.unwrap(), vec!["a", "c"]);
}

#[tokio::test]
async fn clear_deletes_the_key() {
    let store = MemoryStore::new();
    let index = IdIndex::project_todos(&store, "p1");
    index.add("a").await.unwrap();

    index.clear().await.unwrap();

    assert!(store.is_empty());
    assert!(index.read().await.unwrap().is_empty());
}

#[tokio::test]
async fn indices_are_independent() {
    let store = MemoryStore::new();
    IdIndex::project_todos(&store, "p1").add("t1").await.unwrap();
    IdIndex::project_todos(&store, "p2").add("t2").await.unwrap();

    assert_eq!(
        IdIndex::project_todos(&store, "p1").read().await.unwrap(),
        vec!["t1"]
    );
    assert!(IdIndex::projects(&store).read().await.unwrap().is_empty());
}

#[tokio::test]
async fn corrupt_index_is_invalid_data() {
    let store = MemoryStore::new();
    store.put(keys::PROJECT_INDEX, "{not a list").await.unwrap();

    let err = IdIndex::projects(&store).read().await.unwrap_err();
    assert!(matches!(err, DbError::InvalidData { .. }));
}

#[tokio::test]
async fn stale_writer_loses_concurrent_append() {
    // Two read-modify-writes that interleave: the later write wins.
    let store = MemoryStore::new();
    let index = IdIndex::projects(&store);
    index.add("a").await.unwrap();

    let mut stale = index.read().await.unwrap();
    index.add("b").await.unwrap();
    stale.push("c".to_string());
    store
        .put(keys::PROJECT_INDEX, &serde_json::to_string(&stale).unwrap())
        .await
        .unwrap();

    assert_eq!(index.read().await.unwrap(), vec!["a", "c"]);
}
