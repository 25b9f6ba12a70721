//! Tests for KvProjectRepository.

use crate::db::kv::keys;
use crate::db::{
    Database, DbError, KvDatabase, KvStore, MemoryStore, NewTodo, ProjectRepository,
    ProjectUpdate, TodoRepository,
};

fn setup_db() -> KvDatabase<MemoryStore> {
    KvDatabase::in_memory()
}

fn new_todo(project_id: &str, title: &str) -> NewTodo {
    NewTodo {
        project_id: project_id.to_string(),
        title: title.to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn create_and_get_project() {
    let db = setup_db();
    let repo = db.projects();

    let created = repo
        .create("Launch", Some("Ship it"))
        .await
        .expect("Create should succeed");

    assert!(!created.id.is_empty());
    assert_eq!(created.name, "Launch");
    assert_eq!(created.description, "Ship it");
    assert_eq!(created.created_at, created.updated_at);

    let retrieved = repo.get(&created.id).await.expect("Get should succeed");
    assert_eq!(retrieved.project, created);
    assert!(retrieved.todos.is_empty());
}

#[tokio::test]
async fn create_defaults_description_to_empty() {
    let db = setup_db();
    let created = db.projects().create("Launch", None).await.unwrap();
    assert_eq!(created.description, "");
}

#[tokio::test]
async fn create_writes_record_and_index() {
    let db = setup_db();
    let created = db.projects().create("Launch", None).await.unwrap();

    let store = db.store();
    assert!(store.get(&keys::project(&created.id)).await.unwrap().is_some());
    assert_eq!(
        store.get(keys::PROJECT_INDEX).await.unwrap(),
        Some(format!(r#"["{}"]"#, created.id))
    );
}

#[tokio::test]
async fn get_nonexistent_project_returns_not_found() {
    let db = setup_db();

    let err = db.projects().get("nonexistent").await.unwrap_err();
    match err {
        DbError::NotFound { entity_type, id } => {
            assert_eq!(entity_type, "Project");
            assert_eq!(id, "nonexistent");
        }
        other => panic!("Expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn get_includes_todos_in_creation_order() {
    let db = setup_db();
    let project = db.projects().create("P", None).await.unwrap();
    let t1 = db.todos().create(new_todo(&project.id, "T1")).await.unwrap();
    let t2 = db.todos().create(new_todo(&project.id, "T2")).await.unwrap();

    let result = db.projects().get(&project.id).await.unwrap();
    assert_eq!(result.todos, vec![t1, t2]);
}

#[tokio::test]
async fn list_projects_in_insertion_order() {
    let db = setup_db();
    let repo = db.projects();
    assert!(repo.list().await.unwrap().is_empty());

    let a = repo.create("A", None).await.unwrap();
    let b = repo.create("B", None).await.unwrap();
    let c = repo.create("C", None).await.unwrap();

    let names: Vec<String> = repo.list().await.unwrap().into_iter().map(|p| p.name).collect();
    assert_eq!(names, vec!["A", "B", "C"]);

    repo.delete(&b.id).await.unwrap();
    let ids: Vec<String> = repo.list().await.unwrap().into_iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![a.id, c.id]);
}

#[tokio::test]
async fn exists_reflects_record_presence() {
    let db = setup_db();
    let project = db.projects().create("P", None).await.unwrap();

    assert!(db.projects().exists(&project.id).await.unwrap());
    assert!(!db.projects().exists("missing").await.unwrap());
}

#[tokio::test]
async fn update_project_applies_only_given_fields() {
    let db = setup_db();
    let created = db.projects().create("Original", Some("Desc")).await.unwrap();

    let updated = db
        .projects()
        .update(
            &created.id,
            ProjectUpdate {
                name: Some("Renamed".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.description, "Desc");
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);

    let stored = db.projects().get(&created.id).await.unwrap().project;
    assert_eq!(stored, updated);
}

#[tokio::test]
async fn update_nonexistent_project_returns_not_found() {
    let db = setup_db();
    let err = db
        .projects()
        .update("missing", ProjectUpdate::default())
        .await
        .unwrap_err();
    assert!(matches!(err, DbError::NotFound { .. }));
}

#[tokio::test]
async fn delete_project_cascades_to_todos() {
    let db = setup_db();
    let project = db.projects().create("P", None).await.unwrap();
    let t1 = db.todos().create(new_todo(&project.id, "T1")).await.unwrap();
    let t2 = db.todos().create(new_todo(&project.id, "T2")).await.unwrap();

    let deleted = db.projects().delete(&project.id).await.unwrap();
    assert_eq!(deleted.id, project.id);
    assert_eq!(deleted.todos_deleted, 2);

    for id in [&t1.id, &t2.id] {
        let err = db.todos().get(id).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }
    assert!(db.projects().list().await.unwrap().is_empty());
    assert!(matches!(
        db.projects().get(&project.id).await,
        Err(DbError::NotFound { .. })
    ));
}

#[tokio::test]
async fn delete_project_leaves_no_keys_behind() {
    let db = setup_db();
    let project = db.projects().create("P", None).await.unwrap();
    db.todos().create(new_todo(&project.id, "T1")).await.unwrap();

    db.projects().delete(&project.id).await.unwrap();

    // Only the (now empty) global index remains.
    assert_eq!(db.store().keys(), vec![keys::PROJECT_INDEX.to_string()]);
    assert_eq!(
        db.store().get(keys::PROJECT_INDEX).await.unwrap().as_deref(),
        Some("[]")
    );
}

#[tokio::test]
async fn delete_project_leaves_other_projects_untouched() {
    let db = setup_db();
    let keep = db.projects().create("Keep", None).await.unwrap();
    let doomed = db.projects().create("Drop", None).await.unwrap();
    let kept_todo = db.todos().create(new_todo(&keep.id, "stays")).await.unwrap();
    db.todos().create(new_todo(&doomed.id, "goes")).await.unwrap();

    db.projects().delete(&doomed.id).await.unwrap();

    let remaining = db.projects().get(&keep.id).await.unwrap();
    assert_eq!(remaining.todos, vec![kept_todo]);
}

#[tokio::test]
async fn delete_nonexistent_project_returns_not_found() {
    let db = setup_db();
    let err = db.projects().delete("missing").await.unwrap_err();
    assert!(matches!(err, DbError::NotFound { ref id, .. } if id == "missing"));
}

#[tokio::test]
async fn index_key_ids_are_not_projects() {
    let db = setup_db();
    let project = db.projects().create("P", None).await.unwrap();
    let todo_index = format!("{}:todos", project.id);

    for id in ["list", todo_index.as_str()] {
        assert!(!db.projects().exists(id).await.unwrap());

        match db.projects().get(id).await.unwrap_err() {
            DbError::NotFound {
                entity_type,
                id: missing,
            } => {
                assert_eq!(entity_type, "Project");
                assert_eq!(missing, id);
            }
            other => panic!("Expected NotFound from get, got {:?}", other),
        }
        let err = db
            .projects()
            .update(id, ProjectUpdate::default())
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }), "got {:?}", err);
        let err = db.projects().delete(id).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }), "got {:?}", err);
    }

    // The global index survives a delete attempt against its own key.
    let ids: Vec<String> = db
        .projects()
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, vec![project.id]);
}
