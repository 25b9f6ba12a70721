//! Key-value TodoRepository implementation.

use tracing::{debug, instrument, warn};

use super::{IdIndex, KvProjectRepository, KvStore, get_json, keys, put_json};
use crate::db::utils::{current_timestamp, generate_entity_id};
use crate::db::{
    DbError, DbResult, NewTodo, ProjectRepository, Todo, TodoDeleted, TodoRepository, TodoStatus,
    TodoUpdate,
};

/// Todo repository over a key-value store.
pub struct KvTodoRepository<'a, S> {
    store: &'a S,
}

impl<'a, S: KvStore> KvTodoRepository<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    async fn load(&self, id: &str) -> DbResult<Option<Todo>> {
        get_json(self.store, &keys::todo(id)).await
    }

    async fn load_existing(&self, id: &str) -> DbResult<Todo> {
        self.load(id)
            .await?
            .ok_or_else(|| DbError::not_found("Todo", id))
    }

    async fn require_project(&self, project_id: &str) -> DbResult<()> {
        if KvProjectRepository::new(self.store)
            .exists(project_id)
            .await?
        {
            Ok(())
        } else {
            Err(DbError::not_found("Project", project_id))
        }
    }

    /// Resolve a project's todo index into records, in index order.
    ///
    /// Does not check that the project exists; ids whose record is missing
    /// are skipped.
    pub(super) async fn resolve_index(
        &self,
        project_id: &str,
        status: Option<TodoStatus>,
    ) -> DbResult<Vec<Todo>> {
        let ids = IdIndex::project_todos(self.store, project_id)
            .read()
            .await?;

        let mut todos = Vec::with_capacity(ids.len());
        for id in &ids {
            match self.load(id).await? {
                Some(todo) => {
                    if status.is_none_or(|s| todo.status == s) {
                        todos.push(todo);
                    }
                }
                None => warn!(%project_id, todo_id = %id, "Skipping dangling todo index entry"),
            }
        }
        Ok(todos)
    }
}

impl<'a, S: KvStore> TodoRepository for KvTodoRepository<'a, S> {
    #[instrument(level = "debug", skip(self))]
    async fn create(&self, todo: NewTodo) -> DbResult<Todo> {
        self.require_project(&todo.project_id).await?;

        let now = current_timestamp();
        let todo = Todo {
            id: generate_entity_id(),
            project_id: todo.project_id,
            title: todo.title,
            status: TodoStatus::Pending,
            priority: todo.priority.unwrap_or_default(),
            description: todo.description.unwrap_or_default(),
            created_at: now.clone(),
            updated_at: now,
        };

        put_json(self.store, &keys::todo(&todo.id), &todo).await?;
        IdIndex::project_todos(self.store, &todo.project_id)
            .add(&todo.id)
            .await?;

        debug!(todo_id = %todo.id, project_id = %todo.project_id, "Created todo");
        Ok(todo)
    }

    async fn get(&self, id: &str) -> DbResult<Todo> {
        self.load_existing(id).await
    }

    #[instrument(level = "debug", skip(self))]
    async fn update(&self, id: &str, update: TodoUpdate) -> DbResult<Todo> {
        let mut todo = self.load_existing(id).await?;

        if let Some(title) = update.title {
            todo.title = title;
        }
        if let Some(description) = update.description {
            todo.description = description;
        }
        if let Some(status) = update.status {
            todo.status = status;
        }
        if let Some(priority) = update.priority {
            todo.priority = priority;
        }
        todo.updated_at = current_timestamp();

        put_json(self.store, &keys::todo(id), &todo).await?;
        Ok(todo)
    }

    #[instrument(level = "debug", skip(self))]
    async fn delete(&self, id: &str) -> DbResult<TodoDeleted> {
        let todo = self.load_existing(id).await?;

        // Un-index before deleting: an interrupted delete leaves an orphan
        // record rather than a dangling index entry.
        IdIndex::project_todos(self.store, &todo.project_id)
            .remove(id)
            .await?;
        self.store.delete(&keys::todo(id)).await?;

        debug!(todo_id = %id, project_id = %todo.project_id, "Deleted todo");
        Ok(TodoDeleted {
            id: todo.id,
            project_id: todo.project_id,
        })
    }

    async fn list_by_project(
        &self,
        project_id: &str,
        status: Option<TodoStatus>,
    ) -> DbResult<Vec<Todo>> {
        self.require_project(project_id).await?;
        self.resolve_index(project_id, status).await
    }
}
