//! Repository traits for data access abstraction.
//!
//! These traits define the contract for data access, allowing different
//! storage backends to be swapped without changing the tool layer. Every
//! method returns a `Send` future so tool handlers stay `Send` when they are
//! generic over `D: Database`.

use std::future::Future;

use crate::db::{
    DbResult,
    models::{
        NewTodo, Project, ProjectDeleted, ProjectUpdate, ProjectWithTodos, Todo, TodoDeleted,
        TodoStatus, TodoUpdate,
    },
};

/// Repository for Project operations.
pub trait ProjectRepository {
    /// Create a new project and append it to the project index.
    fn create(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> impl Future<Output = DbResult<Project>> + Send;

    /// Get a project by ID together with its todos.
    fn get(&self, id: &str) -> impl Future<Output = DbResult<ProjectWithTodos>> + Send;

    /// Whether a project record exists.
    fn exists(&self, id: &str) -> impl Future<Output = DbResult<bool>> + Send;

    /// Get all projects in index order, skipping dangling entries.
    fn list(&self) -> impl Future<Output = DbResult<Vec<Project>>> + Send;

    /// Apply a partial update and bump `updated_at`.
    fn update(
        &self,
        id: &str,
        update: ProjectUpdate,
    ) -> impl Future<Output = DbResult<Project>> + Send;

    /// Delete a project and all of its todos.
    fn delete(&self, id: &str) -> impl Future<Output = DbResult<ProjectDeleted>> + Send;
}

/// Repository for Todo operations.
pub trait TodoRepository {
    /// Create a todo under an existing project.
    fn create(&self, todo: NewTodo) -> impl Future<Output = DbResult<Todo>> + Send;

    /// Get a todo by ID.
    fn get(&self, id: &str) -> impl Future<Output = DbResult<Todo>> + Send;

    /// Apply a partial update and bump `updated_at`.
    fn update(&self, id: &str, update: TodoUpdate)
    -> impl Future<Output = DbResult<Todo>> + Send;

    /// Delete a todo and drop it from its project's index.
    fn delete(&self, id: &str) -> impl Future<Output = DbResult<TodoDeleted>> + Send;

    /// List a project's todos in index order, optionally filtered by status.
    fn list_by_project(
        &self,
        project_id: &str,
        status: Option<TodoStatus>,
    ) -> impl Future<Output = DbResult<Vec<Todo>>> + Send;
}

/// Combined database interface.
///
/// Repositories are handed out through associated types, avoiding dynamic
/// dispatch.
pub trait Database: Send + Sync {
    type Projects<'a>: ProjectRepository + Send + 'a
    where
        Self: 'a;
    type Todos<'a>: TodoRepository + Send + 'a
    where
        Self: 'a;

    /// Prepare the backing store (create tables and so on).
    fn migrate(&self) -> impl Future<Output = DbResult<()>> + Send;

    /// Get the project repository.
    fn projects(&self) -> Self::Projects<'_>;

    /// Get the todo repository.
    fn todos(&self) -> Self::Todos<'_>;
}
