//! Key-value ProjectRepository implementation.

use tracing::{debug, instrument, warn};

use super::{IdIndex, KvStore, KvTodoRepository, get_json, keys, put_json};
use crate::db::utils::{current_timestamp, generate_entity_id};
use crate::db::{
    DbError, DbResult, Project, ProjectDeleted, ProjectRepository, ProjectUpdate,
    ProjectWithTodos,
};

/// Project repository over a key-value store.
pub struct KvProjectRepository<'a, S> {
    store: &'a S,
}

impl<'a, S: KvStore> KvProjectRepository<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    async fn load(&self, id: &str) -> DbResult<Option<Project>> {
        if !keys::is_record_id(id) {
            return Ok(None);
        }
        get_json(self.store, &keys::project(id)).await
    }

    async fn load_existing(&self, id: &str) -> DbResult<Project> {
        self.load(id)
            .await?
            .ok_or_else(|| DbError::not_found("Project", id))
    }

    fn todos(&self) -> KvTodoRepository<'a, S> {
        KvTodoRepository::new(self.store)
    }
}

impl<'a, S: KvStore> ProjectRepository for KvProjectRepository<'a, S> {
    #[instrument(level = "debug", skip(self))]
    async fn create(&self, name: &str, description: Option<&str>) -> DbResult<Project> {
        let now = current_timestamp();
        let project = Project {
            id: generate_entity_id(),
            name: name.to_string(),
            description: description.unwrap_or_default().to_string(),
            created_at: now.clone(),
            updated_at: now,
        };

        // Record first: a failed index write leaves an unreachable orphan,
        // never an index entry pointing at nothing.
        put_json(self.store, &keys::project(&project.id), &project).await?;
        IdIndex::projects(self.store).add(&project.id).await?;

        debug!(project_id = %project.id, "Created project");
        Ok(project)
    }

    async fn get(&self, id: &str) -> DbResult<ProjectWithTodos> {
        let project = self.load_existing(id).await?;
        let todos = self.todos().resolve_index(id, None).await?;
        Ok(ProjectWithTodos { project, todos })
    }

    async fn exists(&self, id: &str) -> DbResult<bool> {
        Ok(self.load(id).await?.is_some())
    }

    async fn list(&self) -> DbResult<Vec<Project>> {
        let ids = IdIndex::projects(self.store).read().await?;

        let mut projects = Vec::with_capacity(ids.len());
        for id in &ids {
            match self.load(id).await? {
                Some(project) => projects.push(project),
                None => warn!(project_id = %id, "Skipping dangling project index entry"),
            }
        }
        Ok(projects)
    }

    #[instrument(level = "debug", skip(self))]
    async fn update(&self, id: &str, update: ProjectUpdate) -> DbResult<Project> {
        let mut project = self.load_existing(id).await?;

        if let Some(name) = update.name {
            project.name = name;
        }
        if let Some(description) = update.description {
            project.description = description;
        }
        project.updated_at = current_timestamp();

        put_json(self.store, &keys::project(id), &project).await?;
        Ok(project)
    }

    #[instrument(level = "debug", skip(self))]
    async fn delete(&self, id: &str) -> DbResult<ProjectDeleted> {
        self.load_existing(id).await?;

        // Children go first so an interrupted delete never leaves a live
        // project whose todos point nowhere.
        let todos = self.todos().resolve_index(id, None).await?;
        for todo in &todos {
            self.store.delete(&keys::todo(&todo.id)).await?;
        }
        IdIndex::project_todos(self.store, id).clear().await?;

        self.store.delete(&keys::project(id)).await?;
        IdIndex::projects(self.store).remove(id).await?;

        debug!(project_id = %id, todos_deleted = todos.len(), "Deleted project");
        Ok(ProjectDeleted {
            id: id.to_string(),
            todos_deleted: todos.len(),
        })
    }
}
