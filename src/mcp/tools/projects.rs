//! MCP tools for Project management.

use rmcp::{
    ErrorData as McpError,
    handler::server::wrapper::Parameters,
    model::*,
    schemars,
    schemars::JsonSchema,
    tool, tool_router,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::{json_result, map_db_error, require_non_empty};
use crate::db::{Database, ProjectRepository, ProjectUpdate};
use crate::mcp::McpServer;

// =============================================================================
// Parameter Structs
// =============================================================================

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateProjectParams {
    #[schemars(description = "Project name")]
    pub name: String,
    #[schemars(description = "Project description (optional, defaults to empty)")]
    pub description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetProjectParams {
    #[schemars(description = "Project ID")]
    pub project_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateProjectParams {
    #[schemars(description = "Project ID to update")]
    pub project_id: String,
    #[schemars(description = "New project name (optional)")]
    pub name: Option<String>,
    #[schemars(description = "New project description (optional)")]
    pub description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DeleteProjectParams {
    #[schemars(description = "Project ID to delete")]
    pub project_id: String,
}

// =============================================================================
// Project Tools
// =============================================================================

#[tool_router(router = project_router, vis = "pub(crate)")]
impl<D: Database + 'static> McpServer<D> {
    #[tool(description = "Create a new project. Returns the project with its generated id.")]
    pub async fn create_project(
        &self,
        Parameters(params): Parameters<CreateProjectParams>,
    ) -> Result<CallToolResult, McpError> {
        require_non_empty("name", &params.name)?;

        let project = self
            .db
            .projects()
            .create(&params.name, params.description.as_deref())
            .await
            .map_err(map_db_error)?;

        info!(project_id = %project.id, "Project created");
        json_result(&project)
    }

    #[tool(description = "List all projects in creation order.")]
    pub async fn list_projects(&self) -> Result<CallToolResult, McpError> {
        let projects = self.db.projects().list().await.map_err(map_db_error)?;
        json_result(&projects)
    }

    #[tool(description = "Get a project by ID together with all of its todos.")]
    pub async fn get_project(
        &self,
        Parameters(params): Parameters<GetProjectParams>,
    ) -> Result<CallToolResult, McpError> {
        let project = self
            .db
            .projects()
            .get(&params.project_id)
            .await
            .map_err(map_db_error)?;

        json_result(&project)
    }

    #[tool(description = "Update a project's name or description. Omitted fields are unchanged.")]
    pub async fn update_project(
        &self,
        Parameters(params): Parameters<UpdateProjectParams>,
    ) -> Result<CallToolResult, McpError> {
        if let Some(name) = &params.name {
            require_non_empty("name", name)?;
        }

        let update = ProjectUpdate {
            name: params.name,
            description: params.description,
        };
        let project = self
            .db
            .projects()
            .update(&params.project_id, update)
            .await
            .map_err(map_db_error)?;

        json_result(&project)
    }

    #[tool(description = "Delete a project and all of its todos. This cannot be undone.")]
    pub async fn delete_project(
        &self,
        Parameters(params): Parameters<DeleteProjectParams>,
    ) -> Result<CallToolResult, McpError> {
        let deleted = self
            .db
            .projects()
            .delete(&params.project_id)
            .await
            .map_err(map_db_error)?;

        info!(project_id = %deleted.id, todos_deleted = deleted.todos_deleted, "Project deleted");
        Ok(CallToolResult::success(vec![Content::text(format!(
            "Project {} deleted successfully along with {} todo(s)",
            deleted.id, deleted.todos_deleted
        ))]))
    }
}
