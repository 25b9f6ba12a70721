//! MCP tools for Todo management.

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

use super::{json_result, map_db_error, parse_param, require_non_empty};
use crate::db::{Database, NewTodo, TodoPriority, TodoRepository, TodoStatus, TodoUpdate};
use crate::mcp::McpServer;

/// Status filter value that disables filtering.
const ALL_STATUSES: &str = "all";

// =============================================================================
// Parameter Structs
// =============================================================================

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateTodoParams {
    #[schemars(description = "Project ID this todo belongs to")]
    pub project_id: String,
    #[schemars(description = "Todo title (what needs to be done)")]
    pub title: String,
    #[schemars(description = "Todo description (optional)")]
    pub description: Option<String>,
    #[schemars(description = "Priority: 'low', 'medium' (default), 'high'")]
    pub priority: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetTodoParams {
    #[schemars(description = "Todo ID")]
    pub todo_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateTodoParams {
    #[schemars(description = "Todo ID to update")]
    pub todo_id: String,
    #[schemars(description = "New title (optional)")]
    pub title: Option<String>,
    #[schemars(description = "New description (optional)")]
    pub description: Option<String>,
    #[schemars(description = "Status: 'pending', 'in_progress', 'completed' (optional)")]
    pub status: Option<String>,
    #[schemars(description = "Priority: 'low', 'medium', 'high' (optional)")]
    pub priority: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DeleteTodoParams {
    #[schemars(description = "Todo ID to delete")]
    pub todo_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ListTodosParams {
    #[schemars(description = "Project ID to list todos from")]
    pub project_id: String,
    #[schemars(
        description = "Filter by status: 'pending', 'in_progress', 'completed', or 'all' (default)"
    )]
    pub status: Option<String>,
}

/// Parse the list filter; `all` or an omitted value means no filtering.
fn parse_status_filter(status: Option<&str>) -> Result<Option<TodoStatus>, McpError> {
    match status {
        None | Some(ALL_STATUSES) => Ok(None),
        Some(s) => parse_param("invalid_status", s).map(Some),
    }
}

// =============================================================================
// Todo Tools
// =============================================================================

#[tool_router(router = todo_router, vis = "pub(crate)")]
impl<D: Database + 'static> McpServer<D> {
    #[tool(
        description = "Create a new todo in a project. Status starts as 'pending'; priority defaults to 'medium'."
    )]
    pub async fn create_todo(
        &self,
        Parameters(params): Parameters<CreateTodoParams>,
    ) -> Result<CallToolResult, McpError> {
        require_non_empty("title", &params.title)?;
        let priority = params
            .priority
            .as_deref()
            .map(|p| parse_param::<TodoPriority>("invalid_priority", p))
            .transpose()?;

        let todo = self
            .db
            .todos()
            .create(NewTodo {
                project_id: params.project_id,
                title: params.title,
                description: params.description,
                priority,
            })
            .await
            .map_err(map_db_error)?;

        info!(todo_id = %todo.id, project_id = %todo.project_id, "Todo created");
        json_result(&todo)
    }

    #[tool(description = "Get a todo by ID.")]
    pub async fn get_todo(
        &self,
        Parameters(params): Parameters<GetTodoParams>,
    ) -> Result<CallToolResult, McpError> {
        let todo = self
            .db
            .todos()
            .get(&params.todo_id)
            .await
            .map_err(map_db_error)?;

        json_result(&todo)
    }

    #[tool(
        description = "Update a todo's title, description, status or priority. Only the fields provided are changed."
    )]
    pub async fn update_todo(
        &self,
        Parameters(params): Parameters<UpdateTodoParams>,
    ) -> Result<CallToolResult, McpError> {
        if let Some(title) = &params.title {
            require_non_empty("title", title)?;
        }
        let status = params
            .status
            .as_deref()
            .map(|s| parse_param::<TodoStatus>("invalid_status", s))
            .transpose()?;
        let priority = params
            .priority
            .as_deref()
            .map(|p| parse_param::<TodoPriority>("invalid_priority", p))
            .transpose()?;

        let update = TodoUpdate {
            title: params.title,
            description: params.description,
            status,
            priority,
        };
        let todo = self
            .db
            .todos()
            .update(&params.todo_id, update)
            .await
            .map_err(map_db_error)?;

        json_result(&todo)
    }

    #[tool(description = "Delete a todo permanently.")]
    pub async fn delete_todo(
        &self,
        Parameters(params): Parameters<DeleteTodoParams>,
    ) -> Result<CallToolResult, McpError> {
        let deleted = self
            .db
            .todos()
            .delete(&params.todo_id)
            .await
            .map_err(map_db_error)?;

        info!(todo_id = %deleted.id, "Todo deleted");
        Ok(CallToolResult::success(vec![Content::text(format!(
            "Todo {} deleted successfully",
            deleted.id
        ))]))
    }

    #[tool(description = "List the todos of a project in creation order, optionally filtered by status.")]
    pub async fn list_todos(
        &self,
        Parameters(params): Parameters<ListTodosParams>,
    ) -> Result<CallToolResult, McpError> {
        let status = parse_status_filter(params.status.as_deref())?;

        let todos = self
            .db
            .todos()
            .list_by_project(&params.project_id, status)
            .await
            .map_err(map_db_error)?;

        json_result(&todos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_filter_all_and_none_disable_filtering() {
        assert_eq!(parse_status_filter(None).unwrap(), None);
        assert_eq!(parse_status_filter(Some("all")).unwrap(), None);
        assert_eq!(
            parse_status_filter(Some("completed")).unwrap(),
            Some(TodoStatus::Completed)
        );
        assert!(parse_status_filter(Some("done")).is_err());
    }
}
