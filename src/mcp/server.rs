//! MCP server implementation

use std::sync::Arc;

use rmcp::{
    ServerHandler,
    handler::server::router::tool::ToolRouter,
    model::{Implementation, ServerCapabilities, ServerInfo},
    tool_handler,
};

use crate::db::Database;

const INSTRUCTIONS: &str = r#"Project Planner - track projects and their todos.

## Projects
- **create_project** - Create a project (name, optional description)
- **list_projects** - List all projects
- **get_project** - Get a project with all of its todos
- **update_project** - Rename or re-describe a project
- **delete_project** - Delete a project and all of its todos

## Todos
- **create_todo** - Add a todo to a project (priority: low | medium | high)
- **get_todo** - Get a todo by id
- **update_todo** - Change title, description, status or priority
- **delete_todo** - Delete a todo
- **list_todos** - List a project's todos, optionally by status
  (pending | in_progress | completed | all)
"#;

/// Project planner MCP server.
///
/// Generic over `D: Database` for zero-cost abstraction (no dynamic dispatch).
/// One instance is created per session; all instances share the database.
pub struct McpServer<D: Database> {
    pub(crate) db: Arc<D>,
    tool_router: ToolRouter<Self>,
}

// Clones share the database; `D` itself need not be Clone.
impl<D: Database> Clone for McpServer<D> {
    fn clone(&self) -> Self {
        Self {
            db: Arc::clone(&self.db),
            tool_router: self.tool_router.clone(),
        }
    }
}

impl<D: Database + 'static> McpServer<D> {
    /// Create a new MCP server over the given database.
    pub fn new(db: Arc<D>) -> Self {
        Self {
            db,
            tool_router: Self::project_router() + Self::todo_router(),
        }
    }

    /// Get the combined tool router.
    pub fn router(&self) -> &ToolRouter<Self> {
        &self.tool_router
    }
}

#[tool_handler(router = self.tool_router)]
impl<D: Database + 'static> ServerHandler for McpServer<D> {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build())
            .with_server_info(Implementation::from_build_env())
            .with_instructions(INSTRUCTIONS.to_string())
    }
}
