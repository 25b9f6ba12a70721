//! MCP tool implementations
//!
//! Tool handlers organized by entity type. Each module contributes a tool
//! router to [`McpServer`](super::McpServer); the routers are merged when
//! the server is built.

mod projects;
mod todos;


pub use projects::{
    CreateProjectParams, DeleteProjectParams, GetProjectParams, UpdateProjectParams,
};
pub use todos::{
    CreateTodoParams, DeleteTodoParams, GetTodoParams, ListTodosParams, UpdateTodoParams,
};

use rmcp::{ErrorData as McpError, model::*};
use serde::Serialize;
use serde_json::json;

use crate::db::DbError;

/// Map a repository error onto an MCP error.
///
/// Not-found conditions keep the entity type and id in both the message and
/// the structured data so callers can tell which id was missing.
pub(crate) fn map_db_error(err: DbError) -> McpError {
    match &err {
        DbError::NotFound { entity_type, id } => McpError::resource_not_found(
            err.to_string(),
            Some(json!({"entity_type": entity_type, "id": id})),
        ),
        _ => {
            tracing::error!(error = %err, "Storage failure while handling tool call");
            McpError::internal_error(err.to_string(), None)
        }
    }
}

/// Serialize a value as pretty-printed JSON text content.
pub(crate) fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("failed to encode result: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

/// Reject empty or whitespace-only strings for required text fields.
pub(crate) fn require_non_empty(field: &str, value: &str) -> Result<(), McpError> {
    if value.trim().is_empty() {
        return Err(McpError::invalid_params(
            format!("{} must not be empty", field),
            Some(json!({"field": field})),
        ));
    }
    Ok(())
}

/// Parse an enum-valued parameter, mapping failures to `invalid_params`.
pub(crate) fn parse_param<T>(code: &'static str, value: &str) -> Result<T, McpError>
where
    T: std::str::FromStr<Err = String>,
{
    value
        .parse::<T>()
        .map_err(|e| McpError::invalid_params(code, Some(json!({"error": e}))))
}

/// Extract the single text payload of a tool result.
#[cfg(test)]
pub(crate) fn text_content(result: &CallToolResult) -> &str {
    assert_eq!(result.content.len(), 1);
    match &result.content[0].raw {
        RawContent::Text(text) => text.text.as_str(),
        _ => panic!("Expected text content"),
    }
}
