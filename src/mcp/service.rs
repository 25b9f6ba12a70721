//! MCP Streamable HTTP service creation
//!
//! Builds the service that is nested into the axum router.

use std::sync::Arc;

use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};
use tokio_util::sync::CancellationToken;

use crate::db::Database;

use super::server::McpServer;

/// Create MCP Streamable HTTP service
///
/// # Arguments
/// * `db` - Database instance implementing the Database trait
/// * `cancellation_token` - Token for graceful shutdown
///
/// # Example
/// ```no_run
/// use std::sync::Arc;
///
/// use axum::Router;
/// use tokio_util::sync::CancellationToken;
/// use planner::db::KvDatabase;
/// use planner::mcp::create_mcp_service;
///
/// let ct = CancellationToken::new();
/// let mcp_service = create_mcp_service(Arc::new(KvDatabase::in_memory()), ct);
///
/// let app: Router = Router::new().nest_service("/mcp", mcp_service);
/// ```
pub fn create_mcp_service<D: Database + 'static>(
    db: Arc<D>,
    cancellation_token: CancellationToken,
) -> StreamableHttpService<McpServer<D>, LocalSessionManager> {
    // One McpServer per session, all sharing the same database.
    // Returns io::Error to match rmcp's expected signature.
    let service_factory =
        move || -> Result<McpServer<D>, std::io::Error> { Ok(McpServer::new(Arc::clone(&db))) };

    let config = StreamableHttpServerConfig::default()
        .with_sse_keep_alive(None)
        .with_sse_retry(None)
        .with_stateful_mode(true)
        .with_cancellation_token(cancellation_token);

    StreamableHttpService::new(
        service_factory,
        LocalSessionManager::default().into(),
        config,
    )
}
