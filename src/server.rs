//! Process wiring: tracing, HTTP router and stdio transport.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::http::StatusCode;
use miette::Diagnostic;
use rmcp::ServiceExt;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::db::Database;
use crate::mcp::{McpServer, create_mcp_service};

/// Errors raised while running a transport.
#[derive(Error, Diagnostic, Debug)]
pub enum ServerError {
    #[error("I/O error: {0}")]
    #[diagnostic(code(planner::server::io))]
    Io(#[from] std::io::Error),

    #[error("MCP transport error: {message}")]
    #[diagnostic(code(planner::server::transport))]
    Transport { message: String },
}

/// Initialize tracing subscriber with env filter.
///
/// Logs go to stderr so the stdio transport keeps stdout to itself.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "planner=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not found")
}

/// Router with the MCP service at `/mcp`; every other path is a 404.
pub fn create_router<D: Database + 'static>(
    db: Arc<D>,
    cancellation_token: CancellationToken,
) -> Router {
    Router::new()
        .nest_service("/mcp", create_mcp_service(db, cancellation_token))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
}

/// Serve MCP over Streamable HTTP until Ctrl-C.
pub async fn serve_http<D: Database + 'static>(
    db: Arc<D>,
    addr: SocketAddr,
) -> Result<(), ServerError> {
    let ct = CancellationToken::new();
    let app = create_router(db, ct.clone());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("MCP server listening on http://{}/mcp", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!(error = %e, "Failed to listen for shutdown signal");
            }
            info!("Shutting down");
            ct.cancel();
        })
        .await?;
    Ok(())
}

/// Serve MCP over stdin/stdout until the client disconnects.
pub async fn serve_stdio<D: Database + 'static>(db: Arc<D>) -> Result<(), ServerError> {
    info!("Starting MCP server on stdio");

    let service = McpServer::new(db)
        .serve(rmcp::transport::stdio())
        .await
        .map_err(|e| ServerError::Transport {
            message: e.to_string(),
        })?;

    service.waiting().await.map_err(|e| ServerError::Transport {
        message: e.to_string(),
    })?;

    info!("MCP server shutting down");
    Ok(())
}
