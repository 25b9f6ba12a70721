//! Model Context Protocol (MCP) server implementation
//!
//! Exposes project and todo management as MCP tools, over either the
//! Streamable HTTP transport or stdio.
//!
//! # Architecture
//!
//! - **server**: `McpServer`, the tool dispatcher
//! - **tools**: tool routers per entity (projects, todos), merged by the server
//! - **service**: Streamable HTTP service factory for nesting in axum
//!
//! The server is generic over `D: Database`, so the storage backend is chosen
//! by the binary without dynamic dispatch.

pub mod server;
mod service;
pub mod tools;


pub use server::McpServer;
pub use service::create_mcp_service;
