//! Project and todo planner served as MCP tools.
//!
//! Projects and todos live as JSON records in a flat key-value store, with
//! secondary id indices for enumeration. See [`db::kv`] for the storage
//! layout and its consistency rules.

pub mod cli;
pub mod config;
pub mod db;
pub mod mcp;
pub mod server;
