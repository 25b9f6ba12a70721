//! Database error types.
//!
//! Storage-backend agnostic errors shared by every repository. Uses
//! thiserror for the derive and miette for diagnostic codes.

use miette::Diagnostic;
use thiserror::Error;

/// Database operation errors.
#[derive(Error, Diagnostic, Debug)]
pub enum DbError {
    #[error("Entity not found: {entity_type} with id '{id}'")]
    #[diagnostic(code(planner::db::not_found))]
    NotFound { entity_type: String, id: String },

    #[error("Invalid data: {message}")]
    #[diagnostic(code(planner::db::invalid_data))]
    InvalidData {
        message: String,
        #[help]
        help: String,
    },

    #[error("Database error: {message}")]
    #[diagnostic(code(planner::db::database_error))]
    Database { message: String },

    #[error("Migration error: {message}")]
    #[diagnostic(code(planner::db::migration_error))]
    Migration { message: String },

    #[error("Connection error: {message}")]
    #[diagnostic(code(planner::db::connection_error))]
    Connection { message: String },
}

impl DbError {
    pub fn not_found(entity_type: &str, id: &str) -> Self {
        DbError::NotFound {
            entity_type: entity_type.to_string(),
            id: id.to_string(),
        }
    }

    /// A stored value at `key` that could not be decoded.
    pub fn corrupt(key: &str, err: serde_json::Error) -> Self {
        DbError::InvalidData {
            message: format!("value at key '{}' is not valid: {}", key, err),
            help: format!("repair or delete the record stored under '{}'", key),
        }
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
