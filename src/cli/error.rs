use miette::Diagnostic;
use thiserror::Error;

use crate::db::DbError;
use crate::server::ServerError;

#[derive(Error, Diagnostic, Debug)]
pub enum CliError {
    #[error("Database error: {0}")]
    #[diagnostic(code(planner::cli::database))]
    Database(#[from] DbError),

    #[error("Failed to create data directory: {0}")]
    #[diagnostic(
        code(planner::cli::io),
        help("Pass --db with a writable path, or use --store memory.")
    )]
    Io(#[from] std::io::Error),

    #[error("Server error: {0}")]
    #[diagnostic(code(planner::cli::server))]
    Server(#[from] ServerError),
}

pub type CliResult<T> = Result<T, CliError>;
