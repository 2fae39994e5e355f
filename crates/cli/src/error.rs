//! CLI error types.

use aws_sdk_dynamodb::error::BuildError;
use thiserror::Error;

/// Result type alias for the CLI.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur while running a command.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Manager(#[from] docgate::ManagerError<aws_sdk_dynamodb::Error>),

    #[error("Invalid request: {0}")]
    Request(#[from] BuildError),

    #[error("Invalid key '{0}': expected NAME=VALUE")]
    InvalidKey(String),

    #[error("Table '{table}' is not reachable")]
    TableUnavailable { table: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
