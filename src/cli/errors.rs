//! CLI error types

use thiserror::Error;

use crate::manager::ManagerError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Failures raised at the command-line boundary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Arrival request file missing or unreadable
    #[error("input file not found: {path}")]
    InputNotFound { path: String },

    /// Arrival request file is not a valid request
    #[error("invalid request file: {reason}")]
    InvalidRequest { reason: String },

    /// Lifecycle operation failure
    #[error(transparent)]
    Manager(#[from] ManagerError),
}
