//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid argument combination or value.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A search finished without finding a root.
    #[error("{0}")]
    NoRoots(String),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
