//! CLI-specific error types.
//!
//! Errors are mapped to sysexits-style exit codes so scripts can tell a
//! rejected submission from an unreachable server.

use std::io;

use thiserror::Error;
use voxmcp_core::{DiscoveryError, ErrorKind, PathError, RegistryError};

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid command-line arguments
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// The submission was rejected before contacting the server
    #[error("{0}")]
    Validation(String),

    /// The server could not be reached or answered with an error
    #[error("{0}")]
    Connectivity(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(String),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Follows sysexits.h conventions where applicable.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Arguments(_) => 2,     // EX_USAGE (simplified)
            Self::Validation(_) => 65,   // EX_DATAERR
            Self::Connectivity(_) => 69, // EX_UNAVAILABLE
            Self::Database(_) => 73,     // EX_CANTCREAT
            Self::Io(_) => 74,           // EX_IOERR
            Self::Config(_) => 78,       // EX_CONFIG
        }
    }
}

impl From<RegistryError> for CliError {
    fn from(err: RegistryError) -> Self {
        let message = err.to_string();
        match err.kind() {
            ErrorKind::Validation => Self::Validation(message),
            ErrorKind::Connectivity => Self::Connectivity(message),
            ErrorKind::Persistence => Self::Database(message),
        }
    }
}

impl From<DiscoveryError> for CliError {
    fn from(err: DiscoveryError) -> Self {
        match err {
            DiscoveryError::InvalidUrl(_) => Self::Config(err.to_string()),
            other => Self::Connectivity(other.to_string()),
        }
    }
}

impl From<PathError> for CliError {
    fn from(err: PathError) -> Self {
        match err {
            PathError::CreateFailed { .. } | PathError::NotADirectory(_) => {
                Self::Io(io::Error::other(err.to_string()))
            }
            other => Self::Config(other.to_string()),
        }
    }
}

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
