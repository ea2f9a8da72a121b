//! Connector registry error types.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{DiscoveryError, StoreError};

/// Draft field that must be non-empty after trimming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Label,
    ServerUrl,
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Label => f.write_str("Please provide a label for this MCP server."),
            Self::ServerUrl => f.write_str("Please provide the MCP server URL."),
        }
    }
}

/// Errors surfaced by connector registry operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A required draft field is empty.
    #[error("{0}")]
    MissingField(RequiredField),

    /// Another server in the scenario already uses this label or URL.
    #[error("A server with this label or URL already exists.")]
    Duplicate {
        /// Submitted label (trimmed)
        label: String,
        /// Submitted URL (trimmed)
        server_url: String,
    },

    /// The tool-discovery round-trip failed.
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    /// The key-value store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl RegistryError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingField(_) | Self::Duplicate { .. } => ErrorKind::Validation,
            Self::Discovery(_) => ErrorKind::Connectivity,
            Self::Store(_) => ErrorKind::Persistence,
        }
    }
}

/// Broad error category for UI handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Rejected before any I/O.
    Validation,
    /// The remote discovery call failed.
    Connectivity,
    /// Local storage failed or held corrupt data.
    Persistence,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(
            RegistryError::MissingField(RequiredField::Label).kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            RegistryError::Duplicate {
                label: "a".into(),
                server_url: "b".into()
            }
            .kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            RegistryError::from(DiscoveryError::Network("down".into())).kind(),
            ErrorKind::Connectivity
        );
        assert_eq!(
            RegistryError::from(StoreError::Backend("locked".into())).kind(),
            ErrorKind::Persistence
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            RegistryError::MissingField(RequiredField::ServerUrl).to_string(),
            "Please provide the MCP server URL."
        );
        let remote = RegistryError::from(DiscoveryError::Remote {
            status: 502,
            message: "fetch failed".into(),
        });
        assert_eq!(remote.to_string(), "fetch failed");
    }
}
