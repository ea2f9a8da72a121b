//! Tool-discovery port.
//!
//! A discovery call asks a remote MCP server (directly or through a proxy
//! endpoint) which tools it exposes. It is the only network effect of the
//! connector registry.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::connector::{HeaderEntry, ToolSummary};

/// Message used when a failed discovery call carries no usable message.
pub const GENERIC_DISCOVERY_ERROR: &str = "Unable to connect to this MCP server.";

/// Errors returned by a discovery backend.
///
/// `Display` yields the message shown to the user, so remote messages are
/// passed through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiscoveryError {
    /// The endpoint answered with a non-success status.
    #[error("{message}")]
    Remote {
        /// HTTP status code
        status: u16,
        /// Error reported by the endpoint
        message: String,
    },

    /// The request never produced a response.
    #[error("{0}")]
    Network(String),

    /// The response body did not have the expected shape.
    #[error("Invalid response from MCP server: {0}")]
    InvalidResponse(String),

    /// The server URL could not be parsed.
    #[error("serverUrl must be a valid URL: {0}")]
    InvalidUrl(String),
}

impl DiscoveryError {
    /// Build a network error, substituting the generic message for a blank one.
    pub fn network(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Self::Network(GENERIC_DISCOVERY_ERROR.to_string())
        } else {
            Self::Network(message)
        }
    }
}

/// A header forwarded with a discovery request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryHeader {
    pub key: String,
    pub value: String,
}

/// Body of a tool-discovery request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveryRequest {
    pub server_url: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<DiscoveryHeader>,
}

impl DiscoveryRequest {
    /// Build a request, keeping only headers with both a name and a value.
    pub fn new(server_url: impl Into<String>, headers: &[HeaderEntry]) -> Self {
        Self {
            server_url: server_url.into(),
            headers: headers
                .iter()
                .filter(|header| header.is_complete())
                .map(|header| DiscoveryHeader {
                    key: header.key.clone(),
                    value: header.value.clone(),
                })
                .collect(),
        }
    }
}

/// Lists the tools exposed by an MCP server.
#[async_trait]
pub trait ToolDiscoveryPort: Send + Sync {
    /// Run one discovery round-trip.
    ///
    /// Tools are returned in the order the server reported them.
    async fn list_tools(&self, request: &DiscoveryRequest)
    -> Result<Vec<ToolSummary>, DiscoveryError>;
}
