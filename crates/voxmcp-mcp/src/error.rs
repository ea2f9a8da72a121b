//! Internal error types for the discovery clients.
//!
//! These errors are internal to `voxmcp-mcp` and are mapped to
//! `DiscoveryError` at the port boundary.

use thiserror::Error;
use voxmcp_core::DiscoveryError;

/// Result type alias for HTTP/MCP operations.
pub type McpHttpResult<T> = Result<T, McpHttpError>;

/// Errors raised while talking to a proxy endpoint or an MCP server.
#[derive(Debug, Error)]
pub enum McpHttpError {
    /// The endpoint answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Message extracted from the body, or the body itself
        message: String,
    },

    /// The server returned a JSON-RPC error object.
    #[error("MCP error {code}: {message}")]
    Rpc {
        /// HTTP status of the reply carrying the error
        status: u16,
        /// JSON-RPC error code
        code: i64,
        /// JSON-RPC error message
        message: String,
    },

    /// The reply did not have the expected shape.
    #[error("Invalid response: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// Network or HTTP client error.
    #[error("{0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("{0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The URL parsed but is not an HTTP(S) URL.
    #[error("unsupported URL scheme '{0}'")]
    UnsupportedScheme(String),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl McpHttpError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }
}

/// Convert an internal error to the port error.
pub(crate) fn map_error(err: McpHttpError) -> DiscoveryError {
    match err {
        McpHttpError::Status { status, message } | McpHttpError::Rpc { status, message, .. } => {
            DiscoveryError::Remote { status, message }
        }
        McpHttpError::InvalidResponse { message } => DiscoveryError::InvalidResponse(message),
        McpHttpError::Network(e) => {
            if e.is_timeout() {
                DiscoveryError::network("Request timed out")
            } else {
                DiscoveryError::network(e.to_string())
            }
        }
        McpHttpError::InvalidUrl(e) => DiscoveryError::InvalidUrl(e.to_string()),
        e @ McpHttpError::UnsupportedScheme(_) => DiscoveryError::InvalidUrl(e.to_string()),
        McpHttpError::JsonParse(e) => DiscoveryError::InvalidResponse(e.to_string()),
    }
}
