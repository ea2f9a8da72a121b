//! Server list handed to realtime session startup.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::connector::{ServerConfig, header_map};

/// One MCP server as passed to session initialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct McpServerRequestPayload {
    pub label: String,
    pub server_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_tools: Option<Vec<String>>,
}

impl From<&ServerConfig> for McpServerRequestPayload {
    fn from(server: &ServerConfig) -> Self {
        let headers = header_map(&server.headers);
        Self {
            label: server.label.clone(),
            server_url: server.server_url.clone(),
            headers: (!headers.is_empty()).then_some(headers),
            allowed_tools: server
                .allowed_tools
                .as_ref()
                .filter(|tools| !tools.is_empty())
                .cloned(),
        }
    }
}

/// Session payloads for every server not in the error state, in registry order.
pub fn session_payloads(servers: &[ServerConfig]) -> Vec<McpServerRequestPayload> {
    servers
        .iter()
        .filter(|server| server.status.is_session_eligible())
        .map(McpServerRequestPayload::from)
        .collect()
}
