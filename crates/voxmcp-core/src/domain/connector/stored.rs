//! Persisted registry layout.
//!
//! A scenario's registry is stored as one JSON array of `ServerConfig`.
//! Older records may lack header ids, a status or a tool list; those gaps are
//! filled in on read so the rest of the application only ever sees complete
//! values.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::types::{
    ConnectionStatus, ConnectorCategory, HeaderEntry, ServerConfig, ToolSummary,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredServer {
    id: String,
    label: String,
    server_url: String,
    #[serde(default)]
    headers: Option<Vec<StoredHeader>>,
    #[serde(default)]
    allowed_tools: Option<Vec<String>>,
    #[serde(default)]
    category: ConnectorCategory,
    #[serde(default)]
    source_id: Option<String>,
    #[serde(default)]
    notes: Option<String>,
    #[serde(default)]
    status: Option<ConnectionStatus>,
    #[serde(default)]
    tools: Option<Vec<ToolSummary>>,
    #[serde(default)]
    last_checked_at: Option<DateTime<Utc>>,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StoredHeader {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    key: String,
    #[serde(default)]
    value: String,
}

impl From<StoredHeader> for HeaderEntry {
    fn from(stored: StoredHeader) -> Self {
        match stored.id {
            Some(id) => Self {
                id,
                key: stored.key,
                value: stored.value,
            },
            None => Self::new(stored.key, stored.value),
        }
    }
}

impl From<StoredServer> for ServerConfig {
    fn from(stored: StoredServer) -> Self {
        Self {
            id: stored.id,
            label: stored.label,
            server_url: stored.server_url,
            headers: stored
                .headers
                .unwrap_or_default()
                .into_iter()
                .map(HeaderEntry::from)
                .collect(),
            allowed_tools: stored.allowed_tools,
            category: stored.category,
            source_id: stored.source_id,
            notes: stored.notes,
            status: stored.status.unwrap_or(ConnectionStatus::Connected),
            tools: stored.tools.unwrap_or_default(),
            last_checked_at: stored.last_checked_at,
            error_message: stored.error_message,
        }
    }
}

/// Decode a stored registry, normalizing legacy records.
pub fn decode_registry(raw: &str) -> Result<Vec<ServerConfig>, serde_json::Error> {
    let stored: Vec<StoredServer> = serde_json::from_str(raw)?;
    Ok(stored.into_iter().map(ServerConfig::from).collect())
}

/// Encode a registry in the persisted layout.
pub fn encode_registry(servers: &[ServerConfig]) -> Result<String, serde_json::Error> {
    serde_json::to_string(servers)
}
