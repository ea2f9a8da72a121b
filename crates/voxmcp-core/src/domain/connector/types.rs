//! MCP connector domain types.
//!
//! These types are persisted as JSON and shared with the session payload, so
//! their serde names follow the stored layout (camelCase fields, lowercase
//! status values).

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Origin of a connector template.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConnectorCategory {
    /// Connector maintained by the realtime platform vendor.
    #[serde(rename = "openai")]
    OpenAi,
    /// Connector published by another developer.
    #[serde(rename = "thirdParty")]
    ThirdParty,
    /// Any remotely hosted MCP server configured by hand.
    #[default]
    #[serde(rename = "custom")]
    Custom,
}

impl ConnectorCategory {
    /// All categories in display order.
    pub const ALL: [Self; 3] = [Self::OpenAi, Self::ThirdParty, Self::Custom];

    /// Heading used when grouping the catalog for display.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::OpenAi => "OpenAI connectors",
            Self::ThirdParty => "Other developers",
            Self::Custom => "Custom",
        }
    }
}

/// Connection status recorded by the last validation round-trip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    /// Not checked yet.
    #[default]
    Unknown,
    /// The last tool-discovery call succeeded.
    Connected,
    /// The last tool-discovery call failed.
    Error,
}

impl ConnectionStatus {
    /// Whether a server in this state may be handed to session startup.
    pub const fn is_session_eligible(self) -> bool {
        !matches!(self, Self::Error)
    }
}

/// A catalog entry describing a reusable MCP server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectorDefinition {
    /// Stable identifier (e.g. `zapier-cloud`).
    pub id: String,
    /// Display name.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: ConnectorCategory,
    /// URL pre-filled into the draft when this template is selected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation_url: Option<String>,
    /// Whether the server rejects requests without auth headers.
    #[serde(default)]
    pub requires_auth_headers: bool,
    /// Headers pre-filled into the draft, in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub default_headers: Vec<(String, String)>,
}

/// A single HTTP header attached to a server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderEntry {
    /// Generated identifier used to address the row while editing.
    pub id: String,
    /// Header name.
    pub key: String,
    /// Header value.
    pub value: String,
}

impl HeaderEntry {
    /// Create a header with a freshly generated identifier.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            key: key.into(),
            value: value.into(),
        }
    }

    /// Create an empty header row.
    pub fn blank() -> Self {
        Self::new("", "")
    }

    /// Whether both the name and the value are filled in.
    pub fn is_complete(&self) -> bool {
        !self.key.is_empty() && !self.value.is_empty()
    }
}

/// Which side of a header row an edit applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderField {
    Key,
    Value,
}

/// Collapse a header list into a plain name/value mapping.
///
/// Rows missing either side are dropped; a later duplicate name wins.
pub fn header_map(headers: &[HeaderEntry]) -> BTreeMap<String, String> {
    headers
        .iter()
        .filter(|header| header.is_complete())
        .map(|header| (header.key.clone(), header.value.clone()))
        .collect()
}

/// A tool exposed by an MCP server, as last observed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolSummary {
    /// Tool name (function name).
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ToolSummary {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A validated MCP server attached to the active scenario.
///
/// Created only after a successful tool-discovery round-trip. `status`,
/// `tools` and `last_checked_at` always come from the same round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerConfig {
    pub id: String,

    /// User-supplied label, unique (case-insensitively) within the scenario.
    pub label: String,

    /// Server URL, unique within the scenario.
    pub server_url: String,

    pub headers: Vec<HeaderEntry>,

    /// Tool allow-list. `None` means every tool is allowed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_tools: Option<Vec<String>>,

    pub category: ConnectorCategory,

    /// Identifier of the catalog template the server was created from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    pub status: ConnectionStatus,

    #[serde(default)]
    pub tools: Vec<ToolSummary>,

    /// Time of the last successful tool-discovery call.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_checked_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl ServerConfig {
    /// Short status text for listings ("3 tools", "connected", ...).
    pub fn status_summary(&self) -> String {
        match self.status {
            ConnectionStatus::Connected => match self.tools.len() {
                0 => "connected".to_string(),
                1 => "1 tool".to_string(),
                n => format!("{n} tools"),
            },
            ConnectionStatus::Error => "connection failed".to_string(),
            ConnectionStatus::Unknown => "not checked".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server(status: ConnectionStatus, tools: usize) -> ServerConfig {
        ServerConfig {
            id: "srv-1".to_string(),
            label: "Zapier workspace".to_string(),
            server_url: "https://mcp.zapier.com/endpoint".to_string(),
            headers: vec![],
            allowed_tools: None,
            category: ConnectorCategory::ThirdParty,
            source_id: Some("zapier-cloud".to_string()),
            notes: None,
            status,
            tools: (0..tools)
                .map(|i| ToolSummary::new(format!("tool_{i}")))
                .collect(),
            last_checked_at: None,
            error_message: None,
        }
    }

    #[test]
    fn test_category_wire_names() {
        assert_eq!(
            serde_json::to_string(&ConnectorCategory::OpenAi).unwrap(),
            "\"openai\""
        );
        assert_eq!(
            serde_json::to_string(&ConnectorCategory::ThirdParty).unwrap(),
            "\"thirdParty\""
        );
        let parsed: ConnectorCategory = serde_json::from_str("\"custom\"").unwrap();
        assert_eq!(parsed, ConnectorCategory::Custom);
    }

    #[test]
    fn test_status_serialization_and_eligibility() {
        assert_eq!(
            serde_json::to_string(&ConnectionStatus::Connected).unwrap(),
            "\"connected\""
        );
        assert_eq!(ConnectionStatus::default(), ConnectionStatus::Unknown);
        assert!(ConnectionStatus::Connected.is_session_eligible());
        assert!(ConnectionStatus::Unknown.is_session_eligible());
        assert!(!ConnectionStatus::Error.is_session_eligible());
    }

    #[test]
    fn test_server_config_uses_camel_case_and_omits_absent_fields() {
        let json = serde_json::to_value(server(ConnectionStatus::Connected, 1)).unwrap();
        assert_eq!(json["serverUrl"], "https://mcp.zapier.com/endpoint");
        assert_eq!(json["sourceId"], "zapier-cloud");
        assert_eq!(json["status"], "connected");
        assert!(json.get("allowedTools").is_none());
        assert!(json.get("notes").is_none());
        assert!(json.get("lastCheckedAt").is_none());
    }

    #[test]
    fn test_header_map_drops_incomplete_rows() {
        let headers = vec![
            HeaderEntry::new("Authorization", "Bearer abc"),
            HeaderEntry::new("X-Empty", ""),
            HeaderEntry::new("", "orphan"),
        ];
        let map = header_map(&headers);
        assert_eq!(map.len(), 1);
        assert_eq!(map["Authorization"], "Bearer abc");
    }

    #[test]
    fn test_header_ids_are_unique() {
        let a = HeaderEntry::blank();
        let b = HeaderEntry::blank();
        assert_ne!(a.id, b.id);
        assert!(!a.is_complete());
    }

    #[test]
    fn test_status_summary() {
        assert_eq!(
            server(ConnectionStatus::Connected, 0).status_summary(),
            "connected"
        );
        assert_eq!(
            server(ConnectionStatus::Connected, 1).status_summary(),
            "1 tool"
        );
        assert_eq!(
            server(ConnectionStatus::Connected, 3).status_summary(),
            "3 tools"
        );
        assert_eq!(
            server(ConnectionStatus::Error, 0).status_summary(),
            "connection failed"
        );
    }
}
