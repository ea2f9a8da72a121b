//! Connector registry events.

use serde::{Deserialize, Serialize};

use super::AppEvent;
use crate::domain::ScenarioKey;
use crate::domain::connector::{ConnectionStatus, ServerConfig};
use crate::ports::RegistryError;

/// Summary of a server for event payloads.
///
/// This is a lightweight representation for events, not the full `ServerConfig`;
/// header values never leave the registry through events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectorSummary {
    pub id: String,
    pub label: String,
    pub server_url: String,
    pub status: ConnectionStatus,
    pub tool_count: usize,
}

impl From<&ServerConfig> for ConnectorSummary {
    fn from(server: &ServerConfig) -> Self {
        Self {
            id: server.id.clone(),
            label: server.label.clone(),
            server_url: server.server_url.clone(),
            status: server.status,
            tool_count: server.tools.len(),
        }
    }
}

impl AppEvent {
    pub fn connector_added(scenario: ScenarioKey, server: &ServerConfig) -> Self {
        Self::ConnectorAdded {
            scenario,
            connector: ConnectorSummary::from(server),
        }
    }

    pub fn connector_removed(scenario: ScenarioKey, connector_id: impl Into<String>) -> Self {
        Self::ConnectorRemoved {
            scenario,
            connector_id: connector_id.into(),
        }
    }

    pub fn connector_validation_failed(
        scenario: ScenarioKey,
        label: impl Into<String>,
        error: &RegistryError,
    ) -> Self {
        Self::ConnectorValidationFailed {
            scenario,
            label: label.into(),
            kind: error.kind(),
            message: error.to_string(),
        }
    }

    pub const fn scenario_loaded(scenario: ScenarioKey, server_count: usize) -> Self {
        Self::ScenarioLoaded {
            scenario,
            server_count,
        }
    }
}
