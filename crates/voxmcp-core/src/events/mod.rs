//! Canonical event union for connector registry events.
//!
//! Emitted by the registry service through the `AppEventEmitter` port so that
//! front ends can react to registry changes without polling.
//!
//! # Wire Format
//!
//! Events are serialized with a `type` tag:
//!
//! ```json
//! { "type": "connector_added", "scenario": "chatSupervisor", "connector": { ... } }
//! ```

mod connector;

use serde::{Deserialize, Serialize};

use crate::domain::ScenarioKey;
use crate::ports::ErrorKind;

pub use connector::ConnectorSummary;

/// Events raised by the connector registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AppEvent {
    /// A validated server was appended to the scenario's registry.
    ConnectorAdded {
        scenario: ScenarioKey,
        connector: ConnectorSummary,
    },

    /// A server was removed from the scenario's registry.
    ConnectorRemoved {
        scenario: ScenarioKey,
        #[serde(rename = "connectorId")]
        connector_id: String,
    },

    /// A submission was rejected; the registry is unchanged.
    ConnectorValidationFailed {
        scenario: ScenarioKey,
        label: String,
        kind: ErrorKind,
        message: String,
    },

    /// The registry was (re)loaded for a scenario.
    ScenarioLoaded {
        scenario: ScenarioKey,
        #[serde(rename = "serverCount")]
        server_count: usize,
    },
}

impl AppEvent {
    /// Event name for adapters that route by string (e.g. `connector:added`).
    pub const fn event_name(&self) -> &'static str {
        match self {
            Self::ConnectorAdded { .. } => "connector:added",
            Self::ConnectorRemoved { .. } => "connector:removed",
            Self::ConnectorValidationFailed { .. } => "connector:validation-failed",
            Self::ScenarioLoaded { .. } => "scenario:loaded",
        }
    }

    pub const fn scenario(&self) -> &ScenarioKey {
        match self {
            Self::ConnectorAdded { scenario, .. }
            | Self::ConnectorRemoved { scenario, .. }
            | Self::ConnectorValidationFailed { scenario, .. }
            | Self::ScenarioLoaded { scenario, .. } => scenario,
        }
    }
}
