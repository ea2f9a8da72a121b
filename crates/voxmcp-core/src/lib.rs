#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod events;
pub mod paths;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    CUSTOM_CONNECTOR_ID, ConnectionStatus, ConnectorCatalog, ConnectorCategory,
    ConnectorDefinition, DEFAULT_SCENARIO_KEY, DraftServer, HeaderEntry, HeaderField,
    McpServerRequestPayload, Scenario, ScenarioCatalog, ScenarioKey, ServerConfig, ToolSummary,
    session_payloads,
};
pub use events::{AppEvent, ConnectorSummary};
pub use paths::{PathError, data_root, data_root_from, database_path, database_path_in};
pub use ports::{
    AppEventEmitter, DiscoveryError, DiscoveryHeader, DiscoveryRequest, ErrorKind,
    GENERIC_DISCOVERY_ERROR, InMemoryKeyValueStore, KeyValueStore, NoopEmitter,
    RecordingEmitter, RegistryError, RequiredField, StoreError, ToolDiscoveryPort,
};
pub use services::{ConnectorRegistry, RegistryState, Submission};

// mockall is only used by the integration tests
#[cfg(test)]
use mockall as _;
