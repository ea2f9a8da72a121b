//! Domain types for the connector registry.
//!
//! Pure data and pure functions only; no I/O.

pub mod connector;
pub mod scenario;
pub mod session;

pub use connector::{
    CUSTOM_CONNECTOR_ID, ConnectionStatus, ConnectorCatalog, ConnectorCategory,
    ConnectorDefinition, DraftServer, HeaderEntry, HeaderField, ServerConfig, ToolSummary,
};
pub use scenario::{DEFAULT_SCENARIO_KEY, Scenario, ScenarioCatalog, ScenarioKey};
pub use session::{McpServerRequestPayload, session_payloads};
