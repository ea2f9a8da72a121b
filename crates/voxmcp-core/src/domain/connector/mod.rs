//! MCP connector domain types.
//!
//! # Design
//!
//! - `ConnectorDefinition` / `ConnectorCatalog` - immutable templates
//! - `DraftServer` - the editable, unvalidated form state
//! - `ServerConfig` - a validated server attached to a scenario
//! - `HeaderEntry`, `ToolSummary`, `ConnectionStatus` - their parts

mod catalog;
mod draft;
mod stored;
mod types;

pub use catalog::{CUSTOM_CONNECTOR_ID, ConnectorCatalog};
pub use draft::{DraftServer, parse_allowed_tools};
pub use stored::{decode_registry, encode_registry};
pub use types::{
    ConnectionStatus, ConnectorCategory, ConnectorDefinition, HeaderEntry, HeaderField,
    ServerConfig, ToolSummary, header_map,
};
