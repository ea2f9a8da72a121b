//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the registry expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` or `reqwest` types in any signature
//! - Adapter errors are mapped to port errors at the crate boundary

pub mod event_emitter;
pub mod key_value_store;
pub mod registry_error;
pub mod tool_discovery;

pub use event_emitter::{AppEventEmitter, NoopEmitter, RecordingEmitter};
pub use key_value_store::{InMemoryKeyValueStore, KeyValueStore, StoreError};
pub use registry_error::{ErrorKind, RegistryError, RequiredField};
pub use tool_discovery::{
    DiscoveryError, DiscoveryHeader, DiscoveryRequest, GENERIC_DISCOVERY_ERROR, ToolDiscoveryPort,
};
