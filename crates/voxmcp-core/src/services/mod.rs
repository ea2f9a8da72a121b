//! Application services.
//!
//! Services orchestrate domain transitions and ports; they hold no
//! adapter-specific code.

mod connector_registry;
mod registry_state;

pub use connector_registry::ConnectorRegistry;
pub use registry_state::{RegistryState, Submission};
