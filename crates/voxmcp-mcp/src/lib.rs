#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod config;
mod direct;
mod error;
mod factory;
mod http;
mod proxy;

// ============================================================================
// Public API
// ============================================================================

// Clients
pub use direct::{DefaultDirectClient, DirectDiscoveryClient, PROTOCOL_VERSION};
pub use proxy::{DefaultProxyClient, PROXY_FAILURE_MESSAGE, ProxyDiscoveryClient};

// Configuration
pub use config::{DEFAULT_TIMEOUT, DiscoveryClientConfig};
pub use factory::build_discovery;

// Backend seam for callers that supply their own transport
pub use error::{McpHttpError, McpHttpResult};
pub use http::{HttpBackend, HttpReply, ReqwestBackend};

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio as _;
