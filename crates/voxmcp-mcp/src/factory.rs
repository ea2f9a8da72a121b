//! Selection of the discovery client from configuration.

use std::sync::Arc;

use voxmcp_core::{DiscoveryError, ToolDiscoveryPort};

use crate::config::DiscoveryClientConfig;
use crate::direct::DefaultDirectClient;
use crate::proxy::DefaultProxyClient;

/// Build the discovery port for `config`.
///
/// A configured endpoint selects the proxy client; otherwise servers are
/// contacted directly.
///
/// # Errors
///
/// `InvalidUrl` for an unparsable endpoint, `Network` if the HTTP client
/// cannot be created.
pub fn build_discovery(
    config: &DiscoveryClientConfig,
) -> Result<Arc<dyn ToolDiscoveryPort>, DiscoveryError> {
    match config.endpoint_url() {
        Some(endpoint) => {
            tracing::debug!(endpoint = %endpoint, "Using list-tools proxy");
            Ok(Arc::new(DefaultProxyClient::new(endpoint, config)?))
        }
        None => Ok(Arc::new(DefaultDirectClient::new(config)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_both_clients() {
        assert!(build_discovery(&DiscoveryClientConfig::new()).is_ok());
        assert!(
            build_discovery(&DiscoveryClientConfig::new().with_endpoint("http://localhost:3000/x"))
                .is_ok()
        );
    }

    #[test]
    fn test_rejects_bad_endpoint() {
        let result = build_discovery(&DiscoveryClientConfig::new().with_endpoint("::nope"));
        assert!(matches!(result, Err(DiscoveryError::InvalidUrl(_))));
    }
}
