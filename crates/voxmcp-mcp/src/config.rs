//! Public configuration for the discovery clients.

use std::time::Duration;

/// Default request timeout, matching the connect timeout of the hosted tester.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the tool-discovery clients.
///
/// # Example
///
/// ```
/// use voxmcp_mcp::DiscoveryClientConfig;
/// use std::time::Duration;
///
/// let config = DiscoveryClientConfig::new()
///     .with_endpoint("http://localhost:3000/api/mcp/list-tools")
///     .with_timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct DiscoveryClientConfig {
    /// List-tools proxy endpoint; `None` means talk to servers directly
    pub(crate) endpoint_url: Option<String>,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Per-request timeout
    pub(crate) timeout: Duration,
    /// Name sent as `clientInfo.name` during the MCP handshake
    pub(crate) client_name: String,
}

impl Default for DiscoveryClientConfig {
    fn default() -> Self {
        Self {
            endpoint_url: None,
            user_agent: concat!("voxmcp-mcp/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: DEFAULT_TIMEOUT,
            client_name: "voxmcp".to_string(),
        }
    }
}

impl DiscoveryClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Route discovery through a list-tools proxy endpoint.
    #[must_use]
    pub fn with_endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint_url = Some(url.into());
        self
    }

    /// Set an optional proxy endpoint; blank values are ignored.
    #[must_use]
    pub fn with_optional_endpoint(mut self, url: Option<String>) -> Self {
        self.endpoint_url = url.filter(|u| !u.trim().is_empty());
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the per-request timeout.
    ///
    /// Defaults to 10 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the client name announced to MCP servers.
    #[must_use]
    pub fn with_client_name(mut self, name: impl Into<String>) -> Self {
        self.client_name = name.into();
        self
    }

    pub fn endpoint_url(&self) -> Option<&str> {
        self.endpoint_url.as_deref()
    }

    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DiscoveryClientConfig::new();
        assert!(config.endpoint_url.is_none());
        assert!(config.user_agent.starts_with("voxmcp-mcp/"));
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.client_name, "voxmcp");
    }

    #[test]
    fn test_builder_pattern() {
        let config = DiscoveryClientConfig::new()
            .with_endpoint("http://localhost:3000/api/mcp/list-tools")
            .with_user_agent("test-agent")
            .with_timeout(Duration::from_secs(3))
            .with_client_name("tester");

        assert_eq!(
            config.endpoint_url(),
            Some("http://localhost:3000/api/mcp/list-tools")
        );
        assert_eq!(config.user_agent, "test-agent");
        assert_eq!(config.timeout(), Duration::from_secs(3));
        assert_eq!(config.client_name, "tester");
    }

    #[test]
    fn test_optional_endpoint_ignores_blank() {
        let config = DiscoveryClientConfig::new().with_optional_endpoint(Some("  ".to_string()));
        assert!(config.endpoint_url().is_none());

        let config = DiscoveryClientConfig::new().with_optional_endpoint(Some("http://x".into()));
        assert_eq!(config.endpoint_url(), Some("http://x"));
    }
}
