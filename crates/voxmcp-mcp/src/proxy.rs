//! Client for a list-tools proxy endpoint.
//!
//! The endpoint accepts `{ serverUrl, headers? }` and answers with either
//! `{ tools: [...] }` or, on a non-success status, `{ error: "..." }`.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use url::Url;

use voxmcp_core::{DiscoveryError, DiscoveryRequest, ToolDiscoveryPort, ToolSummary};

use crate::config::DiscoveryClientConfig;
use crate::error::{McpHttpError, McpHttpResult, map_error};
use crate::http::{HttpBackend, ReqwestBackend};

/// Message used when a failed proxy reply carries no `error` field.
pub const PROXY_FAILURE_MESSAGE: &str = "Failed to connect to the MCP server.";

/// Proxy client using the reqwest backend.
pub type DefaultProxyClient = ProxyDiscoveryClient<ReqwestBackend>;

/// Discovery through a list-tools proxy endpoint.
pub struct ProxyDiscoveryClient<B: HttpBackend> {
    backend: B,
    endpoint: Url,
}

#[derive(Debug, Deserialize)]
struct ProxyReply {
    #[serde(default)]
    tools: Option<Value>,
    #[serde(default)]
    error: Option<String>,
}

impl DefaultProxyClient {
    /// Create a client for `endpoint`.
    pub fn new(endpoint: &str, config: &DiscoveryClientConfig) -> Result<Self, DiscoveryError> {
        let endpoint = Url::parse(endpoint).map_err(|e| map_error(e.into()))?;
        let backend = ReqwestBackend::new(config).map_err(map_error)?;
        Ok(Self { backend, endpoint })
    }
}

impl<B: HttpBackend> ProxyDiscoveryClient<B> {
    /// Create a client with a custom backend.
    pub const fn with_backend(endpoint: Url, backend: B) -> Self {
        Self { backend, endpoint }
    }

    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn fetch(&self, request: &DiscoveryRequest) -> McpHttpResult<Vec<ToolSummary>> {
        let body = serde_json::to_value(request)?;
        let reply = self.backend.post_json(&self.endpoint, &[], &body).await?;
        let parsed = serde_json::from_str::<ProxyReply>(&reply.body);

        if !reply.is_success() {
            let message = parsed
                .ok()
                .and_then(|p| p.error)
                .filter(|message| !message.trim().is_empty())
                .unwrap_or_else(|| PROXY_FAILURE_MESSAGE.to_string());
            return Err(McpHttpError::Status {
                status: reply.status,
                message,
            });
        }

        parsed?.tools.map_or_else(|| Ok(Vec::new()), parse_tools)
    }
}

/// Decode the tool list; anything but an array yields nothing.
///
/// Every element must be a valid tool, so the list is never shortened.
fn parse_tools(value: Value) -> McpHttpResult<Vec<ToolSummary>> {
    if !value.is_array() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_value(value)?)
}

#[async_trait]
impl<B: HttpBackend> ToolDiscoveryPort for ProxyDiscoveryClient<B> {
    async fn list_tools(
        &self,
        request: &DiscoveryRequest,
    ) -> Result<Vec<ToolSummary>, DiscoveryError> {
        tracing::debug!(
            endpoint = %self.endpoint,
            server_url = %request.server_url,
            "Listing MCP tools through proxy"
        );
        self.fetch(request).await.map_err(map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpReply;
    use crate::http::testing::FakeBackend;
    use serde_json::json;
    use voxmcp_core::HeaderEntry;

    fn client(backend: FakeBackend) -> ProxyDiscoveryClient<FakeBackend> {
        ProxyDiscoveryClient::with_backend(
            Url::parse("http://localhost:3000/api/mcp/list-tools").unwrap(),
            backend,
        )
    }

    fn request() -> DiscoveryRequest {
        DiscoveryRequest::new(
            "https://mcp.zapier.com/endpoint",
            &[
                HeaderEntry::new("Authorization", "Bearer t"),
                HeaderEntry::new("X-Blank", ""),
            ],
        )
    }

    #[tokio::test]
    async fn test_success_returns_tools_in_order() {
        let backend = FakeBackend::new().with_reply(HttpReply::json(
            200,
            &json!({"tools": [
                {"name": "send_email", "description": "Send an email"},
                {"name": "find_contact"}
            ]}),
        ));
        let requests = backend.requests();

        let tools = client(backend).list_tools(&request()).await.unwrap();

        assert_eq!(
            tools,
            vec![
                ToolSummary::new("send_email").with_description("Send an email"),
                ToolSummary::new("find_contact"),
            ]
        );
        let sent = requests.lock().unwrap()[0].clone();
        assert_eq!(sent.url, "http://localhost:3000/api/mcp/list-tools");
        assert_eq!(
            sent.body,
            json!({
                "serverUrl": "https://mcp.zapier.com/endpoint",
                "headers": [{"key": "Authorization", "value": "Bearer t"}]
            })
        );
    }

    #[tokio::test]
    async fn test_non_array_tools_is_empty() {
        let backend = FakeBackend::new().with_reply(HttpReply::json(200, &json!({"tools": null})));
        let tools = client(backend).list_tools(&request()).await.unwrap();
        assert!(tools.is_empty());

        let backend = FakeBackend::new().with_reply(HttpReply::json(200, &json!({})));
        let tools = client(backend).list_tools(&request()).await.unwrap();
        assert!(tools.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_tool_entry_fails_the_call() {
        let backend = FakeBackend::new().with_reply(HttpReply::json(
            200,
            &json!({"tools": [
                {"name": "a"},
                {"description": "nameless"},
                {"name": 7},
                {"name": "b"}
            ]}),
        ));

        let err = client(backend).list_tools(&request()).await.unwrap_err();

        assert!(matches!(err, DiscoveryError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_error_message_is_verbatim() {
        let backend = FakeBackend::new()
            .with_reply(HttpReply::json(502, &json!({"error": "fetch failed"})));

        let err = client(backend).list_tools(&request()).await.unwrap_err();

        assert_eq!(
            err,
            DiscoveryError::Remote {
                status: 502,
                message: "fetch failed".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_error_without_message_uses_fallback() {
        let backend = FakeBackend::new().with_reply(HttpReply::text(500, "Internal Server Error"));
        let err = client(backend).list_tools(&request()).await.unwrap_err();
        assert_eq!(err.to_string(), PROXY_FAILURE_MESSAGE);

        let backend = FakeBackend::new().with_reply(HttpReply::json(400, &json!({"error": ""})));
        let err = client(backend).list_tools(&request()).await.unwrap_err();
        assert_eq!(err.to_string(), PROXY_FAILURE_MESSAGE);
    }

    #[test]
    fn test_network_failure_is_passed_through() {
        let backend = FakeBackend::new().with_error(McpHttpError::InvalidResponse {
            message: "connection reset".to_string(),
        });
        let err = tokio_test::block_on(client(backend).list_tools(&request())).unwrap_err();
        assert_eq!(err.to_string(), "Invalid response from MCP server: connection reset");
    }

    #[tokio::test]
    async fn test_malformed_success_body_is_invalid_response() {
        let backend = FakeBackend::new().with_reply(HttpReply::text(200, "<html>"));
        let err = client(backend).list_tools(&request()).await.unwrap_err();
        assert!(matches!(err, DiscoveryError::InvalidResponse(_)));
    }

    #[test]
    fn test_new_rejects_bad_endpoint() {
        let result = DefaultProxyClient::new("not a url", &DiscoveryClientConfig::default());
        assert!(matches!(result, Err(DiscoveryError::InvalidUrl(_))));
    }
}
