//! HTTP backend abstraction for the discovery clients.
//!
//! Both clients only ever POST JSON, so the backend exposes exactly that.
//! Tests inject `testing::FakeBackend` in place of `ReqwestBackend`.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde_json::Value;
use url::Url;

use crate::config::DiscoveryClientConfig;
use crate::error::McpHttpResult;

/// Header carrying the streamable-HTTP session identifier.
pub const SESSION_HEADER: &str = "mcp-session-id";

/// `Accept` value required by the streamable HTTP transport.
const ACCEPT_JSON_OR_SSE: &str = "application/json, text/event-stream";

/// A reply, read fully into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub content_type: Option<String>,
    /// Value of the `Mcp-Session-Id` response header, if any.
    pub session_id: Option<String>,
    pub body: String,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_event_stream(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.starts_with("text/event-stream"))
    }
}

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that can POST a JSON body.
///
/// This is an implementation detail; external code should use the
/// `ToolDiscoveryPort` trait.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// POST `body` to `url` with extra request headers.
    async fn post_json(
        &self,
        url: &Url,
        headers: &[(String, String)],
        body: &Value,
    ) -> McpHttpResult<HttpReply>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a backend with the configured timeout and user agent.
    pub fn new(config: &DiscoveryClientConfig) -> McpHttpResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn post_json(
        &self,
        url: &Url,
        headers: &[(String, String)],
        body: &Value,
    ) -> McpHttpResult<HttpReply> {
        let mut request = self
            .client
            .post(url.as_str())
            .header(ACCEPT, ACCEPT_JSON_OR_SSE)
            .json(body);
        for (key, value) in headers {
            request = request.header(key.as_str(), value.as_str());
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let header_text = |name: &str| {
            response
                .headers()
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string)
        };
        let content_type = header_text(CONTENT_TYPE.as_str());
        let session_id = header_text(SESSION_HEADER);
        let body = response.text().await?;

        Ok(HttpReply {
            status,
            content_type,
            session_id,
            body,
        })
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
