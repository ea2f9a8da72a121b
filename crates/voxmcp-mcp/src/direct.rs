//! Direct MCP client over the streamable HTTP transport.
//!
//! Runs the minimal handshake needed to list tools:
//!
//! 1. `initialize` (JSON-RPC 2.0 request)
//! 2. `notifications/initialized` (notification, no reply expected)
//! 3. `tools/list`, repeated while the server returns a `nextCursor`
//!
//! Every request carries the caller's headers and, once the server has
//! assigned one, the `Mcp-Session-Id` header. Replies may be plain JSON or a
//! `text/event-stream` body containing the JSON-RPC messages.
//!
//! Reference: <https://spec.modelcontextprotocol.io/>

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use url::Url;

use voxmcp_core::{DiscoveryError, DiscoveryRequest, ToolDiscoveryPort, ToolSummary};

use crate::config::DiscoveryClientConfig;
use crate::error::{McpHttpError, McpHttpResult, map_error};
use crate::http::{HttpBackend, HttpReply, ReqwestBackend, SESSION_HEADER};

/// MCP protocol revision announced during `initialize`.
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// Upper bound on `tools/list` pages followed for one server.
const MAX_PAGES: usize = 100;

/// Longest body excerpt copied into an HTTP error message.
const MAX_ERROR_BODY: usize = 200;

/// Direct client using the reqwest backend.
pub type DefaultDirectClient = DirectDiscoveryClient<ReqwestBackend>;

/// JSON-RPC 2.0 request or notification.
#[derive(Debug, Serialize)]
struct JsonRpcRequest<'a> {
    jsonrpc: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<u64>,
    method: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    params: Option<Value>,
}

/// JSON-RPC 2.0 response.
#[derive(Debug, Deserialize)]
struct JsonRpcResponse {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<JsonRpcError>,
}

/// JSON-RPC 2.0 error.
#[derive(Debug, Deserialize)]
struct JsonRpcError {
    code: i64,
    message: String,
}

/// The parts of the `initialize` result we log.
#[derive(Debug, Deserialize)]
struct InitializeResult {
    #[serde(rename = "protocolVersion")]
    protocol_version: String,
    #[serde(rename = "serverInfo", default)]
    server_info: Option<ServerInfo>,
}

#[derive(Debug, Deserialize)]
struct ServerInfo {
    name: String,
}

/// One page of `tools/list`.
#[derive(Debug, Deserialize)]
struct ToolsPage {
    #[serde(default)]
    tools: Vec<McpToolSchema>,
    #[serde(rename = "nextCursor", default)]
    next_cursor: Option<String>,
}

/// MCP tool from tools/list; the input schema is not needed here.
#[derive(Debug, Deserialize)]
struct McpToolSchema {
    name: String,
    #[serde(default)]
    description: Option<String>,
}

impl From<McpToolSchema> for ToolSummary {
    fn from(tool: McpToolSchema) -> Self {
        Self {
            name: tool.name,
            description: tool.description,
        }
    }
}

/// Discovery by talking to the MCP server itself.
pub struct DirectDiscoveryClient<B: HttpBackend> {
    backend: B,
    client_name: String,
}

impl DefaultDirectClient {
    pub fn new(config: &DiscoveryClientConfig) -> Result<Self, DiscoveryError> {
        let backend = ReqwestBackend::new(config).map_err(map_error)?;
        Ok(Self::with_backend(backend, config.client_name.clone()))
    }
}

impl<B: HttpBackend> DirectDiscoveryClient<B> {
    /// Create a client with a custom backend.
    pub const fn with_backend(backend: B, client_name: String) -> Self {
        Self {
            backend,
            client_name,
        }
    }

    async fn fetch(&self, request: &DiscoveryRequest) -> McpHttpResult<Vec<ToolSummary>> {
        let url = Url::parse(&request.server_url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(McpHttpError::UnsupportedScheme(url.scheme().to_string()));
        }

        let headers = request
            .headers
            .iter()
            .map(|header| (header.key.clone(), header.value.clone()))
            .collect();
        let mut session = Session::new(&self.backend, url, headers);

        let init = session
            .request(
                "initialize",
                Some(json!({
                    "protocolVersion": PROTOCOL_VERSION,
                    "clientInfo": {
                        "name": self.client_name,
                        "version": env!("CARGO_PKG_VERSION")
                    },
                    "capabilities": {}
                })),
            )
            .await?;
        let init: InitializeResult = serde_json::from_value(init)?;
        tracing::debug!(
            server_url = %request.server_url,
            server_name = init.server_info.as_ref().map_or("", |info| info.name.as_str()),
            protocol_version = %init.protocol_version,
            "MCP session initialized"
        );

        session.notify("notifications/initialized").await?;

        let mut tools = Vec::new();
        let mut cursor: Option<String> = None;
        for _ in 0..MAX_PAGES {
            let params = cursor.take().map(|cursor| json!({ "cursor": cursor }));
            let result = session.request("tools/list", params).await?;
            let page: ToolsPage = serde_json::from_value(result)?;
            tools.extend(page.tools.into_iter().map(ToolSummary::from));

            match page.next_cursor {
                Some(next) if !next.is_empty() => cursor = Some(next),
                _ => return Ok(tools),
            }
        }

        Err(McpHttpError::invalid(format!(
            "tools/list did not finish after {MAX_PAGES} pages"
        )))
    }
}

#[async_trait]
impl<B: HttpBackend> ToolDiscoveryPort for DirectDiscoveryClient<B> {
    async fn list_tools(
        &self,
        request: &DiscoveryRequest,
    ) -> Result<Vec<ToolSummary>, DiscoveryError> {
        tracing::debug!(server_url = %request.server_url, "Listing MCP tools");
        self.fetch(request).await.map_err(map_error)
    }
}

/// State of one streamable-HTTP exchange.
struct Session<'a, B: HttpBackend> {
    backend: &'a B,
    url: Url,
    headers: Vec<(String, String)>,
    session_id: Option<String>,
    next_id: u64,
}

impl<'a, B: HttpBackend> Session<'a, B> {
    const fn new(backend: &'a B, url: Url, headers: Vec<(String, String)>) -> Self {
        Self {
            backend,
            url,
            headers,
            session_id: None,
            next_id: 1,
        }
    }

    /// Send a request and return its `result`.
    async fn request(&mut self, method: &str, params: Option<Value>) -> McpHttpResult<Value> {
        let id = self.next_id;
        self.next_id += 1;

        let body = serde_json::to_value(JsonRpcRequest {
            jsonrpc: "2.0",
            id: Some(id),
            method,
            params,
        })?;
        let reply = self.post(&body).await?;

        let response = find_response(&reply, id)?;
        if let Some(error) = response.error {
            return Err(McpHttpError::Rpc {
                status: reply.status,
                code: error.code,
                message: error.message,
            });
        }
        response
            .result
            .ok_or_else(|| McpHttpError::invalid(format!("{method} reply has no result")))
    }

    /// Send a notification; any success status is accepted.
    async fn notify(&mut self, method: &str) -> McpHttpResult<()> {
        let body = serde_json::to_value(JsonRpcRequest {
            jsonrpc: "2.0",
            id: None,
            method,
            params: None,
        })?;
        self.post(&body).await.map(|_| ())
    }

    async fn post(&mut self, body: &Value) -> McpHttpResult<HttpReply> {
        let mut headers = self.headers.clone();
        if let Some(session_id) = &self.session_id {
            headers.push((SESSION_HEADER.to_string(), session_id.clone()));
        }

        let reply = self.backend.post_json(&self.url, &headers, body).await?;
        if !reply.is_success() {
            return Err(McpHttpError::Status {
                status: reply.status,
                message: status_message(&reply),
            });
        }
        if reply.session_id.is_some() {
            self.session_id.clone_from(&reply.session_id);
        }
        Ok(reply)
    }
}

/// Locate the response to request `id` in a JSON or event-stream reply.
fn find_response(reply: &HttpReply, id: u64) -> McpHttpResult<JsonRpcResponse> {
    let messages = if reply.is_event_stream() {
        parse_sse_messages(&reply.body)
    } else {
        match serde_json::from_str::<Value>(&reply.body)? {
            Value::Array(batch) => batch,
            single => vec![single],
        }
    };

    messages
        .into_iter()
        .filter(|message| message.get("id").and_then(Value::as_u64) == Some(id))
        .find_map(|message| serde_json::from_value::<JsonRpcResponse>(message).ok())
        .filter(|response| response.id.is_some())
        .ok_or_else(|| McpHttpError::invalid(format!("no response for request {id}")))
}

/// Collect the JSON payloads of an event-stream body.
///
/// Multi-line `data:` fields are joined with `\n`; events that are not valid
/// JSON are skipped.
fn parse_sse_messages(body: &str) -> Vec<Value> {
    let mut messages = Vec::new();
    let mut data: Vec<&str> = Vec::new();

    let mut flush = |data: &mut Vec<&str>| {
        if data.is_empty() {
            return;
        }
        let payload = data.join("\n");
        data.clear();
        match serde_json::from_str::<Value>(&payload) {
            Ok(value) => messages.push(value),
            Err(e) => tracing::debug!(error = %e, "Skipping non-JSON event"),
        }
    };

    for line in body.lines() {
        if line.is_empty() {
            flush(&mut data);
        } else if let Some(rest) = line.strip_prefix("data:") {
            data.push(rest.strip_prefix(' ').unwrap_or(rest));
        }
    }
    flush(&mut data);

    messages
}

/// Message for a non-success reply: the JSON-RPC error message when present,
/// otherwise an excerpt of the body.
fn status_message(reply: &HttpReply) -> String {
    let rpc_message = serde_json::from_str::<JsonRpcResponse>(&reply.body)
        .ok()
        .and_then(|response| response.error)
        .map(|error| error.message);
    if let Some(message) = rpc_message {
        return message;
    }

    let body = reply.body.trim();
    if body.is_empty() {
        format!("MCP server returned HTTP {}", reply.status)
    } else {
        let excerpt: String = body.chars().take(MAX_ERROR_BODY).collect();
        format!("MCP server returned HTTP {}: {excerpt}", reply.status)
    }
}
