//! Connector registry service.
//!
//! Wraps `RegistryState` with the three effects of the registry: the
//! tool-discovery round-trip, write-through persistence under the active
//! scenario's key, and event broadcasting.

use std::sync::Arc;

use chrono::Utc;

use super::registry_state::RegistryState;
use crate::domain::connector::{
    ConnectorCatalog, DraftServer, HeaderField, ServerConfig, decode_registry, encode_registry,
};
use crate::domain::{McpServerRequestPayload, ScenarioKey, session_payloads};
use crate::events::AppEvent;
use crate::ports::{
    AppEventEmitter, KeyValueStore, RegistryError, StoreError, ToolDiscoveryPort,
};

/// The MCP connector registry for the active scenario.
pub struct ConnectorRegistry {
    store: Arc<dyn KeyValueStore>,
    discovery: Arc<dyn ToolDiscoveryPort>,
    emitter: Arc<dyn AppEventEmitter>,
    catalog: ConnectorCatalog,
    scenario: ScenarioKey,
    state: RegistryState,
}

impl ConnectorRegistry {
    /// Load the registry persisted for `scenario`.
    ///
    /// Missing or unreadable data yields an empty registry.
    pub async fn load(
        store: Arc<dyn KeyValueStore>,
        discovery: Arc<dyn ToolDiscoveryPort>,
        emitter: Arc<dyn AppEventEmitter>,
        catalog: ConnectorCatalog,
        scenario: ScenarioKey,
    ) -> Self {
        let servers = read_registry(store.as_ref(), &scenario).await;
        let state = RegistryState::new(&catalog, servers);
        emitter.emit(AppEvent::scenario_loaded(
            scenario.clone(),
            state.servers().len(),
        ));

        Self {
            store,
            discovery,
            emitter,
            catalog,
            scenario,
            state,
        }
    }

    pub const fn scenario(&self) -> &ScenarioKey {
        &self.scenario
    }

    pub const fn catalog(&self) -> &ConnectorCatalog {
        &self.catalog
    }

    pub fn servers(&self) -> &[ServerConfig] {
        self.state.servers()
    }

    pub const fn draft(&self) -> &DraftServer {
        self.state.draft()
    }

    pub const fn draft_mut(&mut self) -> &mut DraftServer {
        self.state.draft_mut()
    }

    /// Replace the active registry with the one stored for `scenario`.
    ///
    /// The draft is reset. Nothing from the previous scenario carries over.
    pub async fn switch_scenario(&mut self, scenario: ScenarioKey) {
        let servers = read_registry(self.store.as_ref(), &scenario).await;
        tracing::debug!(
            from = %self.scenario,
            to = %scenario,
            server_count = servers.len(),
            "Switching scenario"
        );
        self.state.replace(&self.catalog, servers);
        self.scenario = scenario;
        self.emitter.emit(AppEvent::scenario_loaded(
            self.scenario.clone(),
            self.state.servers().len(),
        ));
    }

    pub fn select_template(&mut self, id: &str) {
        self.state.select_template(&self.catalog, id);
    }

    pub fn add_header(&mut self) -> String {
        self.state.add_header()
    }

    pub fn update_header(&mut self, id: &str, field: HeaderField, value: impl Into<String>) {
        self.state.update_header(id, field, value);
    }

    pub fn remove_header(&mut self, id: &str) {
        self.state.remove_header(id);
    }

    pub fn reset_draft(&mut self) {
        self.state.reset_draft(&self.catalog);
    }

    /// Validate the draft against the remote server and add it on success.
    ///
    /// Local checks run first and reject without any network call. A failed
    /// discovery call leaves the registry and the draft untouched.
    ///
    /// # Errors
    ///
    /// `MissingField` / `Duplicate` for local rejections, `Discovery` when the
    /// round-trip fails.
    pub async fn validate_and_add(&mut self) -> Result<ServerConfig, RegistryError> {
        let submission = match self.state.prepare_submission() {
            Ok(submission) => submission,
            Err(e) => {
                tracing::debug!(
                    scenario = %self.scenario,
                    error = %e,
                    "Rejected MCP server draft"
                );
                return Err(self.reject(e));
            }
        };

        let request = submission.discovery_request();
        tracing::debug!(
            scenario = %self.scenario,
            server_label = %submission.label,
            server_url = %submission.server_url,
            header_count = request.headers.len(),
            "Listing tools for new MCP server"
        );

        let tools = match self.discovery.list_tools(&request).await {
            Ok(tools) => tools,
            Err(e) => {
                tracing::warn!(
                    scenario = %self.scenario,
                    server_label = %submission.label,
                    error = %e,
                    "MCP server validation failed"
                );
                return Err(self.reject(e.into()));
            }
        };

        let server = self
            .state
            .accept(&self.catalog, submission, tools, Utc::now())
            .clone();
        tracing::info!(
            scenario = %self.scenario,
            server_label = %server.label,
            tool_count = server.tools.len(),
            "Added MCP server"
        );

        self.persist().await;
        self.emitter
            .emit(AppEvent::connector_added(self.scenario.clone(), &server));
        Ok(server)
    }

    /// Remove a server. Returns whether an entry was removed.
    pub async fn remove(&mut self, id: &str) -> bool {
        let Some(removed) = self.state.remove(id) else {
            tracing::debug!(scenario = %self.scenario, server_id = %id, "No MCP server to remove");
            return false;
        };

        tracing::info!(
            scenario = %self.scenario,
            server_label = %removed.label,
            "Removed MCP server"
        );
        self.persist().await;
        self.emitter
            .emit(AppEvent::connector_removed(self.scenario.clone(), removed.id));
        true
    }

    /// Servers handed to realtime session startup.
    pub fn session_payloads(&self) -> Vec<McpServerRequestPayload> {
        session_payloads(self.state.servers())
    }

    /// Write the full registry under the active scenario's key.
    ///
    /// # Errors
    ///
    /// `Store` when encoding fails or the store rejects the write.
    pub async fn flush(&self) -> Result<(), RegistryError> {
        let encoded = encode_registry(self.state.servers())
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        self.store
            .set(&self.scenario.storage_key(), &encoded)
            .await?;
        Ok(())
    }

    async fn persist(&self) {
        if let Err(e) = self.flush().await {
            tracing::warn!(
                scenario = %self.scenario,
                error = %e,
                "Failed to persist MCP server registry"
            );
        }
    }

    fn reject(&self, error: RegistryError) -> RegistryError {
        self.emitter.emit(AppEvent::connector_validation_failed(
            self.scenario.clone(),
            self.state.draft().label.trim(),
            &error,
        ));
        error
    }
}

async fn read_registry(store: &dyn KeyValueStore, scenario: &ScenarioKey) -> Vec<ServerConfig> {
    let raw = match store.get(&scenario.storage_key()).await {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            tracing::warn!(
                scenario = %scenario,
                error = %e,
                "Failed to read stored MCP servers"
            );
            return Vec::new();
        }
    };

    decode_registry(&raw).unwrap_or_else(|e| {
        tracing::warn!(
            scenario = %scenario,
            error = %e,
            "Failed to parse stored MCP servers"
        );
        Vec::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::connector::{ConnectionStatus, ToolSummary};
    use crate::ports::{
        DiscoveryError, DiscoveryRequest, InMemoryKeyValueStore, NoopEmitter, RecordingEmitter,
    };
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Discovery fake returning a canned result and recording requests.
    struct FakeDiscovery {
        result: Result<Vec<ToolSummary>, DiscoveryError>,
        calls: Mutex<Vec<DiscoveryRequest>>,
    }

    impl FakeDiscovery {
        fn ok(tools: Vec<ToolSummary>) -> Arc<Self> {
            Arc::new(Self {
                result: Ok(tools),
                calls: Mutex::new(Vec::new()),
            })
        }

        fn failing(error: DiscoveryError) -> Arc<Self> {
            Arc::new(Self {
                result: Err(error),
                calls: Mutex::new(Vec::new()),
            })
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl ToolDiscoveryPort for FakeDiscovery {
        async fn list_tools(
            &self,
            request: &DiscoveryRequest,
        ) -> Result<Vec<ToolSummary>, DiscoveryError> {
            self.calls.lock().unwrap().push(request.clone());
            self.result.clone()
        }
    }

    /// Store whose writes always fail.
    struct ReadOnlyStore;

    #[async_trait]
    impl KeyValueStore for ReadOnlyStore {
        async fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Ok(None)
        }

        async fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Backend("read-only".to_string()))
        }

        async fn clear(&self, _key: &str) -> Result<(), StoreError> {
            Err(StoreError::Backend("read-only".to_string()))
        }
    }

    async fn registry_with(
        store: Arc<dyn KeyValueStore>,
        discovery: Arc<dyn ToolDiscoveryPort>,
        emitter: Arc<dyn AppEventEmitter>,
    ) -> ConnectorRegistry {
        ConnectorRegistry::load(
            store,
            discovery,
            emitter,
            ConnectorCatalog::builtin(),
            ScenarioKey::new("chatSupervisor"),
        )
        .await
    }

    fn fill_draft(registry: &mut ConnectorRegistry, label: &str, url: &str) {
        registry.draft_mut().label = label.to_string();
        registry.draft_mut().server_url = url.to_string();
    }

    #[tokio::test]
    async fn test_missing_label_makes_no_call() {
        let discovery = FakeDiscovery::ok(Vec::new());
        let emitter = RecordingEmitter::new();
        let mut registry = registry_with(
            Arc::new(InMemoryKeyValueStore::new()),
            discovery.clone(),
            Arc::new(emitter.clone()),
        )
        .await;
        fill_draft(&mut registry, "", "https://a.example.com");

        let err = registry.validate_and_add().await.unwrap_err();

        assert_eq!(err.to_string(), "Please provide a label for this MCP server.");
        assert_eq!(discovery.call_count(), 0);
        let events = emitter.events();
        assert_eq!(
            events.last().map(AppEvent::event_name),
            Some("connector:validation-failed")
        );
    }

    #[tokio::test]
    async fn test_success_persists_and_emits() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        let discovery = FakeDiscovery::ok(vec![ToolSummary::new("send_email")]);
        let emitter = RecordingEmitter::new();
        let mut registry =
            registry_with(store.clone(), discovery.clone(), Arc::new(emitter.clone())).await;
        fill_draft(&mut registry, "Zapier workspace", "https://mcp.zapier.com/endpoint");

        let server = registry.validate_and_add().await.unwrap();

        assert_eq!(server.status, ConnectionStatus::Connected);
        assert_eq!(registry.servers().len(), 1);
        assert!(registry.draft().label.is_empty());
        assert_eq!(discovery.call_count(), 1);

        let stored = store
            .get("mcpServers:chatSupervisor")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(decode_registry(&stored).unwrap(), registry.servers());

        let names: Vec<&str> = emitter.events().iter().map(AppEvent::event_name).collect();
        assert_eq!(names, vec!["scenario:loaded", "connector:added"]);
    }

    #[tokio::test]
    async fn test_discovery_failure_keeps_draft() {
        let discovery = FakeDiscovery::failing(DiscoveryError::Remote {
            status: 502,
            message: "401 Unauthorized".to_string(),
        });
        let mut registry = registry_with(
            Arc::new(InMemoryKeyValueStore::new()),
            discovery,
            Arc::new(NoopEmitter::new()),
        )
        .await;
        fill_draft(&mut registry, "Secured", "https://secure.example.com/mcp");

        let err = registry.validate_and_add().await.unwrap_err();

        assert_eq!(err.to_string(), "401 Unauthorized");
        assert!(registry.servers().is_empty());
        assert_eq!(registry.draft().label, "Secured");
    }

    #[tokio::test]
    async fn test_store_write_failure_keeps_in_memory_change() {
        let mut registry = registry_with(
            Arc::new(ReadOnlyStore),
            FakeDiscovery::ok(Vec::new()),
            Arc::new(NoopEmitter::new()),
        )
        .await;
        fill_draft(&mut registry, "Docs", "https://docs.example.com/mcp");

        registry.validate_and_add().await.unwrap();

        assert_eq!(registry.servers().len(), 1);
        let err = registry.flush().await.unwrap_err();
        assert!(matches!(err, RegistryError::Store(_)));
    }

    #[tokio::test]
    async fn test_corrupt_storage_loads_empty() {
        let store = InMemoryKeyValueStore::new().with_entry("mcpServers:chatSupervisor", "{oops");
        let registry = registry_with(
            Arc::new(store),
            FakeDiscovery::ok(Vec::new()),
            Arc::new(NoopEmitter::new()),
        )
        .await;

        assert!(registry.servers().is_empty());
    }

    #[tokio::test]
    async fn test_remove_persists_and_emits() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        let emitter = RecordingEmitter::new();
        let mut registry = registry_with(
            store.clone(),
            FakeDiscovery::ok(Vec::new()),
            Arc::new(emitter.clone()),
        )
        .await;
        fill_draft(&mut registry, "Docs", "https://docs.example.com/mcp");
        let server = registry.validate_and_add().await.unwrap();

        assert!(!registry.remove("missing").await);
        assert!(registry.remove(&server.id).await);

        assert!(registry.servers().is_empty());
        let stored = store
            .get("mcpServers:chatSupervisor")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored, "[]");
        assert_eq!(
            emitter.events().last().map(AppEvent::event_name),
            Some("connector:removed")
        );
    }

    #[tokio::test]
    async fn test_template_and_header_edits_reach_discovery() {
        let discovery = FakeDiscovery::ok(Vec::new());
        let mut registry = registry_with(
            Arc::new(InMemoryKeyValueStore::new()),
            discovery.clone(),
            Arc::new(NoopEmitter::new()),
        )
        .await;
        registry.select_template("zapier-cloud");
        let auth = registry.draft().headers[0].id.clone();
        registry.update_header(&auth, HeaderField::Value, "Bearer secret");
        let extra = registry.add_header();
        registry.remove_header(&extra);
        fill_draft(&mut registry, "Zapier", "https://mcp.zapier.com/endpoint");

        let server = registry.validate_and_add().await.unwrap();

        let calls = discovery.calls.lock().unwrap().clone();
        assert_eq!(calls[0].headers.len(), 1);
        assert_eq!(calls[0].headers[0].value, "Bearer secret");
        assert_eq!(server.source_id.as_deref(), Some("zapier-cloud"));
    }

    #[tokio::test]
    async fn test_reset_draft() {
        let mut registry = registry_with(
            Arc::new(InMemoryKeyValueStore::new()),
            FakeDiscovery::ok(Vec::new()),
            Arc::new(NoopEmitter::new()),
        )
        .await;
        registry.select_template("github-search");
        fill_draft(&mut registry, "Half", "https://half.example.com");

        registry.reset_draft();

        assert_eq!(registry.draft(), &DraftServer::new(registry.catalog()));
    }
}
