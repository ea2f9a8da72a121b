//! Registry state container and its pure transitions.
//!
//! `RegistryState` holds the active server list and the draft. Every method is
//! synchronous and free of I/O; `ConnectorRegistry` drives the discovery call
//! and persistence around these transitions.

use chrono::{DateTime, Utc};

use crate::domain::connector::{
    ConnectionStatus, ConnectorCatalog, ConnectorCategory, DraftServer, HeaderEntry, HeaderField,
    ServerConfig, ToolSummary,
};
use crate::ports::{DiscoveryRequest, RegistryError, RequiredField};

/// A draft that passed the local checks and is ready for discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub label: String,
    pub server_url: String,
    /// Complete headers only.
    pub headers: Vec<HeaderEntry>,
    pub allowed_tools: Option<Vec<String>>,
    pub category: ConnectorCategory,
    pub source_id: String,
    pub notes: Option<String>,
}

impl Submission {
    /// Discovery request for this submission.
    pub fn discovery_request(&self) -> DiscoveryRequest {
        DiscoveryRequest::new(self.server_url.clone(), &self.headers)
    }

    fn into_server(self, tools: Vec<ToolSummary>, checked_at: DateTime<Utc>) -> ServerConfig {
        ServerConfig {
            id: uuid::Uuid::new_v4().to_string(),
            label: self.label,
            server_url: self.server_url,
            headers: self.headers,
            allowed_tools: self.allowed_tools,
            category: self.category,
            source_id: Some(self.source_id),
            notes: self.notes,
            status: ConnectionStatus::Connected,
            tools,
            last_checked_at: Some(checked_at),
            error_message: None,
        }
    }
}

/// Active registry plus the in-progress draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryState {
    servers: Vec<ServerConfig>,
    draft: DraftServer,
}

impl RegistryState {
    pub fn new(catalog: &ConnectorCatalog, servers: Vec<ServerConfig>) -> Self {
        Self {
            servers,
            draft: DraftServer::new(catalog),
        }
    }

    pub fn servers(&self) -> &[ServerConfig] {
        &self.servers
    }

    pub const fn draft(&self) -> &DraftServer {
        &self.draft
    }

    /// Direct access for free-text fields (label, URL, allow-list, notes).
    pub const fn draft_mut(&mut self) -> &mut DraftServer {
        &mut self.draft
    }

    pub fn select_template(&mut self, catalog: &ConnectorCatalog, id: &str) {
        self.draft.select_template(catalog, id);
    }

    pub fn add_header(&mut self) -> String {
        self.draft.add_header()
    }

    pub fn update_header(&mut self, id: &str, field: HeaderField, value: impl Into<String>) {
        self.draft.update_header(id, field, value);
    }

    pub fn remove_header(&mut self, id: &str) {
        self.draft.remove_header(id);
    }

    pub fn reset_draft(&mut self, catalog: &ConnectorCatalog) {
        self.draft = DraftServer::new(catalog);
    }

    /// Swap in another scenario's registry and start a fresh draft.
    pub fn replace(&mut self, catalog: &ConnectorCatalog, servers: Vec<ServerConfig>) {
        self.servers = servers;
        self.reset_draft(catalog);
    }

    /// Run the local checks on the draft.
    ///
    /// # Errors
    ///
    /// `MissingField` when the trimmed label or URL is empty, `Duplicate`
    /// when an existing entry has the same label (ignoring case) or URL.
    pub fn prepare_submission(&self) -> Result<Submission, RegistryError> {
        let label = self.draft.label.trim();
        let server_url = self.draft.server_url.trim();

        if label.is_empty() {
            return Err(RegistryError::MissingField(RequiredField::Label));
        }
        if server_url.is_empty() {
            return Err(RegistryError::MissingField(RequiredField::ServerUrl));
        }

        let label_lower = label.to_lowercase();
        let duplicate = self.servers.iter().any(|existing| {
            existing.server_url == server_url || existing.label.to_lowercase() == label_lower
        });
        if duplicate {
            return Err(RegistryError::Duplicate {
                label: label.to_string(),
                server_url: server_url.to_string(),
            });
        }

        let notes = self.draft.notes.trim();
        Ok(Submission {
            label: label.to_string(),
            server_url: server_url.to_string(),
            headers: self
                .draft
                .headers
                .iter()
                .filter(|header| header.is_complete())
                .cloned()
                .collect(),
            allowed_tools: self.draft.allowed_tools(),
            category: self.draft.category,
            source_id: self.draft.connector_id.clone(),
            notes: (!notes.is_empty()).then(|| notes.to_string()),
        })
    }

    /// Append the server produced by a successful discovery call and clear the draft.
    pub fn accept(
        &mut self,
        catalog: &ConnectorCatalog,
        submission: Submission,
        tools: Vec<ToolSummary>,
        checked_at: DateTime<Utc>,
    ) -> &ServerConfig {
        self.servers.push(submission.into_server(tools, checked_at));
        self.reset_draft(catalog);
        let last = self.servers.len() - 1;
        &self.servers[last]
    }

    /// Remove a server by id, returning it if it was present.
    pub fn remove(&mut self, id: &str) -> Option<ServerConfig> {
        let index = self.servers.iter().position(|server| server.id == id)?;
        Some(self.servers.remove(index))
    }
}
