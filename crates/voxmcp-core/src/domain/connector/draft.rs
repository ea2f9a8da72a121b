//! Editable form state for a server that has not been validated yet.
//!
//! Every edit here is a pure state transition; nothing is checked until the
//! draft is submitted to the registry.

use super::catalog::{CUSTOM_CONNECTOR_ID, ConnectorCatalog};
use super::types::{ConnectorCategory, HeaderEntry, HeaderField};

/// In-progress server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftServer {
    pub label: String,
    pub server_url: String,
    /// Identifier of the selected catalog template.
    pub connector_id: String,
    pub headers: Vec<HeaderEntry>,
    /// Comma-separated tool allow-list as typed by the user.
    pub allowed_tools_raw: String,
    pub category: ConnectorCategory,
    pub notes: String,
}

impl DraftServer {
    /// A fresh draft positioned on the first catalog template.
    pub fn new(catalog: &ConnectorCatalog) -> Self {
        catalog.first().map_or_else(
            || Self {
                label: String::new(),
                server_url: String::new(),
                connector_id: CUSTOM_CONNECTOR_ID.to_string(),
                headers: Vec::new(),
                allowed_tools_raw: String::new(),
                category: ConnectorCategory::Custom,
                notes: String::new(),
            },
            |first| Self {
                label: String::new(),
                server_url: first.server_url.clone().unwrap_or_default(),
                connector_id: first.id.clone(),
                headers: Vec::new(),
                allowed_tools_raw: String::new(),
                category: first.category,
                notes: String::new(),
            },
        )
    }

    /// Apply a catalog template.
    ///
    /// An unknown id leaves the draft untouched. A known template replaces the
    /// header list wholesale when it carries default headers, and the URL when
    /// it carries a default URL.
    pub fn select_template(&mut self, catalog: &ConnectorCatalog, id: &str) {
        let Some(definition) = catalog.find(id) else {
            tracing::debug!(connector_id = %id, "Ignoring unknown connector template");
            return;
        };

        self.connector_id = definition.id.clone();
        self.category = definition.category;
        if let Some(url) = &definition.server_url {
            self.server_url.clone_from(url);
        }
        if !definition.default_headers.is_empty() {
            self.headers = definition
                .default_headers
                .iter()
                .map(|(key, value)| HeaderEntry::new(key, value))
                .collect();
        }
    }

    /// Append an empty header row and return its identifier.
    pub fn add_header(&mut self) -> String {
        let header = HeaderEntry::blank();
        let id = header.id.clone();
        self.headers.push(header);
        id
    }

    /// Edit one side of a header row. Unknown ids are ignored.
    pub fn update_header(&mut self, id: &str, field: HeaderField, value: impl Into<String>) {
        if let Some(header) = self.headers.iter_mut().find(|header| header.id == id) {
            match field {
                HeaderField::Key => header.key = value.into(),
                HeaderField::Value => header.value = value.into(),
            }
        }
    }

    /// Drop a header row. Unknown ids are ignored.
    pub fn remove_header(&mut self, id: &str) {
        self.headers.retain(|header| header.id != id);
    }

    /// Parsed allow-list; `None` when nothing but separators or blanks was typed.
    pub fn allowed_tools(&self) -> Option<Vec<String>> {
        parse_allowed_tools(&self.allowed_tools_raw)
    }
}

/// Split a comma-separated allow-list into trimmed, deduplicated names.
///
/// First occurrence wins the position. An empty result means "no restriction"
/// and is returned as `None`.
pub fn parse_allowed_tools(raw: &str) -> Option<Vec<String>> {
    let mut names: Vec<String> = Vec::new();
    for name in raw.split(',').map(str::trim).filter(|name| !name.is_empty()) {
        if !names.iter().any(|existing| existing == name) {
            names.push(name.to_string());
        }
    }
    if names.is_empty() { None } else { Some(names) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> ConnectorCatalog {
        ConnectorCatalog::builtin()
    }

    #[test]
    fn test_new_draft_starts_on_first_template() {
        let draft = DraftServer::new(&catalog());
        assert_eq!(draft.connector_id, "zapier-cloud");
        assert_eq!(draft.category, ConnectorCategory::ThirdParty);
        assert!(draft.label.is_empty());
        assert!(draft.headers.is_empty());
    }

    #[test]
    fn test_new_draft_with_empty_catalog_falls_back_to_custom() {
        let draft = DraftServer::new(&ConnectorCatalog::new(Vec::new()));
        assert_eq!(draft.connector_id, CUSTOM_CONNECTOR_ID);
        assert_eq!(draft.category, ConnectorCategory::Custom);
    }

    #[test]
    fn test_select_template_replaces_headers_wholesale() {
        let catalog = catalog();
        let mut draft = DraftServer::new(&catalog);
        let id = draft.add_header();
        draft.update_header(&id, HeaderField::Key, "X-Old");

        draft.select_template(&catalog, "zapier-cloud");

        assert_eq!(draft.headers.len(), 1);
        assert_eq!(draft.headers[0].key, "Authorization");
        assert_eq!(draft.headers[0].value, "Bearer ");
    }

    #[test]
    fn test_select_template_without_defaults_keeps_draft_values() {
        let catalog = catalog();
        let mut draft = DraftServer::new(&catalog);
        draft.server_url = "https://example.com/mcp".to_string();
        draft.add_header();

        draft.select_template(&catalog, "github-search");

        assert_eq!(draft.connector_id, "github-search");
        assert_eq!(draft.server_url, "https://example.com/mcp");
        assert_eq!(draft.headers.len(), 1);
    }

    #[test]
    fn test_select_unknown_template_is_noop() {
        let catalog = catalog();
        let mut draft = DraftServer::new(&catalog);
        draft.server_url = "https://example.com/mcp".to_string();
        let before = draft.clone();

        draft.select_template(&catalog, "nope");

        assert_eq!(draft, before);
    }

    #[test]
    fn test_header_edits() {
        let mut draft = DraftServer::new(&catalog());
        let first = draft.add_header();
        let second = draft.add_header();

        draft.update_header(&first, HeaderField::Key, "Authorization");
        draft.update_header(&first, HeaderField::Value, "Bearer t");
        draft.update_header("missing", HeaderField::Key, "ignored");
        draft.remove_header(&second);
        draft.remove_header("missing");

        assert_eq!(draft.headers.len(), 1);
        assert_eq!(draft.headers[0].key, "Authorization");
        assert_eq!(draft.headers[0].value, "Bearer t");
    }

    #[test]
    fn test_parse_allowed_tools() {
        assert_eq!(
            parse_allowed_tools(" send_email, search ,send_email,,"),
            Some(vec!["send_email".to_string(), "search".to_string()])
        );
        assert_eq!(parse_allowed_tools(""), None);
        assert_eq!(parse_allowed_tools(" , ,  "), None);
    }
}
