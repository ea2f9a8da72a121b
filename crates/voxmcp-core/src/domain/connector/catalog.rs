//! Built-in connector template catalog.

use super::types::{ConnectorCategory, ConnectorDefinition};

/// Identifier of the catch-all template for hand-configured servers.
pub const CUSTOM_CONNECTOR_ID: &str = "http-custom";

/// Immutable list of connector templates, loaded once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectorCatalog {
    entries: Vec<ConnectorDefinition>,
}

impl ConnectorCatalog {
    /// Build a catalog from an explicit list of definitions.
    pub const fn new(entries: Vec<ConnectorDefinition>) -> Self {
        Self { entries }
    }

    /// The templates shipped with the application.
    pub fn builtin() -> Self {
        Self::new(vec![
            ConnectorDefinition {
                id: "zapier-cloud".to_string(),
                name: "Zapier (Cloud)".to_string(),
                description: Some(
                    "Access Zapier-driven automations through the official Zapier MCP \
                     deployment. Requires Zapier auth headers."
                        .to_string(),
                ),
                category: ConnectorCategory::ThirdParty,
                server_url: None,
                documentation_url: Some(
                    "https://github.com/modelcontextprotocol/servers/tree/main/typescript/zapier"
                        .to_string(),
                ),
                requires_auth_headers: true,
                default_headers: vec![("Authorization".to_string(), "Bearer ".to_string())],
            },
            ConnectorDefinition {
                id: "google-drive-openai".to_string(),
                name: "Google Drive (OpenAI Connector)".to_string(),
                description: Some(
                    "Browse and retrieve Google Drive documents via the OpenAI-maintained \
                     MCP server. Requires OAuth headers."
                        .to_string(),
                ),
                category: ConnectorCategory::OpenAi,
                server_url: None,
                documentation_url: Some(
                    "https://github.com/modelcontextprotocol/servers".to_string(),
                ),
                requires_auth_headers: true,
                default_headers: Vec::new(),
            },
            ConnectorDefinition {
                id: "github-search".to_string(),
                name: "GitHub Search".to_string(),
                description: Some(
                    "Search repositories and issues with GitHub MCP server. Provide a PAT header."
                        .to_string(),
                ),
                category: ConnectorCategory::ThirdParty,
                server_url: None,
                documentation_url: Some(
                    "https://github.com/modelcontextprotocol/servers/tree/main/typescript/github"
                        .to_string(),
                ),
                requires_auth_headers: true,
                default_headers: Vec::new(),
            },
            ConnectorDefinition {
                id: CUSTOM_CONNECTOR_ID.to_string(),
                name: "Custom HTTP Endpoint".to_string(),
                description: Some(
                    "Use any remotely hosted MCP server by providing its URL and optional headers."
                        .to_string(),
                ),
                category: ConnectorCategory::Custom,
                server_url: None,
                documentation_url: None,
                requires_auth_headers: false,
                default_headers: Vec::new(),
            },
        ])
    }

    /// Look up a template by identifier.
    pub fn find(&self, id: &str) -> Option<&ConnectorDefinition> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// The template a fresh draft starts from.
    pub fn first(&self) -> Option<&ConnectorDefinition> {
        self.entries.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConnectorDefinition> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Templates grouped by category, in category display order.
    ///
    /// Every category is present, even when it has no templates; templates
    /// keep their catalog order within a group.
    pub fn grouped(&self) -> Vec<(ConnectorCategory, Vec<&ConnectorDefinition>)> {
        ConnectorCategory::ALL
            .iter()
            .map(|&category| {
                let members = self
                    .entries
                    .iter()
                    .filter(|entry| entry.category == category)
                    .collect();
                (category, members)
            })
            .collect()
    }
}

impl Default for ConnectorCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_contents() {
        let catalog = ConnectorCatalog::builtin();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.first().unwrap().id, "zapier-cloud");

        let zapier = catalog.find("zapier-cloud").unwrap();
        assert!(zapier.requires_auth_headers);
        assert_eq!(
            zapier.default_headers,
            vec![("Authorization".to_string(), "Bearer ".to_string())]
        );

        let custom = catalog.find(CUSTOM_CONNECTOR_ID).unwrap();
        assert_eq!(custom.category, ConnectorCategory::Custom);
        assert!(!custom.requires_auth_headers);
    }

    #[test]
    fn test_find_unknown_returns_none() {
        assert!(ConnectorCatalog::builtin().find("does-not-exist").is_none());
    }

    #[test]
    fn test_grouped_keeps_order_and_empty_groups() {
        let catalog = ConnectorCatalog::builtin();
        let groups = catalog.grouped();
        assert_eq!(groups.len(), 3);

        assert_eq!(groups[0].0, ConnectorCategory::OpenAi);
        assert_eq!(groups[0].1.len(), 1);

        let third_party: Vec<&str> = groups[1].1.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(third_party, vec!["zapier-cloud", "github-search"]);

        let empty = ConnectorCatalog::new(Vec::new());
        assert!(empty.grouped().iter().all(|(_, members)| members.is_empty()));
    }
}
