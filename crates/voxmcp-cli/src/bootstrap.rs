//! CLI bootstrap and composition root.
//!
//! Wires the SQLite store, the discovery client and the built-in catalogs
//! into a [`CliContext`] that handlers borrow.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use voxmcp_core::{
    ConnectorCatalog, ConnectorRegistry, KeyValueStore, NoopEmitter, ScenarioCatalog,
    ToolDiscoveryPort, data_root_from, database_path_in,
};
use voxmcp_db::{StoreFactory, setup_database};
use voxmcp_mcp::{DEFAULT_TIMEOUT, DiscoveryClientConfig, build_discovery};

use crate::error::{CliError, CliResult};

/// Configuration for CLI bootstrap.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Data directory override; falls back to the platform default.
    pub data_dir: Option<String>,
    /// Proxy endpoint used for tool discovery instead of direct MCP calls.
    pub discovery_url: Option<String>,
    pub discovery_timeout: Duration,
}

impl CliConfig {
    /// Create config with default values.
    pub const fn with_defaults() -> Self {
        Self {
            data_dir: None,
            discovery_url: None,
            discovery_timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Resolve the data root and database file without opening anything.
    pub fn resolve_paths(&self) -> CliResult<ResolvedPaths> {
        let data_root = data_root_from(self.data_dir.as_deref())?;
        let database = database_path_in(&data_root)?;
        Ok(ResolvedPaths {
            data_root,
            database,
        })
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Filesystem locations used by the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub data_root: PathBuf,
    pub database: PathBuf,
}

/// CLI context holding the composed adapters.
pub struct CliContext {
    store: Arc<dyn KeyValueStore>,
    discovery: Arc<dyn ToolDiscoveryPort>,
    scenarios: ScenarioCatalog,
    catalog: ConnectorCatalog,
    paths: ResolvedPaths,
}

impl CliContext {
    pub const fn scenarios(&self) -> &ScenarioCatalog {
        &self.scenarios
    }

    pub const fn catalog(&self) -> &ConnectorCatalog {
        &self.catalog
    }

    pub const fn paths(&self) -> &ResolvedPaths {
        &self.paths
    }

    /// Load the registry for a scenario, falling back to the default one.
    pub async fn open_registry(&self, scenario: Option<&str>) -> ConnectorRegistry {
        let key = self.scenarios.resolve(scenario);
        ConnectorRegistry::load(
            Arc::clone(&self.store),
            Arc::clone(&self.discovery),
            Arc::new(NoopEmitter::new()),
            self.catalog.clone(),
            key,
        )
        .await
    }
}

/// Bootstrap the CLI with all dependencies wired up.
pub async fn bootstrap(config: CliConfig) -> CliResult<CliContext> {
    let paths = config.resolve_paths()?;

    let pool = setup_database(&paths.database)
        .await
        .map_err(|e| CliError::Database(format!("{e:#}")))?;
    let store = StoreFactory::build_store(pool);

    let discovery_config = DiscoveryClientConfig::new()
        .with_optional_endpoint(config.discovery_url)
        .with_timeout(config.discovery_timeout);
    let discovery = build_discovery(&discovery_config)?;

    tracing::debug!(
        data_root = %paths.data_root.display(),
        proxy = discovery_config.endpoint_url().is_some(),
        "CLI context ready"
    );

    Ok(CliContext {
        store,
        discovery,
        scenarios: ScenarioCatalog::builtin(),
        catalog: ConnectorCatalog::builtin(),
        paths,
    })
}
