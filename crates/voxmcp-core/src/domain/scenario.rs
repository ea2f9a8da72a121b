//! Agent scenarios that connector registries are namespaced by.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Key of the scenario selected when none (or an unknown one) is requested.
pub const DEFAULT_SCENARIO_KEY: &str = "chatSupervisor";

/// Prefix of the storage key holding a scenario's server list.
const STORAGE_KEY_PREFIX: &str = "mcpServers:";

/// Identifier of an agent scenario.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScenarioKey(String);

impl ScenarioKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Storage key under which this scenario's registry is persisted.
    pub fn storage_key(&self) -> String {
        format!("{STORAGE_KEY_PREFIX}{}", self.0)
    }
}

impl fmt::Display for ScenarioKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ScenarioKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A named agent configuration set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub key: ScenarioKey,
    pub label: String,
}

/// The scenarios known to the application.
#[derive(Debug, Clone)]
pub struct ScenarioCatalog {
    scenarios: Vec<Scenario>,
    default_key: ScenarioKey,
}

impl ScenarioCatalog {
    pub fn builtin() -> Self {
        let scenarios = [
            ("simpleHandoff", "Simple Handoff"),
            ("customerServiceRetail", "Customer Service Retail"),
            ("chatSupervisor", "Chat Supervisor"),
            ("personalAssistant", "Personal Assistant"),
        ]
        .into_iter()
        .map(|(key, label)| Scenario {
            key: ScenarioKey::new(key),
            label: label.to_string(),
        })
        .collect();

        Self {
            scenarios,
            default_key: ScenarioKey::new(DEFAULT_SCENARIO_KEY),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Scenario> {
        self.scenarios.iter()
    }

    pub fn get(&self, key: &str) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.key.as_str() == key)
    }

    pub const fn default_key(&self) -> &ScenarioKey {
        &self.default_key
    }

    /// Resolve a requested key, falling back to the default scenario.
    pub fn resolve(&self, requested: Option<&str>) -> ScenarioKey {
        match requested {
            Some(key) if self.get(key).is_some() => ScenarioKey::new(key),
            Some(key) => {
                tracing::warn!(
                    requested = %key,
                    fallback = %self.default_key,
                    "Unknown scenario, using default"
                );
                self.default_key.clone()
            }
            None => self.default_key.clone(),
        }
    }
}

impl Default for ScenarioCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
