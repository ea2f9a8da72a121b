//! Main commands enum and argument value parsers.

use clap::{Args, Subcommand};

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// List agent scenarios
    Scenarios,

    /// List connector templates grouped by category
    Catalog,

    /// List MCP servers configured for a scenario
    List {
        #[command(flatten)]
        scenario: ScenarioArg,
    },

    /// Validate an MCP server and add it to a scenario
    Add(AddArgs),

    /// Remove an MCP server from a scenario
    Remove {
        /// ID of the server to remove (see `voxmcp list`)
        id: String,
        #[command(flatten)]
        scenario: ScenarioArg,
    },

    /// Print the MCP server list passed to session startup, as JSON
    SessionPayload {
        #[command(flatten)]
        scenario: ScenarioArg,
    },

    /// Show resolved data paths
    Paths,
}

/// Scenario selector shared by registry commands.
#[derive(Args, Debug, Clone, Default)]
pub struct ScenarioArg {
    /// Scenario key (defaults to chatSupervisor)
    #[arg(short, long = "scenario")]
    pub scenario: Option<String>,
}

impl ScenarioArg {
    pub fn as_deref(&self) -> Option<&str> {
        self.scenario.as_deref()
    }
}

/// Arguments of the `add` command.
#[derive(Args, Debug, Clone)]
pub struct AddArgs {
    /// Label shown for this server (unique within the scenario)
    #[arg(short, long)]
    pub label: String,

    /// Connector template to start from (see `voxmcp catalog`)
    #[arg(short, long)]
    pub template: Option<String>,

    /// MCP server URL
    #[arg(short, long)]
    pub url: Option<String>,

    /// HTTP header sent to the server, as NAME=VALUE (repeatable)
    #[arg(short = 'H', long = "header", value_parser = parse_header)]
    pub headers: Vec<(String, String)>,

    /// Comma-separated list of tools to expose (default: all)
    #[arg(long = "allowed-tools")]
    pub allowed_tools: Option<String>,

    /// Free-text notes
    #[arg(long)]
    pub notes: Option<String>,

    #[command(flatten)]
    pub scenario: ScenarioArg,
}

/// Parse a `NAME=VALUE` (or `NAME: VALUE`) header argument.
pub fn parse_header(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .or_else(|| raw.split_once(':'))
        .ok_or_else(|| format!("expected NAME=VALUE, got '{raw}'"))?;

    let key = key.trim();
    if key.is_empty() {
        return Err("header name cannot be empty".to_string());
    }
    Ok((key.to_string(), value.trim().to_string()))
}
