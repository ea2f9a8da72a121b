//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for the MCP connector registry.
///
/// Global options apply to every subcommand.
#[derive(Parser)]
#[command(name = "voxmcp")]
#[command(about = "Manage the MCP servers attached to voice-agent scenarios")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Override the data directory for this invocation
    #[arg(long = "data-dir", env = "VOXMCP_DATA_DIR", global = true)]
    pub data_dir: Option<String>,

    /// List tools through this proxy endpoint instead of contacting servers directly
    #[arg(long = "discovery-url", env = "VOXMCP_DISCOVERY_URL", global = true)]
    pub discovery_url: Option<String>,

    /// Discovery request timeout in seconds
    #[arg(long = "timeout", default_value_t = 10, global = true)]
    pub timeout_secs: u64,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from([
            "voxmcp",
            "--verbose",
            "--data-dir",
            "/tmp/voxmcp",
            "--discovery-url",
            "http://localhost:3000/api/mcp/list-tools",
            "list",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.data_dir.as_deref(), Some("/tmp/voxmcp"));
        assert_eq!(
            cli.discovery_url.as_deref(),
            Some("http://localhost:3000/api/mcp/list-tools")
        );
        assert_eq!(cli.timeout_secs, 10);
    }

    #[test]
    fn test_global_args_after_subcommand() {
        let cli = Cli::parse_from(["voxmcp", "list", "--timeout", "3", "-v"]);
        assert!(cli.verbose);
        assert_eq!(cli.timeout_secs, 3);
    }

    #[test]
    fn test_no_subcommand_is_allowed() {
        let cli = Cli::parse_from(["voxmcp"]);
        assert!(cli.command.is_none());
    }
}
