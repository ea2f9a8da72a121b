//! List command handler.

use anyhow::Result;
use voxmcp_core::ServerConfig;

use crate::bootstrap::CliContext;
use crate::presentation::{format_optional, print_separator, truncate_string};

/// List MCP servers configured for a scenario.
pub async fn execute(ctx: &CliContext, scenario: Option<&str>) -> Result<()> {
    let registry = ctx.open_registry(scenario).await;
    let servers = registry.servers();

    if servers.is_empty() {
        println!(
            "No MCP servers configured for scenario '{}'.",
            registry.scenario()
        );
        println!("Use 'voxmcp add --label <LABEL> --url <URL>' to add one.");
        return Ok(());
    }

    println!(
        "{} MCP server(s) for scenario '{}':",
        servers.len(),
        registry.scenario()
    );
    print_separator(100);
    for server in servers {
        print_server(server);
    }
    Ok(())
}

fn print_server(server: &ServerConfig) {
    println!(
        "{:<36}  {:<24}  {}",
        server.id,
        truncate_string(&server.label, 24),
        server.status_summary()
    );
    println!("    url:      {}", server.server_url);
    if let Some(source) = &server.source_id {
        println!("    template: {source}");
    }
    if !server.tools.is_empty() {
        let names: Vec<&str> = server.tools.iter().map(|t| t.name.as_str()).collect();
        println!("    tools:    {}", truncate_string(&names.join(", "), 80));
    }
    if let Some(allowed) = &server.allowed_tools {
        println!("    allowed:  {}", allowed.join(", "));
    }
    if let Some(error) = &server.error_message {
        println!("    error:    {error}");
    }
    println!(
        "    checked:  {}",
        format_optional(
            server
                .last_checked_at
                .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC")),
            "never"
        )
    );
    if let Some(notes) = &server.notes {
        println!("    notes:    {}", truncate_string(notes, 80));
    }
}
