//! Remove command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;

/// Remove a server from a scenario by id.
pub async fn execute(ctx: &CliContext, id: &str, scenario: Option<&str>) -> Result<()> {
    let mut registry = ctx.open_registry(scenario).await;
    let label = registry
        .servers()
        .iter()
        .find(|s| s.id == id)
        .map(|s| s.label.clone());

    if registry.remove(id).await {
        registry.flush().await.map_err(crate::error::CliError::from)?;
        println!(
            "✅ Removed '{}' from scenario '{}'",
            label.unwrap_or_default(),
            registry.scenario()
        );
    } else {
        println!(
            "No MCP server with id '{id}' in scenario '{}'.",
            registry.scenario()
        );
    }
    Ok(())
}
