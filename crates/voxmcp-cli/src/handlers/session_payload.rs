//! Session-payload command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;

/// Print the JSON server list handed to realtime session startup.
pub async fn execute(ctx: &CliContext, scenario: Option<&str>) -> Result<()> {
    let registry = ctx.open_registry(scenario).await;
    let payload = registry.session_payloads();
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}
