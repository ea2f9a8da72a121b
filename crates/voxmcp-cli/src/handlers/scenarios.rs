//! Scenarios command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;

/// List the known scenarios, marking the default.
pub fn execute(ctx: &CliContext) -> Result<()> {
    let default_key = ctx.scenarios().default_key();
    for scenario in ctx.scenarios().iter() {
        let marker = if &scenario.key == default_key { "*" } else { " " };
        println!("{marker} {:<24} {}", scenario.key.as_str(), scenario.label);
    }
    Ok(())
}
