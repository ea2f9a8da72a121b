//! Catalog command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::presentation::print_separator;

/// Print connector templates grouped by category.
pub fn execute(ctx: &CliContext) -> Result<()> {
    for (category, entries) in ctx.catalog().grouped() {
        println!("{}", category.display_name());
        print_separator(60);
        for entry in entries {
            let auth = if entry.requires_auth_headers {
                " [auth headers required]"
            } else {
                ""
            };
            println!("  {:<22} {}{auth}", entry.id, entry.name);
            if let Some(description) = &entry.description {
                println!("  {:<22} {description}", "");
            }
            if let Some(url) = &entry.server_url {
                println!("  {:<22} url: {url}", "");
            }
            if let Some(docs) = &entry.documentation_url {
                println!("  {:<22} docs: {docs}", "");
            }
        }
        println!();
    }
    Ok(())
}
