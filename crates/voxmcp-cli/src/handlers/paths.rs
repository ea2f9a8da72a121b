//! Paths command handler.

use anyhow::Result;

use crate::bootstrap::ResolvedPaths;

/// Print the resolved data locations.
pub fn execute(paths: &ResolvedPaths) -> Result<()> {
    println!("data_root = {}", paths.data_root.display());
    println!("database  = {}", paths.database.display());
    Ok(())
}
