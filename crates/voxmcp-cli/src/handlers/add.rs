//! Add command handler.
//!
//! Fills the registry draft from command-line arguments, then runs the same
//! validate-and-add workflow as any other front end.

use anyhow::Result;
use voxmcp_core::{CUSTOM_CONNECTOR_ID, ConnectorCatalog, DraftServer, HeaderEntry};

use crate::bootstrap::CliContext;
use crate::commands::AddArgs;
use crate::error::{CliError, CliResult};

/// Validate a server and add it to the selected scenario.
pub async fn execute(ctx: &CliContext, args: &AddArgs) -> Result<()> {
    let mut registry = ctx.open_registry(args.scenario.as_deref()).await;
    apply_to_draft(registry.draft_mut(), ctx.catalog(), args)?;

    println!("Listing tools from {} ...", registry.draft().server_url.trim());
    let server = registry.validate_and_add().await.map_err(CliError::from)?;
    registry.flush().await.map_err(CliError::from)?;

    println!(
        "✅ Added '{}' to scenario '{}' ({})",
        server.label,
        registry.scenario(),
        server.status_summary()
    );
    println!("   id: {}", server.id);
    for tool in &server.tools {
        match &tool.description {
            Some(description) => println!("   - {}: {description}", tool.name),
            None => println!("   - {}", tool.name),
        }
    }
    Ok(())
}

/// Copy arguments into the draft.
///
/// The template (the custom endpoint when none is given) is applied first so
/// explicit `--url` and `--header` values override its defaults. A header
/// whose name matches a template header (case-insensitively) replaces that
/// header's value.
pub fn apply_to_draft(
    draft: &mut DraftServer,
    catalog: &ConnectorCatalog,
    args: &AddArgs,
) -> CliResult<()> {
    let template = args.template.as_deref().unwrap_or(CUSTOM_CONNECTOR_ID);
    if catalog.find(template).is_none() {
        return Err(CliError::Arguments(format!(
            "unknown connector template '{template}' (see 'voxmcp catalog')"
        )));
    }
    draft.select_template(catalog, template);

    draft.label.clone_from(&args.label);
    if let Some(url) = &args.url {
        draft.server_url.clone_from(url);
    }

    for (key, value) in &args.headers {
        match draft
            .headers
            .iter_mut()
            .find(|h| h.key.eq_ignore_ascii_case(key))
        {
            Some(existing) => existing.value.clone_from(value),
            None => draft.headers.push(HeaderEntry::new(key, value)),
        }
    }

    if let Some(allowed) = &args.allowed_tools {
        draft.allowed_tools_raw.clone_from(allowed);
    }
    if let Some(notes) = &args.notes {
        draft.notes.clone_from(notes);
    }
    Ok(())
}
