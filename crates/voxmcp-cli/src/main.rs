//! voxmcp command-line entry point.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use voxmcp_cli::bootstrap::{CliConfig, CliContext, bootstrap};
use voxmcp_cli::commands::Commands;
use voxmcp_cli::error::CliError;
use voxmcp_cli::handlers;
use voxmcp_cli::parser::Cli;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err:#}");
        let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
        std::process::exit(code);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let config = CliConfig {
        data_dir: cli.data_dir,
        discovery_url: cli.discovery_url,
        discovery_timeout: Duration::from_secs(cli.timeout_secs),
    };

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let ctx = bootstrap(config).await?;
    dispatch(&ctx, command).await
}

async fn dispatch(ctx: &CliContext, command: Commands) -> Result<()> {
    match command {
        Commands::Scenarios => handlers::scenarios::execute(ctx),
        Commands::Catalog => handlers::catalog::execute(ctx),
        Commands::List { scenario } => handlers::list::execute(ctx, scenario.as_deref()).await,
        Commands::Add(args) => handlers::add::execute(ctx, &args).await,
        Commands::Remove { id, scenario } => {
            handlers::remove::execute(ctx, &id, scenario.as_deref()).await
        }
        Commands::SessionPayload { scenario } => {
            handlers::session_payload::execute(ctx, scenario.as_deref()).await
        }
        Commands::Paths => handlers::paths::execute(ctx.paths()),
    }
}
