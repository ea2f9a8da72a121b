//! Command handlers.
//!
//! Each handler exposes `pub async fn execute(ctx: &CliContext, ...) -> Result<()>`
//! and owns both the registry calls and the terminal output for its command.
//! Errors that should pick a specific exit code are returned as
//! [`CliError`](crate::error::CliError) wrapped in `anyhow`.

pub mod add;
pub mod catalog;
pub mod list;
pub mod paths;
pub mod remove;
pub mod scenarios;
pub mod session_payload;
