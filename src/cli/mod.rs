//! Command-line interface for the built-in tools and agent teams.
//!
//! The `wtk` binary parses [`Cli`], builds an [`AppContext`] once and then
//! dispatches to one of the command modules. Every tool call is recorded
//! in the markdown session log.
//!
//! # Example
//!
//! ```no_run
//! use clap::Parser;
//! use wtk::cli::{run, Cli};
//!
//! # async fn example() -> wtk::cli::CliResult<()> {
//! let cli = Cli::parse_from(["wtk", "time", "Tokyo"]);
//! run(cli).await?;
//! # Ok(())
//! # }
//! ```

pub mod args;
pub mod commands;
pub mod context;
pub mod error;
pub mod utils;

// Re-exports for convenience
pub use args::{Cli, Commands, GlobalOptions};
pub use context::AppContext;
pub use error::{CliError, CliResult};
pub use utils::display_error_with_suggestions;

use crate::tools::{GET_CURRENT_TIME, GET_WEATHER, SAY_GOODBYE, SAY_HELLO};
use serde_json::{json, Value};
use std::collections::HashMap;

/// Run one CLI command.
pub async fn run(cli: Cli) -> CliResult<()> {
    let ctx = AppContext::load(&cli.global)?;
    let command = cli.command.name();

    let mut session = HashMap::new();
    session.insert("provider".to_string(), Value::String(ctx.provider.id().to_string()));
    session.insert(
        "config".to_string(),
        Value::String(ctx.config.config_path.display().to_string()),
    );
    ctx.logger.log_session_start(command, &session)?;

    let result = dispatch(&ctx, cli.command).await;

    match &result {
        Ok(()) => ctx.logger.log_completion(&format!("{} finished", command))?,
        Err(e) => ctx
            .logger
            .log_custom("Command Failed", &e.to_string(), Some("WARN"))?,
    }
    result
}

async fn dispatch(ctx: &AppContext, command: Commands) -> CliResult<()> {
    match command {
        Commands::Weather { city } => {
            commands::tools::run_tool(ctx, GET_WEATHER, json!({ "city": city.join(" ") })).await
        }
        Commands::Time { city } => {
            commands::tools::run_tool(ctx, GET_CURRENT_TIME, json!({ "city": city.join(" ") }))
                .await
        }
        Commands::Hello { name } => {
            commands::tools::run_tool(ctx, SAY_HELLO, json!({ "name": name })).await
        }
        Commands::Goodbye => commands::tools::run_tool(ctx, SAY_GOODBYE, json!({})).await,
        Commands::Call { tool, args } => {
            let args = commands::tools::parse_args(args.as_deref())?;
            commands::tools::run_tool(ctx, &tool, args).await
        }
        Commands::Tools { json } => commands::tools::list_tools(ctx, json),
        Commands::Agents { variant, json } => {
            commands::agents::show_agents(ctx, variant.as_deref(), json)
        }
        Commands::ConfigCheck => commands::config::config_check(ctx),
    }
}
