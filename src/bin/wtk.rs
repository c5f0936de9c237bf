//! `wtk` binary entry point.

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use wtk::cli::{display_error_with_suggestions, run, Cli};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.global.debug { "wtk=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();

    let command = cli.command.name();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            display_error_with_suggestions(&e, &format!("'{}' failed", command));
            ExitCode::FAILURE
        }
    }
}
