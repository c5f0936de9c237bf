//! Configuration check command
//!
//! Reports which configuration file, provider, API key and team layout
//! are in effect. Key values are never printed.

use crate::agent::TeamVariant;
use crate::cli::context::AppContext;
use crate::cli::error::{CliError, CliResult};
use colored::*;

/// One line of the check report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckItem {
    /// Whether the check passed.
    pub ok: bool,
    /// What was checked.
    pub message: String,
}

impl CheckItem {
    fn pass(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }

    fn fail(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }
}

/// Collect the check results without printing.
pub fn collect_checks(ctx: &AppContext) -> Vec<CheckItem> {
    let mut items = Vec::new();
    let config_path = ctx.config.config_path.display();

    if ctx.config.loaded_from_file() {
        items.push(CheckItem::pass(format!("Config file loaded: {}", config_path)));
    } else {
        items.push(CheckItem::pass(format!(
            "Config file not found, using defaults: {}",
            config_path
        )));
    }

    match ctx.env.env_file() {
        Some(path) if std::path::Path::new(path).exists() => {
            items.push(CheckItem::pass(format!("Env file loaded: {}", path)))
        }
        Some(path) => items.push(CheckItem::fail(format!("Env file does not exist: {}", path))),
        None => {}
    }

    items.push(CheckItem::pass(format!("Weather provider: {}", ctx.provider)));
    let key_var = ctx.provider.api_key_var();
    if ctx.has_api_key() {
        items.push(CheckItem::pass(format!("{} is set", key_var)));
    } else {
        items.push(CheckItem::fail(format!("{} is not set", key_var)));
    }

    match ctx.config.config.agent.team.parse::<TeamVariant>() {
        Ok(variant) => items.push(CheckItem::pass(format!(
            "Agent team: {} (model {})",
            variant, ctx.config.config.agent.model
        ))),
        Err(e) => items.push(CheckItem::fail(e.to_string())),
    }

    items.push(CheckItem::pass(format!(
        "Timezone table: {} cities",
        ctx.zones.len()
    )));
    items.push(CheckItem::pass(format!(
        "Log file: {}",
        ctx.logger.log_file().display()
    )));

    items
}

/// Print the configuration check; fails when any item fails.
pub fn config_check(ctx: &AppContext) -> CliResult<()> {
    println!("{}", "Configuration Check".cyan().bold());
    println!("{}", "===================".cyan());

    let items = collect_checks(ctx);
    for item in &items {
        if item.ok {
            println!("{}", format!("✓ {}", item.message).green());
        } else {
            println!("{}", format!("✗ {}", item.message).red());
        }
    }

    let failures = items.iter().filter(|i| !i.ok).count();
    if failures > 0 {
        return Err(CliError::ConfigError(format!(
            "{} check(s) failed",
            failures
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::GlobalOptions;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_collect_checks_reports_team_and_zones() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("wtk.toml");
        fs::write(&config_path, "[agent]\nteam = \"swarm\"\n").unwrap();

        let opts = GlobalOptions {
            config: Some(config_path),
            env_file: Some(temp_dir.path().join("missing.env")),
            provider: Some("weatherapi".to_string()),
            log_file: Some(temp_dir.path().join("session.md")),
            ..Default::default()
        };
        let ctx = AppContext::load(&opts).unwrap();
        let items = collect_checks(&ctx);

        assert!(items[0].ok);
        assert!(items[0].message.starts_with("Config file loaded"));
        assert!(items
            .iter()
            .any(|i| !i.ok && i.message.starts_with("Env file does not exist")));
        assert!(items
            .iter()
            .any(|i| i.message == "Weather provider: WeatherAPI.com"));
        assert!(items
            .iter()
            .any(|i| !i.ok && i.message.contains("swarm")));
        assert!(items
            .iter()
            .any(|i| i.message == "Timezone table: 7 cities"));

        assert!(matches!(config_check(&ctx), Err(CliError::ConfigError(_))));
    }
}
