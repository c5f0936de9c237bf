//! Shared utility functions for CLI commands

use crate::cli::error::CliError;
use colored::*;

/// Suggestions for an error, based on its kind and message.
pub fn suggestions_for(error: &CliError) -> Vec<&'static str> {
    let error_str = error.to_string().to_lowercase();

    if error_str.contains("api key is not configured") || error_str.contains("_api_key is not set") {
        vec![
            "Set OPENWEATHER_API_KEY or WEATHERAPI_API_KEY in your environment",
            "Or pass a .env file with --env-file",
            "Run 'wtk config-check' to see which provider is selected",
        ]
    } else if error_str.contains("network or api error") {
        vec![
            "Check your internet connection",
            "Verify the provider endpoint is reachable",
            "Try again in a few moments",
        ]
    } else if error_str.contains("timezone information") {
        vec![
            "Add the city under [time.zones] in config/wtk.toml",
            "Run 'wtk time London' to check a built-in city",
        ]
    } else if matches!(error, CliError::ToolError(_)) && error_str.contains("not found") {
        vec!["Run 'wtk tools' to list registered tools"]
    } else if matches!(error, CliError::ConfigError(_)) {
        vec![
            "Check config/wtk.toml or the file passed with --config",
            "Run 'wtk config-check' for details",
        ]
    } else {
        Vec::new()
    }
}

/// Display a user-friendly error message with suggestions
pub fn display_error_with_suggestions(error: &CliError, context: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), context);
    eprintln!("   {}", error.to_string().red());

    let suggestions = suggestions_for(error);
    if !suggestions.is_empty() {
        eprintln!("{}", "💡 Suggestions:".blue());
        for suggestion in suggestions {
            eprintln!("   • {}", suggestion);
        }
    }
}
