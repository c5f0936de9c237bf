//! Command-line arguments for the `wtk` binary.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Weather Team Kit - weather, time and greeting tools for agent runtimes
#[derive(Parser, Debug)]
#[command(name = "wtk")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Options shared by every command
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Path to the TOML configuration file
    #[arg(long, global = true, env = "WTK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Path to a .env file with API keys
    #[arg(long, global = true)]
    pub env_file: Option<PathBuf>,

    /// Weather provider: openweathermap or weatherapi
    #[arg(long, global = true)]
    pub provider: Option<String>,

    /// Markdown log file for this session
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short = 'd', long, global = true)]
    pub debug: bool,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Current weather in a city
    Weather {
        /// City name; several words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        city: Vec<String>,
    },

    /// Current local time in a city
    Time {
        /// City name; several words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        city: Vec<String>,
    },

    /// Print a greeting
    Hello {
        /// Name to greet
        name: Option<String>,
    },

    /// Print a farewell
    Goodbye,

    /// Invoke any registered tool with JSON arguments
    Call {
        /// Tool name, e.g. get_weather
        tool: String,

        /// JSON object of arguments, e.g. '{"city":"Paris"}'
        args: Option<String>,
    },

    /// List registered tools
    Tools {
        /// Print OpenAI function schemas as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the agent team
    Agents {
        /// Team layout: delegating or routing (defaults to configuration)
        #[arg(long)]
        variant: Option<String>,

        /// Print the runtime manifest as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check configuration and environment
    ConfigCheck,
}

impl Commands {
    /// Command name as recorded in the session log.
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Weather { .. } => "weather",
            Commands::Time { .. } => "time",
            Commands::Hello { .. } => "hello",
            Commands::Goodbye => "goodbye",
            Commands::Call { .. } => "call",
            Commands::Tools { .. } => "tools",
            Commands::Agents { .. } => "agents",
            Commands::ConfigCheck => "config-check",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_multi_word_city() {
        let cli = Cli::try_parse_from(["wtk", "time", "new", "york"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Time {
                city: vec!["new".to_string(), "york".to_string()]
            }
        );
        assert!(Cli::try_parse_from(["wtk", "weather"]).is_err());
    }

    #[test]
    fn test_parse_global_flags_after_command() {
        let cli = Cli::try_parse_from([
            "wtk",
            "weather",
            "Paris",
            "--provider",
            "weatherapi",
            "--log-file",
            "/tmp/wtk.md",
        ])
        .unwrap();
        assert_eq!(cli.global.provider.as_deref(), Some("weatherapi"));
        assert_eq!(cli.global.log_file, Some(PathBuf::from("/tmp/wtk.md")));
        assert_eq!(cli.command.name(), "weather");
    }

    #[test]
    fn test_parse_call_and_agents() {
        let cli = Cli::try_parse_from(["wtk", "call", "say_hello", r#"{"name":"Ana"}"#]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Call {
                tool: "say_hello".to_string(),
                args: Some(r#"{"name":"Ana"}"#.to_string())
            }
        );

        let cli = Cli::try_parse_from(["wtk", "agents", "--variant", "routing", "--json"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Agents {
                variant: Some("routing".to_string()),
                json: true
            }
        );

        let cli = Cli::try_parse_from(["wtk", "hello"]).unwrap();
        assert_eq!(cli.command, Commands::Hello { name: None });
    }
}
