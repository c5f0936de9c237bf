//! Startup wiring shared by all commands.
//!
//! Environment, configuration file and command-line flags are read once
//! here and turned into explicit values: the weather client, the timezone
//! table, the tool registry and the session logger.

use crate::cli::args::GlobalOptions;
use crate::cli::error::{CliError, CliResult};
use crate::config::{Configuration, ConfigurationLoader, EnvironmentLoader};
use crate::invoker::DefaultInvokerRegistry;
use crate::observability::Logger;
use crate::tools::{builtin_registry, TimezoneTable, WeatherClient, WeatherProvider};
use std::path::PathBuf;

/// Everything a command needs.
#[derive(Debug)]
pub struct AppContext {
    /// Environment access.
    pub env: EnvironmentLoader,
    /// Loaded configuration.
    pub config: ConfigurationLoader,
    /// Selected weather provider.
    pub provider: WeatherProvider,
    /// Built-in cities plus configured extras.
    pub zones: TimezoneTable,
    /// All built-in tools.
    pub registry: DefaultInvokerRegistry,
    /// Session log.
    pub logger: Logger,
}

impl AppContext {
    /// Load environment and configuration and build the tool registry.
    pub fn load(opts: &GlobalOptions) -> CliResult<Self> {
        let env = EnvironmentLoader::new(opts.env_file.as_deref());
        let config = ConfigurationLoader::new(opts.config.as_deref())?;

        let env_provider = env.weather_provider();
        let provider = resolve_provider(
            opts.provider.as_deref(),
            env_provider.as_deref(),
            &config.config.weather.provider,
        )?;

        let zones = TimezoneTable::builtin()
            .with_entries(config.time_zones())
            .map_err(|e| CliError::ConfigError(e.to_string()))?;

        let client = weather_client(provider, &env, &config.config);
        let registry = builtin_registry(client, zones.clone())?;

        let log_file = opts
            .log_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.config.logging.log_file));
        let log_level = if opts.debug {
            "DEBUG"
        } else {
            config.config.logging.log_level.as_str()
        };
        let logger = Logger::new(Some(&log_file), Some(log_level))?;

        Ok(Self {
            env,
            config,
            provider,
            zones,
            registry,
            logger,
        })
    }

    /// Whether the selected provider has an API key.
    pub fn has_api_key(&self) -> bool {
        self.env.api_key_for(self.provider.api_key_var()).is_some()
    }
}

/// Pick the provider: command-line flag, then `WEATHER_PROVIDER`, then the
/// configuration file.
pub fn resolve_provider(
    flag: Option<&str>,
    env: Option<&str>,
    configured: &str,
) -> CliResult<WeatherProvider> {
    flag.or(env)
        .unwrap_or(configured)
        .parse()
        .map_err(CliError::ConfigError)
}

/// Build the weather client for `provider`.
///
/// The configured base URL applies only when `provider` is the one named in
/// the configuration file.
pub fn weather_client(
    provider: WeatherProvider,
    env: &EnvironmentLoader,
    config: &Configuration,
) -> WeatherClient {
    let mut spec = provider.spec();
    let configured = config.weather.provider.parse::<WeatherProvider>().ok();
    if let Some(url) = config.weather.base_url.as_ref().filter(|_| configured == Some(provider)) {
        spec = spec.with_base_url(url.clone());
    }
    WeatherClient::new(spec, env.api_key_for(provider.api_key_var()))
}
