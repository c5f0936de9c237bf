//! TOML configuration parsing and management.

use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Default location of the configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "config/wtk.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// `[agent]` section.
    pub agent: AgentSettings,
    /// `[weather]` section.
    pub weather: WeatherConfig,
    /// `[time]` section.
    pub time: TimeConfig,
    /// `[logging]` section.
    pub logging: LoggingConfig,
}

/// Agent team settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentSettings {
    /// Model identifier handed to the runtime.
    pub model: String,
    /// Team layout: "delegating" or "routing".
    pub team: String,
}

impl Default for AgentSettings {
    fn default() -> Self {
        Self {
            model: "gemini-1.5-flash".to_string(),
            team: "delegating".to_string(),
        }
    }
}

/// Weather provider settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    /// "openweathermap" or "weatherapi".
    pub provider: String,
    /// Endpoint override, e.g. for a proxy.
    pub base_url: Option<String>,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            provider: "openweathermap".to_string(),
            base_url: None,
        }
    }
}

/// Extra cities for the time tool
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeConfig {
    /// City name to IANA zone, e.g. `sydney = "Australia/Sydney"`.
    pub zones: BTreeMap<String, String>,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Markdown session log path.
    pub log_file: String,
    /// "INFO" or "DEBUG".
    pub log_level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_file: std::env::temp_dir()
                .join("wtk-logs")
                .join(format!(
                    "wtk_{}_{}.md",
                    Utc::now().timestamp_millis(),
                    std::process::id()
                ))
                .to_string_lossy()
                .to_string(),
            log_level: "INFO".to_string(),
        }
    }
}

/// Loads and manages TOML configuration.
#[derive(Debug)]
pub struct ConfigurationLoader {
    /// File the configuration was read from, or would have been.
    pub config_path: PathBuf,
    /// Effective configuration.
    pub config: Configuration,
    loaded_from_file: bool,
}

impl ConfigurationLoader {
    /// Initialize configuration loader.
    ///
    /// # Arguments
    /// * `config_path` - Path to TOML config file. Defaults to
    ///   `config/wtk.toml`; built-in defaults are used when the file is absent.
    pub fn new(config_path: Option<&Path>) -> Result<Self> {
        let config_path = config_path
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

        let loaded_from_file = config_path.exists();
        let config = if loaded_from_file {
            Self::load_config(&config_path)?
        } else {
            Configuration::default()
        };

        Ok(Self {
            config_path,
            config,
            loaded_from_file,
        })
    }

    /// Create a configuration loader from a pre-parsed Configuration.
    pub fn from_config(config: Configuration) -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
            config,
            loaded_from_file: false,
        }
    }

    /// Whether the configuration came from a file rather than defaults.
    pub fn loaded_from_file(&self) -> bool {
        self.loaded_from_file
    }

    /// Load configuration from TOML file.
    fn load_config(path: &Path) -> Result<Configuration> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
    }

    /// Get configuration value by dot-notation key.
    ///
    /// `time.zones.<city>` returns the zone configured for that city.
    pub fn get_string(&self, key: &str) -> Option<String> {
        if let Some(city) = key.strip_prefix("time.zones.") {
            return self.config.time.zones.get(city).cloned();
        }

        match key {
            "agent.model" => Some(self.config.agent.model.clone()),
            "agent.team" => Some(self.config.agent.team.clone()),
            "weather.provider" => Some(self.config.weather.provider.clone()),
            "weather.base_url" => self.config.weather.base_url.clone(),
            "logging.log_file" => Some(self.config.logging.log_file.clone()),
            "logging.log_level" => Some(self.config.logging.log_level.clone()),
            _ => None,
        }
    }

    /// Get numeric configuration value.
    pub fn get_u64(&self, key: &str) -> Option<u64> {
        match key {
            "time.zones" => Some(self.config.time.zones.len() as u64),
            _ => None,
        }
    }

    /// Get boolean configuration value.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        match key {
            "weather.base_url" => Some(self.config.weather.base_url.is_some()),
            _ => None,
        }
    }

    /// Extra city zones as `(city, zone)` pairs.
    pub fn time_zones(&self) -> impl Iterator<Item = (&str, &str)> {
        self.config
            .time
            .zones
            .iter()
            .map(|(city, zone)| (city.as_str(), zone.as_str()))
    }
}
