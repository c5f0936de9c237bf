//! Configuration management.
//!
//! This module provides configuration loading through TOML files and
//! environment variable management via `.env` files.
//!
//! # Example
//!
//! ```no_run
//! use wtk::config::{ConfigurationLoader, EnvironmentLoader};
//! use std::path::Path;
//!
//! // Load environment variables
//! let env = EnvironmentLoader::new(Some(Path::new(".env")));
//!
//! // Load configuration from TOML
//! let config_loader = ConfigurationLoader::new(Some(Path::new("config/wtk.toml"))).unwrap();
//! let config = &config_loader.config;
//!
//! println!("Weather provider: {}", config.weather.provider);
//! println!("Provider override: {:?}", env.weather_provider());
//! ```

pub mod config;
pub mod environment;

// Re-export main types for convenience
pub use self::config::{
    AgentSettings, Configuration, ConfigurationLoader, LoggingConfig, TimeConfig, WeatherConfig,
    DEFAULT_CONFIG_PATH,
};
pub use self::environment::EnvironmentLoader;
