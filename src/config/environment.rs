//! Environment variable loading and management.
//!
//! Secrets never live in the TOML file. API keys and the provider override
//! are read from the process environment, optionally seeded from a `.env`
//! file.

use std::env;
use std::path::Path;

/// OpenWeatherMap API key variable.
pub const OPENWEATHER_API_KEY: &str = "OPENWEATHER_API_KEY";
/// WeatherAPI.com API key variable.
pub const WEATHERAPI_API_KEY: &str = "WEATHERAPI_API_KEY";
/// Provider selection override.
pub const WEATHER_PROVIDER: &str = "WEATHER_PROVIDER";

/// Loads environment variables from .env file and system environment.
#[derive(Debug, Clone)]
pub struct EnvironmentLoader {
    env_file: Option<String>,
}

impl EnvironmentLoader {
    /// Initialize the environment loader.
    ///
    /// # Arguments
    /// * `env_file` - Path to a .env file. Nothing is loaded when `None`.
    pub fn new(env_file: Option<&Path>) -> Self {
        // Only an explicit path is loaded, so tests never pick up a stray
        // .env from the working directory.
        if let Some(path) = env_file {
            if path.exists() {
                if let Err(e) = dotenv::from_path(path) {
                    eprintln!("Warning: Failed to load .env file: {}", e);
                }
            }
        }

        Self {
            env_file: env_file.map(|p| p.to_string_lossy().to_string()),
        }
    }

    /// The .env file this loader was created with, if any.
    pub fn env_file(&self) -> Option<&str> {
        self.env_file.as_deref()
    }

    /// OpenWeatherMap API key.
    pub fn openweather_api_key(&self) -> Option<String> {
        non_empty(OPENWEATHER_API_KEY)
    }

    /// WeatherAPI.com API key.
    pub fn weatherapi_api_key(&self) -> Option<String> {
        non_empty(WEATHERAPI_API_KEY)
    }

    /// Provider override, e.g. "weatherapi".
    pub fn weather_provider(&self) -> Option<String> {
        non_empty(WEATHER_PROVIDER)
    }

    /// Read an arbitrary key variable by name, such as the one returned by
    /// `WeatherProvider::api_key_var`.
    pub fn api_key_for(&self, var: &str) -> Option<String> {
        non_empty(var)
    }
}

impl Default for EnvironmentLoader {
    fn default() -> Self {
        Self::new(None)
    }
}

fn non_empty(var: &str) -> Option<String> {
    env::var(var).ok().filter(|v| !v.trim().is_empty())
}
