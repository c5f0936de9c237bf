//! Agent configuration records for the external agent runtime.
//!
//! Agents here are plain data: a name, a model, an instruction and the
//! tools they may call. Execution belongs to the runtime that consumes the
//! [`AgentConfig::manifest`] payload.
//!
//! # Example
//!
//! ```
//! use wtk::agent::{TeamVariant, ORCHESTRATOR};
//! use wtk::tools::{builtin_registry, TimezoneTable, WeatherClient, WeatherProvider};
//!
//! let registry = builtin_registry(
//!     WeatherClient::new(WeatherProvider::OpenWeatherMap.spec(), None),
//!     TimezoneTable::builtin(),
//! )
//! .unwrap();
//!
//! let team = TeamVariant::Routing.build("gemini-1.5-flash");
//! team.validate(&registry).unwrap();
//! assert_eq!(team.manifest()["name"], ORCHESTRATOR);
//! ```

mod config;
mod error;
mod team;

pub use config::AgentConfig;
pub use error::AgentError;
pub use team::{weather_team, weather_time_team, TeamVariant, ORCHESTRATOR};

/// Result type for agent configuration.
pub type AgentResult<T> = Result<T, AgentError>;
