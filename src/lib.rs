//! Weather Team Kit (WTK) - tools and agent teams for LLM agent runtimes
//!
//! WTK provides a set of feature-gated modules:
//!
//! - **`invoker`** - Tool definitions, handlers and the registry
//! - **`tools`** - Time lookup and greeting/farewell formatters
//! - **`weather`** - Current weather from OpenWeatherMap or WeatherAPI.com
//! - **`agent`** - Agent configuration records and prebuilt teams
//! - **`config`** - Configuration and environment loading
//! - **`observability`** - Markdown session logging
//! - **`cli`** - The `wtk` command-line interface
//!
//! # Features
//!
//! Enable the features you need in your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! wtk = { version = "0.1", default-features = false, features = ["tools"] }
//! # Or the HTTP weather client as well:
//! wtk = { version = "0.1", default-features = false, features = ["weather"] }
//! # Or enable everything:
//! wtk = { version = "0.1", features = ["all"] }
//! ```
//!
//! # Example: Calling tools through the registry
//!
//! ```no_run
//! use wtk::tools::{builtin_registry, TimezoneTable, WeatherClient, WeatherProvider};
//! use serde_json::json;
//!
//! # async fn example() -> wtk::invoker::InvokerResult<()> {
//! let provider = WeatherProvider::OpenWeatherMap;
//! let client = WeatherClient::new(
//!     provider.spec(),
//!     std::env::var(provider.api_key_var()).ok(),
//! );
//! let registry = builtin_registry(client, TimezoneTable::builtin())?;
//!
//! let weather = registry.invoke("get_weather", json!({"city": "London"})).await?;
//! let time = registry.invoke("get_current_time", json!({"city": "London"})).await?;
//! println!("{}\n{}", weather, time);
//! # Ok(())
//! # }
//! ```
//!
//! # Example: Building an agent team
//!
//! ```
//! use wtk::agent::TeamVariant;
//!
//! let team = TeamVariant::Delegating.build("gemini-1.5-flash");
//! assert_eq!(team.sub_agents.len(), 2);
//! ```

#![warn(missing_docs)]

/// Tool invocation boundary (enabled with the `invoker` feature)
#[cfg(feature = "invoker")]
pub mod invoker;

/// Built-in tools (enabled with the `tools` feature)
#[cfg(feature = "tools")]
pub mod tools;

/// Agent configuration records (enabled with the `agent` feature)
#[cfg(feature = "agent")]
pub mod agent;

/// Configuration management (enabled with the `config` feature)
#[cfg(feature = "config")]
pub mod config;

/// Observability utilities (enabled with the `observability` feature)
#[cfg(feature = "observability")]
pub mod observability;

/// Command-line interface (enabled with the `cli` feature)
#[cfg(feature = "cli")]
pub mod cli;

/// Prelude module for convenient imports
pub mod prelude {
    #[cfg(feature = "invoker")]
    pub use crate::invoker::{
        DefaultInvokerRegistry, InvokerDefinition, InvokerError, InvokerHandler, InvokerRegistry,
        InvokerResult, InvokerSource,
    };

    #[cfg(feature = "tools")]
    pub use crate::tools::{say_goodbye, say_hello, TimezoneTable, ToolResult};

    #[cfg(feature = "weather")]
    pub use crate::tools::{builtin_registry, WeatherClient, WeatherProvider};

    #[cfg(feature = "agent")]
    pub use crate::agent::{AgentConfig, AgentError, TeamVariant};

    #[cfg(feature = "config")]
    pub use crate::config::{Configuration, ConfigurationLoader, EnvironmentLoader};

    #[cfg(feature = "observability")]
    pub use crate::observability::Logger;
}
