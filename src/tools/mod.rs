//! Built-in tools exposed to the agent runtime.
//!
//! - [`weather`] - current conditions from an external weather API
//! - [`time`] - local time in a fixed set of cities
//! - [`greeting`] - greeting and farewell formatters
//!
//! Every tool implements [`InvokerHandler`](crate::invoker::InvokerHandler)
//! and answers with a [`ToolResult`] object (or a plain string for the
//! formatters).

pub mod greeting;
mod result;
pub mod time;

#[cfg(feature = "weather")]
pub mod weather;

pub use greeting::{say_goodbye, say_hello, SayGoodbyeTool, SayHelloTool, SAY_GOODBYE, SAY_HELLO};
pub use result::ToolResult;
pub use time::{CurrentTimeTool, TimeError, TimeResult, TimezoneTable, GET_CURRENT_TIME};

#[cfg(feature = "weather")]
pub use weather::{WeatherClient, WeatherProvider, WeatherTool, GET_WEATHER};

#[cfg(feature = "weather")]
use crate::invoker::{DefaultInvokerRegistry, InvokerResult};
#[cfg(feature = "weather")]
use std::sync::Arc;

/// Registry holding all four built-in tools.
///
/// ```
/// use wtk::invoker::InvokerRegistry;
/// use wtk::tools::{builtin_registry, TimezoneTable, WeatherClient, WeatherProvider};
///
/// let client = WeatherClient::new(WeatherProvider::OpenWeatherMap.spec(), None);
/// let registry = builtin_registry(client, TimezoneTable::builtin()).unwrap();
/// assert_eq!(registry.names(), vec!["get_current_time", "get_weather", "say_goodbye", "say_hello"]);
/// ```
#[cfg(feature = "weather")]
pub fn builtin_registry(
    weather: WeatherClient,
    zones: TimezoneTable,
) -> InvokerResult<DefaultInvokerRegistry> {
    let mut registry = DefaultInvokerRegistry::new();
    registry.register(WeatherTool::new(Arc::new(weather)))?;
    registry.register(CurrentTimeTool::new(Arc::new(zones)))?;
    registry.register(SayHelloTool)?;
    registry.register(SayGoodbyeTool)?;
    Ok(registry)
}
