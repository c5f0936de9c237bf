//! Current local time lookup through a fixed city table.

use crate::invoker::{required_str, InvokerDefinition, InvokerHandler, InvokerResult, InvokerSource};
use crate::tools::ToolResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;

/// Name under which [`CurrentTimeTool`] is registered.
pub const GET_CURRENT_TIME: &str = "get_current_time";

/// Cities known out of the box, keyed by lower-cased name.
pub const BUILTIN_TIMEZONES: &[(&str, &str)] = &[
    ("new york", "America/New_York"),
    ("london", "Europe/London"),
    ("tokyo", "Asia/Tokyo"),
    ("milpitas", "America/Los_Angeles"),
    ("san francisco", "America/Los_Angeles"),
    ("los angeles", "America/Los_Angeles"),
    ("paris", "Europe/Paris"),
];

const REPORT_FORMAT: &str = "%Y-%m-%d %H:%M:%S %Z%z";

/// Errors from time lookups.
#[derive(Debug, Error)]
pub enum TimeError {
    /// The city is not in the table.
    #[error("Sorry, I don't have timezone information for {city}. Try New York, London, or Tokyo.")]
    UnsupportedCity {
        /// City as the caller wrote it.
        city: String,
    },

    /// A table entry names a zone missing from the timezone database.
    #[error("Unknown IANA timezone '{zone}' for city '{city}'")]
    InvalidZone {
        /// City of the rejected entry.
        city: String,
        /// Zone identifier that failed to parse.
        zone: String,
    },
}

/// Result type for time lookups.
pub type TimeResult<T> = Result<T, TimeError>;

/// Immutable mapping from lower-cased city name to timezone.
///
/// Built once at startup, optionally extended from configuration, then
/// shared read-only.
///
/// ```
/// use wtk::tools::TimezoneTable;
///
/// let table = TimezoneTable::builtin();
/// assert_eq!(table.resolve("TOKYO"), Some(chrono_tz::Asia::Tokyo));
/// assert_eq!(table.resolve("Atlantis"), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TimezoneTable {
    zones: BTreeMap<String, Tz>,
}

impl TimezoneTable {
    /// The built-in city table.
    pub fn builtin() -> Self {
        let zones = BUILTIN_TIMEZONES
            .iter()
            .filter_map(|(city, zone)| zone.parse::<Tz>().ok().map(|tz| (city.to_string(), tz)))
            .collect();
        Self { zones }
    }

    /// Add or override entries, validating every zone identifier.
    pub fn with_entries<I, K, V>(mut self, entries: I) -> TimeResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (city, zone) in entries {
            let city = normalize(city.as_ref());
            let zone = zone.as_ref();
            let tz = zone.parse::<Tz>().map_err(|_| TimeError::InvalidZone {
                city: city.clone(),
                zone: zone.to_string(),
            })?;
            self.zones.insert(city, tz);
        }
        Ok(self)
    }

    /// Look up a city, ignoring case and surrounding whitespace.
    pub fn resolve(&self, city: &str) -> Option<Tz> {
        self.zones.get(&normalize(city)).copied()
    }

    /// Known city names, in lower case.
    pub fn cities(&self) -> impl Iterator<Item = &str> {
        self.zones.keys().map(String::as_str)
    }

    /// Number of known cities.
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// Whether the table has no cities.
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Format the report for `city` at the given instant.
    pub fn report_at(&self, city: &str, now: DateTime<Utc>) -> TimeResult<String> {
        let tz = self.resolve(city).ok_or_else(|| TimeError::UnsupportedCity {
            city: city.to_string(),
        })?;
        let local = now.with_timezone(&tz);
        Ok(format!(
            "The current time in {} is {}",
            city,
            local.format(REPORT_FORMAT)
        ))
    }

    /// Current time in `city` as a tool result.
    pub fn current_time(&self, city: &str) -> ToolResult {
        ToolResult::from(self.report_at(city, Utc::now()))
    }
}

impl Default for TimezoneTable {
    fn default() -> Self {
        Self::builtin()
    }
}

fn normalize(city: &str) -> String {
    city.trim().to_lowercase()
}

/// Tool definition for `get_current_time`.
pub fn definition() -> InvokerDefinition {
    InvokerDefinition::with_string_params(
        GET_CURRENT_TIME,
        "Returns the current local time in a specified city.",
        &[("city", "The name of the city, e.g. 'London'.", true)],
        InvokerSource::Native,
    )
}

/// Time lookup exposed as a tool.
#[derive(Debug, Clone, Default)]
pub struct CurrentTimeTool {
    table: Arc<TimezoneTable>,
}

impl CurrentTimeTool {
    /// Create the tool over a shared table.
    pub fn new(table: Arc<TimezoneTable>) -> Self {
        Self { table }
    }
}

#[async_trait]
impl InvokerHandler for CurrentTimeTool {
    fn definition(&self) -> InvokerDefinition {
        definition()
    }

    async fn invoke(&self, args: Value) -> InvokerResult<Value> {
        let city = required_str(GET_CURRENT_TIME, &args, "city")?;
        Ok(self.table.current_time(city).into_value())
    }
}
