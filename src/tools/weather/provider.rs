//! Weather provider descriptions.
//!
//! Both supported APIs are driven by the same client. A [`ProviderSpec`]
//! captures everything that differs between them: endpoint, query
//! parameter names, where each field sits in the response, and how the
//! provider signals failure inside a successful HTTP response.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use super::WeatherReport;

/// Placeholder for fields the provider did not return.
pub const MISSING_FIELD: &str = "N/A";

/// Supported weather APIs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherProvider {
    /// OpenWeatherMap current weather API.
    #[default]
    OpenWeatherMap,
    /// WeatherAPI.com current conditions API.
    WeatherApi,
}

impl WeatherProvider {
    /// Environment variable holding this provider's API key.
    pub fn api_key_var(self) -> &'static str {
        match self {
            Self::OpenWeatherMap => "OPENWEATHER_API_KEY",
            Self::WeatherApi => "WEATHERAPI_API_KEY",
        }
    }

    /// Identifier used in configuration files and `WEATHER_PROVIDER`.
    pub fn id(self) -> &'static str {
        match self {
            Self::OpenWeatherMap => "openweathermap",
            Self::WeatherApi => "weatherapi",
        }
    }

    /// Request/response description for this provider.
    pub fn spec(self) -> ProviderSpec {
        match self {
            Self::OpenWeatherMap => ProviderSpec {
                provider: self,
                base_url: "https://api.openweathermap.org/data/2.5/weather".to_string(),
                query: &[
                    QueryParam::City("q"),
                    QueryParam::ApiKey("appid"),
                    QueryParam::Fixed("units", "metric"),
                ],
                fields: FieldPaths {
                    condition: "/weather/0/description",
                    temperature: "/main/temp",
                    feels_like: "/main/feels_like",
                    humidity: "/main/humidity",
                    location: None,
                },
                status: StatusCheck::Code {
                    pointer: "/cod",
                    expected: 200,
                    message: "/message",
                },
            },
            Self::WeatherApi => ProviderSpec {
                provider: self,
                base_url: "https://api.weatherapi.com/v1/current.json".to_string(),
                query: &[QueryParam::ApiKey("key"), QueryParam::City("q")],
                fields: FieldPaths {
                    condition: "/current/condition/text",
                    temperature: "/current/temp_c",
                    feels_like: "/current/feelslike_c",
                    humidity: "/current/humidity",
                    location: Some("/location/name"),
                },
                status: StatusCheck::ErrorObject {
                    pointer: "/error",
                    message: "/error/message",
                },
            },
        }
    }
}

impl fmt::Display for WeatherProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OpenWeatherMap => write!(f, "OpenWeatherMap"),
            Self::WeatherApi => write!(f, "WeatherAPI.com"),
        }
    }
}

impl FromStr for WeatherProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "openweathermap" | "openweather" | "owm" => Ok(Self::OpenWeatherMap),
            "weatherapi" | "weatherapi.com" => Ok(Self::WeatherApi),
            other => Err(format!(
                "unknown weather provider '{}': expected 'openweathermap' or 'weatherapi'",
                other
            )),
        }
    }
}

/// One query parameter of the outbound request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryParam {
    /// Parameter carrying the requested city.
    City(&'static str),
    /// Parameter carrying the API key.
    ApiKey(&'static str),
    /// Constant parameter.
    Fixed(&'static str, &'static str),
}

/// JSON pointers to the report fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPaths {
    /// Condition text, e.g. "clear sky".
    pub condition: &'static str,
    /// Temperature in °C.
    pub temperature: &'static str,
    /// Apparent temperature in °C.
    pub feels_like: &'static str,
    /// Relative humidity in percent.
    pub humidity: &'static str,
    /// Provider's canonical location name; the requested city when `None`.
    pub location: Option<&'static str>,
}

/// How a provider reports failure inside a 2xx response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCheck {
    /// Success only when the code at `pointer` equals `expected`.
    Code {
        /// Pointer to the status code (number or numeric string).
        pointer: &'static str,
        /// Code that means success.
        expected: i64,
        /// Pointer to the provider's message.
        message: &'static str,
    },
    /// Failure whenever an error object is present at `pointer`.
    ErrorObject {
        /// Pointer to the error object.
        pointer: &'static str,
        /// Pointer to the provider's message.
        message: &'static str,
    },
}

impl StatusCheck {
    /// The provider's failure message, or `None` when the body signals success.
    pub fn failure_message(&self, body: &Value) -> Option<String> {
        let (failed, message) = match *self {
            Self::Code {
                pointer,
                expected,
                message,
            } => {
                let code = body.pointer(pointer).and_then(|v| match v {
                    Value::Number(n) => n.as_i64(),
                    Value::String(s) => s.trim().parse().ok(),
                    _ => None,
                });
                (code != Some(expected), message)
            }
            Self::ErrorObject { pointer, message } => {
                let present = body.pointer(pointer).is_some_and(|v| !v.is_null());
                (present, message)
            }
        };

        failed.then(|| {
            body.pointer(message)
                .and_then(Value::as_str)
                .unwrap_or("Unknown error")
                .to_string()
        })
    }
}

/// Everything the client needs to talk to one provider.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderSpec {
    /// Which provider this describes.
    pub provider: WeatherProvider,
    /// Endpoint for current conditions.
    pub base_url: String,
    /// Query parameters in request order.
    pub query: &'static [QueryParam],
    /// Where the report fields live in the response.
    pub fields: FieldPaths,
    /// Application-level failure detection.
    pub status: StatusCheck,
}

impl ProviderSpec {
    /// Replace the endpoint, e.g. to target a proxy or a test server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Build the query string pairs for one request.
    pub fn query_pairs(&self, api_key: &str, city: &str) -> Vec<(String, String)> {
        self.query
            .iter()
            .map(|param| match *param {
                QueryParam::City(name) => (name.to_string(), city.to_string()),
                QueryParam::ApiKey(name) => (name.to_string(), api_key.to_string()),
                QueryParam::Fixed(name, value) => (name.to_string(), value.to_string()),
            })
            .collect()
    }

    /// Pull the report fields out of a successful response body.
    pub fn extract(&self, city: &str, body: &Value) -> WeatherReport {
        let location = self
            .fields
            .location
            .and_then(|p| body.pointer(p))
            .and_then(Value::as_str)
            .unwrap_or(city)
            .to_string();

        WeatherReport {
            location,
            condition: display_field(body, self.fields.condition),
            temperature: display_field(body, self.fields.temperature),
            feels_like: display_field(body, self.fields.feels_like),
            humidity: display_field(body, self.fields.humidity),
        }
    }
}

fn display_field(body: &Value, pointer: &str) -> String {
    match body.pointer(pointer) {
        None | Some(Value::Null) => MISSING_FIELD.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
