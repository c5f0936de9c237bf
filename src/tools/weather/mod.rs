//! Current weather lookup against a configurable provider.
//!
//! One [`WeatherClient`] serves both supported APIs; the provider is chosen
//! at startup through its [`ProviderSpec`]. Every failure is turned into a
//! [`ToolResult::Error`] at the tool boundary.
//!
//! # Example
//!
//! ```no_run
//! use wtk::tools::weather::{WeatherClient, WeatherProvider};
//!
//! # async fn example() {
//! let client = WeatherClient::new(
//!     WeatherProvider::OpenWeatherMap.spec(),
//!     std::env::var("OPENWEATHER_API_KEY").ok(),
//! );
//! let result = client.current_weather("Paris").await;
//! println!("{}", result);
//! # }
//! ```

mod error;
mod provider;
mod transport;

pub use error::{WeatherError, WeatherResult};
pub use provider::{
    FieldPaths, ProviderSpec, QueryParam, StatusCheck, WeatherProvider, MISSING_FIELD,
};
pub use transport::{ReqwestTransport, TransportError, TransportResponse, WeatherTransport};

use crate::invoker::{required_str, InvokerDefinition, InvokerHandler, InvokerResult, InvokerSource};
use crate::tools::ToolResult;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Name under which [`WeatherTool`] is registered.
pub const GET_WEATHER: &str = "get_weather";

/// Normalized current conditions.
///
/// Fields hold display text; absent values are [`MISSING_FIELD`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeatherReport {
    /// Location name used in the report.
    pub location: String,
    /// Condition text.
    pub condition: String,
    /// Temperature in °C.
    pub temperature: String,
    /// Apparent temperature in °C.
    pub feels_like: String,
    /// Relative humidity in percent.
    pub humidity: String,
}

impl fmt::Display for WeatherReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The current weather in {} is {}. Temperature: {}°C (feels like {}°C). Humidity: {}%.",
            self.location, self.condition, self.temperature, self.feels_like, self.humidity
        )
    }
}

/// Client for one weather provider.
#[derive(Clone)]
pub struct WeatherClient {
    spec: ProviderSpec,
    api_key: Option<String>,
    transport: Arc<dyn WeatherTransport>,
}

impl fmt::Debug for WeatherClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherClient")
            .field("provider", &self.spec.provider)
            .field("base_url", &self.spec.base_url)
            .field("has_api_key", &self.has_api_key())
            .finish()
    }
}

impl WeatherClient {
    /// Create a client using the `reqwest` transport.
    ///
    /// An empty key is treated as missing.
    pub fn new(spec: ProviderSpec, api_key: Option<String>) -> Self {
        Self::with_transport(spec, api_key, Arc::new(ReqwestTransport::new()))
    }

    /// Create a client with a custom transport.
    pub fn with_transport(
        spec: ProviderSpec,
        api_key: Option<String>,
        transport: Arc<dyn WeatherTransport>,
    ) -> Self {
        Self {
            spec,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            transport,
        }
    }

    /// Provider this client talks to.
    pub fn provider(&self) -> WeatherProvider {
        self.spec.provider
    }

    /// Full provider description.
    pub fn spec(&self) -> &ProviderSpec {
        &self.spec
    }

    /// Whether an API key is configured.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Look up current conditions for `city`.
    pub async fn fetch(&self, city: &str) -> WeatherResult<WeatherReport> {
        let provider = self.spec.provider;
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(WeatherError::MissingApiKey { provider })?;

        debug!(%provider, city, "requesting current weather");
        let query = self.spec.query_pairs(api_key, city);
        let response = self.transport.get(&self.spec.base_url, &query).await?;

        if !response.is_success() {
            return Err(WeatherError::HttpStatus {
                provider,
                status: response.status,
            });
        }

        let body: Value = serde_json::from_str(&response.body)
            .map_err(|e| WeatherError::Unexpected(format!("invalid JSON from {}: {}", provider, e)))?;

        if let Some(message) = self.spec.status.failure_message(&body) {
            return Err(WeatherError::Provider {
                city: city.to_string(),
                message,
            });
        }

        Ok(self.spec.extract(city, &body))
    }

    /// Current conditions for `city` as a tool result.
    pub async fn current_weather(&self, city: &str) -> ToolResult {
        match self.fetch(city).await {
            Ok(report) => ToolResult::success(report.to_string()),
            Err(e) => {
                warn!(provider = %self.spec.provider, city, error = %e, "weather lookup failed");
                ToolResult::error(e.to_string())
            }
        }
    }
}

/// Tool definition for `get_weather`, independent of any client.
pub fn definition() -> InvokerDefinition {
    InvokerDefinition::with_string_params(
        GET_WEATHER,
        "Retrieves the current weather report for a specified city.",
        &[("city", "The name of the city, e.g. 'London'.", true)],
        InvokerSource::Native,
    )
}

/// Weather lookup exposed as a tool.
#[derive(Debug, Clone)]
pub struct WeatherTool {
    client: Arc<WeatherClient>,
}

impl WeatherTool {
    /// Create the tool over a shared client.
    pub fn new(client: Arc<WeatherClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl InvokerHandler for WeatherTool {
    fn definition(&self) -> InvokerDefinition {
        definition().with_metadata("provider", Value::String(self.client.provider().id().to_string()))
    }

    async fn invoke(&self, args: Value) -> InvokerResult<Value> {
        let city = required_str(GET_WEATHER, &args, "city")?;
        Ok(self.client.current_weather(city).await.into_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct MockTransport {
        reply: Result<TransportResponse, TransportError>,
        calls: AtomicUsize,
        requests: Mutex<Vec<(String, Vec<(String, String)>)>>,
    }

    impl MockTransport {
        fn replying(status: u16, body: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(TransportResponse::new(status, body)),
                calls: AtomicUsize::new(0),
                requests: Mutex::new(Vec::new()),
            })
        }

        fn failing(message: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Err(TransportError::new(message)),
                calls: AtomicUsize::new(0),
                requests: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl WeatherTransport for MockTransport {
        async fn get(
            &self,
            url: &str,
            query: &[(String, String)],
        ) -> Result<TransportResponse, TransportError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.requests
                .lock()
                .unwrap()
                .push((url.to_string(), query.to_vec()));
            self.reply.clone()
        }
    }

    fn owm_client(transport: Arc<MockTransport>, key: Option<&str>) -> WeatherClient {
        WeatherClient::with_transport(
            WeatherProvider::OpenWeatherMap.spec(),
            key.map(String::from),
            transport,
        )
    }

    const PARIS: &str = r#"{"cod":200,"main":{"temp":20,"feels_like":19,"humidity":50},"weather":[{"description":"clear sky"}]}"#;

    #[tokio::test]
    async fn test_missing_key_makes_no_call() {
        for key in [None, Some(""), Some("   ")] {
            let transport = MockTransport::replying(200, PARIS);
            let client = owm_client(transport.clone(), key);

            let result = client.current_weather("Paris").await;
            assert_eq!(
                result,
                ToolResult::error("OpenWeatherMap API key is not configured.")
            );
            assert_eq!(transport.calls(), 0);
        }
    }

    #[tokio::test]
    async fn test_openweathermap_success() {
        let transport = MockTransport::replying(200, PARIS);
        let client = owm_client(transport.clone(), Some("test-key"));

        let result = client.current_weather("Paris").await;
        assert_eq!(
            result,
            ToolResult::success(
                "The current weather in Paris is clear sky. Temperature: 20°C (feels like 19°C). Humidity: 50%."
            )
        );
        assert_eq!(transport.calls(), 1);

        let requests = transport.requests.lock().unwrap();
        let (url, query) = &requests[0];
        assert_eq!(url, "https://api.openweathermap.org/data/2.5/weather");
        assert!(query.contains(&("appid".to_string(), "test-key".to_string())));
        assert!(query.contains(&("q".to_string(), "Paris".to_string())));
        assert!(query.contains(&("units".to_string(), "metric".to_string())));
    }

    #[tokio::test]
    async fn test_weatherapi_success_uses_reported_name() {
        let body = json!({
            "location": {"name": "New York"},
            "current": {
                "temp_c": 22.2,
                "feelslike_c": 24.9,
                "humidity": 61,
                "condition": {"text": "Partly cloudy"}
            }
        })
        .to_string();
        let transport = MockTransport::replying(200, &body);
        let client = WeatherClient::with_transport(
            WeatherProvider::WeatherApi.spec(),
            Some("wk".to_string()),
            transport.clone(),
        );

        let report = client.fetch("new york").await.unwrap();
        assert_eq!(
            report.to_string(),
            "The current weather in New York is Partly cloudy. Temperature: 22.2°C (feels like 24.9°C). Humidity: 61%."
        );

        let requests = transport.requests.lock().unwrap();
        assert!(requests[0].1.contains(&("key".to_string(), "wk".to_string())));
    }

    #[tokio::test]
    async fn test_transport_fault_is_reported() {
        let transport = MockTransport::failing("dns error: failed to lookup address");
        let client = owm_client(transport.clone(), Some("k"));

        let result = client.current_weather("Paris").await;
        let message = result.error_message().expect("expected an error result");
        assert!(message.starts_with("Network or API error: "));
        assert!(message.contains("dns error: failed to lookup address"));
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn test_http_status_error() {
        let transport = MockTransport::replying(401, r#"{"cod":401,"message":"Invalid API key."}"#);
        let client = owm_client(transport, Some("bad"));

        let err = client.fetch("Paris").await.unwrap_err();
        assert!(matches!(err, WeatherError::HttpStatus { status: 401, .. }));
        assert!(err.to_string().starts_with("Network or API error: HTTP status 401"));
    }

    #[tokio::test]
    async fn test_provider_semantic_error() {
        let transport = MockTransport::replying(200, r#"{"cod":"404","message":"city not found"}"#);
        let client = owm_client(transport, Some("k"));

        let result = client.current_weather("Atlantis").await;
        assert_eq!(
            result,
            ToolResult::error("Could not retrieve weather for 'Atlantis'. Error: city not found")
        );

        let transport = MockTransport::replying(
            200,
            r#"{"error":{"code":1006,"message":"No matching location found."}}"#,
        );
        let client = WeatherClient::with_transport(
            WeatherProvider::WeatherApi.spec(),
            Some("k".to_string()),
            transport,
        );
        let result = client.current_weather("Atlantis").await;
        assert_eq!(
            result.error_message(),
            Some("Could not retrieve weather for 'Atlantis'. Error: No matching location found.")
        );
    }

    #[tokio::test]
    async fn test_invalid_body_is_unexpected() {
        let transport = MockTransport::replying(200, "<html>gateway</html>");
        let client = owm_client(transport, Some("k"));

        let err = client.fetch("Paris").await.unwrap_err();
        assert!(matches!(err, WeatherError::Unexpected(_)));
        assert!(err.to_string().starts_with("An unexpected error occurred: "));
    }

    #[tokio::test]
    async fn test_missing_fields_become_placeholders() {
        let transport = MockTransport::replying(200, r#"{"cod":200}"#);
        let client = owm_client(transport, Some("k"));

        let result = client.current_weather("Lima").await;
        assert_eq!(
            result.report(),
            Some("The current weather in Lima is N/A. Temperature: N/A°C (feels like N/A°C). Humidity: N/A%.")
        );
    }

    #[tokio::test]
    async fn test_weather_tool() {
        let transport = MockTransport::replying(200, PARIS);
        let tool = WeatherTool::new(Arc::new(owm_client(transport, Some("k"))));

        let def = tool.definition();
        assert_eq!(def.name, GET_WEATHER);
        assert_eq!(def.get_metadata("provider"), Some(&json!("openweathermap")));

        let out = tool.invoke(json!({"city": "Paris"})).await.unwrap();
        assert_eq!(out["status"], "success");
        assert!(out["report"].as_str().unwrap().contains("clear sky"));

        assert!(tool.invoke(json!({"town": "Paris"})).await.is_err());
    }

    #[test]
    fn test_debug_hides_key() {
        let client = owm_client(MockTransport::replying(200, PARIS), Some("super-secret"));
        let debug = format!("{:?}", client);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("has_api_key: true"));
    }
}
