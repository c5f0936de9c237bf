//! Weather client integration tests
//!
//! These tests run the real `reqwest` transport against a local mock HTTP
//! server standing in for each provider.

use mockito::{Matcher, Server};
use serde_json::json;
use wtk::tools::weather::{WeatherClient, WeatherError, WeatherProvider};
use wtk::tools::ToolResult;

fn client_for(server: &Server, provider: WeatherProvider, path: &str, key: &str) -> WeatherClient {
    let spec = provider.spec().with_base_url(format!("{}{}", server.url(), path));
    WeatherClient::new(spec, Some(key.to_string()))
}

#[tokio::test]
async fn test_openweathermap_request_and_report() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/data/2.5/weather")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("q".into(), "Paris".into()),
            Matcher::UrlEncoded("appid".into(), "owm-key".into()),
            Matcher::UrlEncoded("units".into(), "metric".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "cod": 200,
                "main": {"temp": 20, "feels_like": 19, "humidity": 50},
                "weather": [{"description": "clear sky"}]
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server, WeatherProvider::OpenWeatherMap, "/data/2.5/weather", "owm-key");
    let result = client.current_weather("Paris").await;

    assert_eq!(
        result,
        ToolResult::success(
            "The current weather in Paris is clear sky. Temperature: 20°C (feels like 19°C). Humidity: 50%."
        )
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_city_with_spaces_is_encoded() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/current.json")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("key".into(), "wapi-key".into()),
            Matcher::UrlEncoded("q".into(), "New York".into()),
        ]))
        .with_status(200)
        .with_body(
            json!({
                "location": {"name": "New York"},
                "current": {
                    "temp_c": 22.2,
                    "feelslike_c": 24.9,
                    "humidity": 61,
                    "condition": {"text": "Partly cloudy"}
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = client_for(&server, WeatherProvider::WeatherApi, "/v1/current.json", "wapi-key");
    let report = client.fetch("New York").await.unwrap();

    assert_eq!(report.location, "New York");
    assert_eq!(report.condition, "Partly cloudy");
    assert_eq!(report.temperature, "22.2");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_provider_error_inside_success_status() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/data/2.5/weather")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"cod":"404","message":"city not found"}"#)
        .create_async()
        .await;

    let client = client_for(&server, WeatherProvider::OpenWeatherMap, "/data/2.5/weather", "k");
    let result = client.current_weather("Atlantis").await;

    assert_eq!(
        result.error_message(),
        Some("Could not retrieve weather for 'Atlantis'. Error: city not found")
    );
}

#[tokio::test]
async fn test_http_error_status_hides_key() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/v1/current.json")
        .match_query(Matcher::Any)
        .with_status(401)
        .with_body(r#"{"error":{"code":2006,"message":"API key is invalid."}}"#)
        .create_async()
        .await;

    let client = client_for(&server, WeatherProvider::WeatherApi, "/v1/current.json", "secret-key");
    let err = client.fetch("London").await.unwrap_err();

    assert!(matches!(err, WeatherError::HttpStatus { status: 401, .. }));
    let message = err.to_string();
    assert!(message.starts_with("Network or API error: HTTP status 401"));
    assert!(!message.contains("secret-key"));
}

#[tokio::test]
async fn test_non_json_body() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/data/2.5/weather")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<html>maintenance</html>")
        .create_async()
        .await;

    let client = client_for(&server, WeatherProvider::OpenWeatherMap, "/data/2.5/weather", "k");
    let result = client.current_weather("Paris").await;

    let message = result.error_message().unwrap();
    assert!(message.starts_with("An unexpected error occurred: "));
}

#[tokio::test]
async fn test_missing_key_sends_nothing() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let spec = WeatherProvider::OpenWeatherMap
        .spec()
        .with_base_url(format!("{}/data/2.5/weather", server.url()));
    let client = WeatherClient::new(spec, Some(String::new()));

    let result = client.current_weather("Paris").await;
    assert_eq!(
        result,
        ToolResult::error("OpenWeatherMap API key is not configured.")
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let server = Server::new_async().await;
    let url = format!("{}/data/2.5/weather", server.url());
    drop(server);

    let spec = WeatherProvider::OpenWeatherMap.spec().with_base_url(url);
    let client = WeatherClient::new(spec, Some("k".to_string()));

    let result = client.current_weather("Paris").await;
    let message = result.error_message().unwrap();
    assert!(message.starts_with("Network or API error: "));
}
