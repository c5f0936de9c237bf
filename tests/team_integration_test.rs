//! Agent team integration tests
//!
//! Builds the full tool registry and checks both team layouts against it.

use serde_json::json;
use wtk::agent::{AgentConfig, AgentError, TeamVariant, ORCHESTRATOR};
use wtk::invoker::{
    generate_openai_tools, generate_openai_tools_by_source, DefaultInvokerRegistry, InvokerError,
    InvokerRegistry, InvokerSource,
};
use wtk::tools::{builtin_registry, TimezoneTable, WeatherClient, WeatherProvider};

fn full_registry() -> DefaultInvokerRegistry {
    let client = WeatherClient::new(WeatherProvider::OpenWeatherMap.spec(), None);
    builtin_registry(client, TimezoneTable::builtin()).unwrap()
}

#[test]
fn test_both_teams_validate_against_builtin_registry() {
    let registry = full_registry();
    for variant in TeamVariant::ALL {
        let team = variant.build("gemini-1.5-flash");
        assert_eq!(team.name, ORCHESTRATOR);
        team.validate(&registry).unwrap();
    }
}

#[test]
fn test_delegating_manifest_shape() {
    let manifest = TeamVariant::Delegating.build("test-model").manifest();

    assert_eq!(manifest["name"], ORCHESTRATOR);
    assert_eq!(manifest["model"], "test-model");
    assert_eq!(manifest["tools"][0]["function"]["name"], "get_weather");
    assert_eq!(manifest["tools"][0]["source"], "native");

    let subs = manifest["sub_agents"].as_array().unwrap();
    let names: Vec<_> = subs.iter().map(|s| s["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["greeting_agent", "farewell_agent"]);
    assert_eq!(subs[0]["tools"][0]["function"]["name"], "say_hello");
    assert_eq!(subs[1]["tools"][0]["function"]["name"], "say_goodbye");
    assert!(manifest["agent_tools"].as_array().unwrap().is_empty());
}

#[test]
fn test_routing_manifest_exposes_agents_as_tools() {
    let manifest = TeamVariant::Routing.build("test-model").manifest();

    let tools = manifest["tools"].as_array().unwrap();
    assert!(tools.iter().all(|t| t["source"] == "agent"));
    let tool_names: Vec<_> = tools
        .iter()
        .map(|t| t["function"]["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        tool_names,
        vec!["WeatherAndTimeAgent", "GreetingAgent", "FarewellAgent"]
    );

    let weather_time = &manifest["agent_tools"][0];
    assert_eq!(weather_time["tools"][0]["function"]["name"], "get_weather");
    assert_eq!(weather_time["tools"][1]["function"]["name"], "get_current_time");
    assert!(manifest["sub_agents"].as_array().unwrap().is_empty());
}

#[test]
fn test_routing_team_needs_time_tool() {
    let mut registry = full_registry();
    registry.remove("get_current_time");

    let err = TeamVariant::Routing
        .build("test-model")
        .validate(&registry)
        .unwrap_err();
    assert_eq!(
        err,
        AgentError::unknown_tool("WeatherAndTimeAgent", "get_current_time")
    );

    // The delegating team does not use the time tool.
    TeamVariant::Delegating
        .build("test-model")
        .validate(&registry)
        .unwrap();
}

#[tokio::test]
async fn test_agent_delegate_is_declared_not_executed() {
    let mut registry = full_registry();
    let greeter = AgentConfig::new("GreetingAgent", "test-model")
        .with_description("Greets users.")
        .with_instruction("Greet the user.");
    registry.register_definition(greeter.as_delegate()).unwrap();

    assert_eq!(registry.list_by_source(InvokerSource::Agent).len(), 1);
    assert_eq!(
        generate_openai_tools_by_source(&registry, InvokerSource::Native).len(),
        4
    );
    assert_eq!(generate_openai_tools(&registry).len(), 5);

    let err = registry
        .invoke("GreetingAgent", json!({"request": "hi"}))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        InvokerError::SourceUnavailable {
            source_kind: InvokerSource::Agent,
            ..
        }
    ));

    let hello = registry
        .invoke("say_hello", json!({"name": "Alice"}))
        .await
        .unwrap();
    assert_eq!(hello, json!("Hello, Alice!"));
}

#[tokio::test]
async fn test_registry_clones_serve_concurrent_calls() {
    let registry = full_registry();

    let mut handles = Vec::new();
    for city in ["London", "Tokyo", "Paris", "Sydney"] {
        let registry = registry.clone();
        handles.push(tokio::spawn(async move {
            registry
                .invoke("get_current_time", json!({"city": city}))
                .await
                .unwrap()
        }));
    }

    let mut statuses = Vec::new();
    for handle in handles {
        let value = handle.await.unwrap();
        statuses.push(value["status"].as_str().unwrap().to_string());
    }
    assert_eq!(statuses, vec!["success", "success", "success", "error"]);
}
