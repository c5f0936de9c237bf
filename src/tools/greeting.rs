//! Greeting and farewell tools.

use crate::invoker::{optional_str, InvokerDefinition, InvokerHandler, InvokerResult, InvokerSource};
use async_trait::async_trait;
use serde_json::Value;

/// Name under which [`SayHelloTool`] is registered.
pub const SAY_HELLO: &str = "say_hello";

/// Name under which [`SayGoodbyeTool`] is registered.
pub const SAY_GOODBYE: &str = "say_goodbye";

/// Build a greeting, personalized when a non-empty name is given.
///
/// ```
/// use wtk::tools::say_hello;
///
/// assert_eq!(say_hello(None), "Hello there!");
/// assert_eq!(say_hello(Some("Ana")), "Hello, Ana!");
/// ```
pub fn say_hello(name: Option<&str>) -> String {
    match name {
        Some(name) if !name.is_empty() => format!("Hello, {}!", name),
        _ => "Hello there!".to_string(),
    }
}

/// Farewell message that concludes a conversation.
pub fn say_goodbye() -> String {
    "Goodbye! Have a great day.".to_string()
}

/// `say_hello` exposed as a tool.
#[derive(Debug, Clone, Copy, Default)]
pub struct SayHelloTool;

#[async_trait]
impl InvokerHandler for SayHelloTool {
    fn definition(&self) -> InvokerDefinition {
        InvokerDefinition::with_string_params(
            SAY_HELLO,
            "Provides a simple greeting. If a name is provided, it will be used.",
            &[(
                "name",
                "The name of the person to greet. Omit for a generic greeting.",
                false,
            )],
            InvokerSource::Native,
        )
    }

    async fn invoke(&self, args: Value) -> InvokerResult<Value> {
        let name = optional_str(SAY_HELLO, &args, "name")?;
        Ok(Value::String(say_hello(name)))
    }
}

/// `say_goodbye` exposed as a tool.
#[derive(Debug, Clone, Copy, Default)]
pub struct SayGoodbyeTool;

#[async_trait]
impl InvokerHandler for SayGoodbyeTool {
    fn definition(&self) -> InvokerDefinition {
        InvokerDefinition::new_simple(
            SAY_GOODBYE,
            "Provides a simple farewell message to conclude the conversation.",
            InvokerSource::Native,
        )
    }

    async fn invoke(&self, _args: Value) -> InvokerResult<Value> {
        Ok(Value::String(say_goodbye()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_say_hello() {
        assert_eq!(say_hello(None), "Hello there!");
        assert_eq!(say_hello(Some("Ana")), "Hello, Ana!");
        assert_eq!(say_hello(Some("")), "Hello there!");
    }

    #[test]
    fn test_say_goodbye() {
        assert_eq!(say_goodbye(), "Goodbye! Have a great day.");
    }

    #[tokio::test]
    async fn test_hello_tool() {
        let tool = SayHelloTool;
        assert_eq!(tool.invoke(json!({})).await.unwrap(), json!("Hello there!"));
        assert_eq!(
            tool.invoke(json!({"name": "Ana"})).await.unwrap(),
            json!("Hello, Ana!")
        );
        assert!(tool.invoke(json!({"name": 7})).await.is_err());
        assert!(tool.definition().required_parameters().is_empty());
    }

    #[tokio::test]
    async fn test_goodbye_tool_ignores_args() {
        let tool = SayGoodbyeTool;
        assert_eq!(
            tool.invoke(json!({"anything": true})).await.unwrap(),
            json!("Goodbye! Have a great day.")
        );
        assert!(!tool.definition().has_parameters());
    }
}
