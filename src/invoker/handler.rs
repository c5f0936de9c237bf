//! Handler trait for invokers executed in this process.

use crate::invoker::{InvokerDefinition, InvokerError, InvokerResult};
use async_trait::async_trait;
use serde_json::Value;

/// An executable tool.
///
/// Handlers receive the JSON arguments chosen by the model and return a
/// JSON value for the runtime to feed back into the conversation. They
/// must not fail for tool-level reasons; those are reported in the
/// returned value. An `Err` means the call itself was malformed.
#[async_trait]
pub trait InvokerHandler: Send + Sync {
	/// Declarative description of this tool.
	fn definition(&self) -> InvokerDefinition;

	/// Execute the tool with the given arguments.
	async fn invoke(&self, args: Value) -> InvokerResult<Value>;
}

/// Read a required string argument.
pub fn required_str<'a>(tool: &str, args: &'a Value, key: &str) -> InvokerResult<&'a str> {
	match args.get(key) {
		Some(Value::String(s)) => Ok(s.as_str()),
		Some(other) => Err(InvokerError::invalid_arguments(
			tool,
			format!("field '{}' must be a string, got {}", key, other),
		)),
		None => Err(InvokerError::invalid_arguments(
			tool,
			format!("missing required field '{}'", key),
		)),
	}
}

/// Read an optional string argument; `null` counts as absent.
pub fn optional_str<'a>(tool: &str, args: &'a Value, key: &str) -> InvokerResult<Option<&'a str>> {
	match args.get(key) {
		None | Some(Value::Null) => Ok(None),
		Some(Value::String(s)) => Ok(Some(s.as_str())),
		Some(other) => Err(InvokerError::invalid_arguments(
			tool,
			format!("field '{}' must be a string, got {}", key, other),
		)),
	}
}
