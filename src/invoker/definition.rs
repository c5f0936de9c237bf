//! Invoker definition type for describing callable tools.

use crate::invoker::InvokerSource;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::collections::HashMap;

/// Declarative description of a tool as the agent runtime sees it.
///
/// The definition is what gets serialized into an agent's tool list; the
/// executable part lives in an [`InvokerHandler`](crate::invoker::InvokerHandler).
///
/// # Example
///
/// ```
/// use wtk::invoker::{InvokerDefinition, InvokerSource};
///
/// let def = InvokerDefinition::with_string_params(
///     "get_current_time",
///     "Get the current local time in a city",
///     &[("city", "Name of the city", true)],
///     InvokerSource::Native,
/// );
///
/// let schema = def.to_openai_function();
/// assert_eq!(schema["function"]["name"], "get_current_time");
/// assert_eq!(schema["function"]["parameters"]["required"][0], "city");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InvokerDefinition {
	/// Unique identifier; registry lookups and agent tool lists use it.
	pub name: String,

	/// Human-readable description for LLM consumption.
	pub description: String,

	/// JSON Schema describing the parameters this invoker accepts.
	pub parameters: Value,

	/// Where this invoker is executed.
	pub source: InvokerSource,

	/// Optional metadata such as routing hints.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub metadata: Option<HashMap<String, Value>>,
}

impl InvokerDefinition {
	/// Create a new invoker definition.
	pub fn new(
		name: impl Into<String>,
		description: impl Into<String>,
		parameters: Value,
		source: InvokerSource,
	) -> Self {
		Self {
			name: name.into(),
			description: description.into(),
			parameters,
			source,
			metadata: None,
		}
	}

	/// Create a new invoker definition that takes no parameters.
	pub fn new_simple(
		name: impl Into<String>,
		description: impl Into<String>,
		source: InvokerSource,
	) -> Self {
		Self::new(
			name,
			description,
			json!({
				"type": "object",
				"properties": {}
			}),
			source,
		)
	}

	/// Create a definition whose parameters are all strings.
	///
	/// Each entry is `(name, description, required)`.
	pub fn with_string_params(
		name: impl Into<String>,
		description: impl Into<String>,
		params: &[(&str, &str, bool)],
		source: InvokerSource,
	) -> Self {
		let mut properties = Map::new();
		let mut required = Vec::new();
		for (param, param_description, is_required) in params {
			properties.insert(
				(*param).to_string(),
				json!({ "type": "string", "description": param_description }),
			);
			if *is_required {
				required.push(Value::String((*param).to_string()));
			}
		}

		Self::new(
			name,
			description,
			json!({
				"type": "object",
				"properties": properties,
				"required": required,
			}),
			source,
		)
	}

	/// Add a metadata entry using builder pattern.
	pub fn with_metadata(mut self, key: impl Into<String>, value: Value) -> Self {
		self.metadata
			.get_or_insert_with(HashMap::new)
			.insert(key.into(), value);
		self
	}

	/// Get a metadata value by key.
	pub fn get_metadata(&self, key: &str) -> Option<&Value> {
		self.metadata.as_ref()?.get(key)
	}

	/// Generate an OpenAI-compatible function calling schema.
	pub fn to_openai_function(&self) -> Value {
		json!({
			"type": "function",
			"function": {
				"name": self.name,
				"description": self.description,
				"parameters": self.parameters,
			}
		})
	}

	/// Check if this invoker has any parameters defined.
	pub fn has_parameters(&self) -> bool {
		self.parameters
			.get("properties")
			.and_then(Value::as_object)
			.map(|props| !props.is_empty())
			.unwrap_or(false)
	}

	/// Names of the parameters marked as required.
	pub fn required_parameters(&self) -> Vec<&str> {
		self.parameters
			.get("required")
			.and_then(Value::as_array)
			.map(|items| items.iter().filter_map(Value::as_str).collect())
			.unwrap_or_default()
	}
}
