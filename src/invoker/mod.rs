//! Invoker module - the boundary between tools and the agent runtime.
//!
//! The runtime sees tools only through their [`InvokerDefinition`]s and
//! calls them with JSON arguments. Native tools run here through an
//! [`InvokerHandler`]; agent delegates are declared here but executed by
//! the runtime.
//!
//! ```text
//! ┌──────────────┐  ┌──────────────┐  ┌────────────────┐
//! │ get_weather  │  │ say_hello    │  │ GreetingAgent  │
//! │ (native)     │  │ (native)     │  │ (agent)        │
//! └──────┬───────┘  └──────┬───────┘  └───────┬────────┘
//!        │                 │                  │
//!        ▼                 ▼                  ▼
//! ┌────────────────────────────────────────────────────┐
//! │              DefaultInvokerRegistry                │
//! │   definitions ──► to_openai_function() ──► runtime │
//! │   invoke(name, args) ──► handler                   │
//! └────────────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```
//! use wtk::invoker::{create_registry, generate_openai_tools, InvokerRegistry};
//! use wtk::tools::SayHelloTool;
//!
//! let mut registry = create_registry();
//! registry.register(SayHelloTool).unwrap();
//!
//! let tools = generate_openai_tools(&registry);
//! assert_eq!(tools.len(), 1);
//! assert_eq!(tools[0]["function"]["name"], "say_hello");
//! ```

mod definition;
mod error;
mod handler;
mod registry;
mod source;

pub use definition::InvokerDefinition;
pub use error::InvokerError;
pub use handler::{optional_str, required_str, InvokerHandler};
pub use registry::{DefaultInvokerRegistry, InvokerRegistry};
pub use source::InvokerSource;

/// Result type for invoker operations.
pub type InvokerResult<T> = Result<T, InvokerError>;

/// Create a new empty invoker registry.
pub fn create_registry() -> DefaultInvokerRegistry {
	DefaultInvokerRegistry::new()
}

/// Generate OpenAI-compatible tool schemas from a registry.
pub fn generate_openai_tools(registry: &dyn InvokerRegistry) -> Vec<serde_json::Value> {
	registry
		.list()
		.iter()
		.map(|def| def.to_openai_function())
		.collect()
}

/// Generate OpenAI-compatible tool schemas for a specific source.
pub fn generate_openai_tools_by_source(
	registry: &dyn InvokerRegistry,
	source: InvokerSource,
) -> Vec<serde_json::Value> {
	registry
		.list_by_source(source)
		.iter()
		.map(|def| def.to_openai_function())
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_create_registry() {
		let registry = create_registry();
		assert!(registry.is_empty());
	}

	#[test]
	fn test_generate_openai_tools_by_source() {
		let mut registry = create_registry();

		registry
			.register_definition(InvokerDefinition::new_simple(
				"say_goodbye",
				"Farewell",
				InvokerSource::Native,
			))
			.unwrap();
		registry
			.register_definition(InvokerDefinition::new_simple(
				"GreetingAgent",
				"Greets users",
				InvokerSource::Agent,
			))
			.unwrap();
		registry
			.register_definition(InvokerDefinition::new_simple(
				"FarewellAgent",
				"Says goodbye",
				InvokerSource::Agent,
			))
			.unwrap();

		let all = generate_openai_tools(&registry);
		assert_eq!(all.len(), 3);
		for tool in &all {
			assert_eq!(tool["type"], "function");
			assert!(tool["function"]["name"].is_string());
		}

		assert_eq!(generate_openai_tools_by_source(&registry, InvokerSource::Native).len(), 1);
		assert_eq!(generate_openai_tools_by_source(&registry, InvokerSource::Agent).len(), 2);
	}
}
