//! Error types for agent configuration.

use thiserror::Error;

/// Errors found while validating an agent tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AgentError {
	/// A required text field is blank.
	#[error("Agent '{agent}' has an empty {field}")]
	EmptyField {
		/// Agent name (may itself be empty).
		agent: String,
		/// Field that is blank.
		field: &'static str,
	},

	/// Two agents in the same tree share a name.
	#[error("Agent name '{name}' is used more than once")]
	DuplicateAgent {
		/// The repeated name.
		name: String,
	},

	/// A native tool is not registered.
	#[error("Agent '{agent}' references unknown tool '{tool}'")]
	UnknownTool {
		/// Agent that references the tool.
		agent: String,
		/// Missing tool name.
		tool: String,
	},

	/// An unrecognised team layout name.
	#[error("Unknown team variant '{value}': expected 'delegating' or 'routing'")]
	UnknownVariant {
		/// Value as given.
		value: String,
	},
}

impl AgentError {
	/// Create an empty field error.
	pub fn empty_field(agent: impl Into<String>, field: &'static str) -> Self {
		Self::EmptyField {
			agent: agent.into(),
			field,
		}
	}

	/// Create a duplicate agent error.
	pub fn duplicate_agent(name: impl Into<String>) -> Self {
		Self::DuplicateAgent { name: name.into() }
	}

	/// Create an unknown tool error.
	pub fn unknown_tool(agent: impl Into<String>, tool: impl Into<String>) -> Self {
		Self::UnknownTool {
			agent: agent.into(),
			tool: tool.into(),
		}
	}
}
