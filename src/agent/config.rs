//! Agent configuration records.

use crate::agent::{AgentError, AgentResult};
use crate::invoker::{InvokerDefinition, InvokerRegistry, InvokerSource};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::HashSet;

/// Declarative description of one agent handed to the runtime.
///
/// An agent can reach other agents two ways: as `sub_agents` (the runtime
/// transfers the conversation) or as tools built with [`as_delegate`]
/// (the runtime calls the agent and returns its answer).
///
/// [`as_delegate`]: AgentConfig::as_delegate
///
/// # Example
///
/// ```
/// use wtk::agent::AgentConfig;
/// use wtk::invoker::InvokerHandler;
/// use wtk::tools::SayHelloTool;
///
/// let greeter = AgentConfig::new("greeting_agent", "gemini-1.5-flash")
///     .with_description("Handles greetings.")
///     .with_instruction("Use the 'say_hello' tool to greet the user.")
///     .with_tool(SayHelloTool.definition());
///
/// assert_eq!(greeter.tool_names(), vec!["say_hello"]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
	/// Agent name, unique within a team.
	pub name: String,
	/// Model identifier.
	pub model: String,
	/// Short description used by other agents when delegating.
	#[serde(default)]
	pub description: String,
	/// System instruction.
	#[serde(default)]
	pub instruction: String,
	/// Tools this agent may call.
	#[serde(default)]
	pub tools: Vec<InvokerDefinition>,
	/// Agents this agent can transfer to.
	#[serde(default)]
	pub sub_agents: Vec<AgentConfig>,
	/// Agents this agent calls as tools; each also appears in `tools`.
	#[serde(default)]
	pub agent_tools: Vec<AgentConfig>,
}

impl AgentConfig {
	/// Create an agent with no description, instruction or tools.
	pub fn new(name: impl Into<String>, model: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			model: model.into(),
			description: String::new(),
			instruction: String::new(),
			tools: Vec::new(),
			sub_agents: Vec::new(),
			agent_tools: Vec::new(),
		}
	}

	/// Set the description.
	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = description.into();
		self
	}

	/// Set the instruction.
	pub fn with_instruction(mut self, instruction: impl Into<String>) -> Self {
		self.instruction = instruction.into();
		self
	}

	/// Add a tool.
	pub fn with_tool(mut self, tool: InvokerDefinition) -> Self {
		self.tools.push(tool);
		self
	}

	/// Add another agent as a callable tool.
	pub fn with_agent_tool(mut self, agent: AgentConfig) -> Self {
		self.tools.push(agent.as_delegate());
		self.agent_tools.push(agent);
		self
	}

	/// Add a sub-agent.
	pub fn with_sub_agent(mut self, agent: AgentConfig) -> Self {
		self.sub_agents.push(agent);
		self
	}

	/// This agent as an `Agent`-sourced tool definition.
	pub fn as_delegate(&self) -> InvokerDefinition {
		InvokerDefinition::with_string_params(
			self.name.clone(),
			self.description.clone(),
			&[("request", "The user request to hand to this agent.", true)],
			InvokerSource::Agent,
		)
		.with_metadata("model", Value::String(self.model.clone()))
	}

	/// Names of this agent's tools, in declaration order.
	pub fn tool_names(&self) -> Vec<&str> {
		self.tools.iter().map(|t| t.name.as_str()).collect()
	}

	/// This agent followed by its sub-agents and agent tools, depth first.
	pub fn walk(&self) -> Vec<&AgentConfig> {
		let mut agents = vec![self];
		for child in self.sub_agents.iter().chain(&self.agent_tools) {
			agents.extend(child.walk());
		}
		agents
	}

	/// Check the whole tree against a tool registry.
	///
	/// Names, models and instructions must be non-blank, agent names unique
	/// across the tree, and every native tool registered. Agent-sourced tools
	/// are checked through the agents they wrap.
	pub fn validate(&self, registry: &dyn InvokerRegistry) -> AgentResult<()> {
		let mut seen = HashSet::new();

		for agent in self.walk() {
			if agent.name.trim().is_empty() {
				return Err(AgentError::empty_field(&agent.name, "name"));
			}
			if agent.model.trim().is_empty() {
				return Err(AgentError::empty_field(&agent.name, "model"));
			}
			if agent.instruction.trim().is_empty() {
				return Err(AgentError::empty_field(&agent.name, "instruction"));
			}
			if !seen.insert(agent.name.as_str()) {
				return Err(AgentError::duplicate_agent(&agent.name));
			}

			for tool in &agent.tools {
				if tool.source == InvokerSource::Native && !registry.contains(&tool.name) {
					return Err(AgentError::unknown_tool(&agent.name, &tool.name));
				}
			}
		}

		Ok(())
	}

	/// JSON payload describing the tree, with tools in OpenAI function form.
	pub fn manifest(&self) -> Value {
		json!({
			"name": self.name,
			"model": self.model,
			"description": self.description,
			"instruction": self.instruction,
			"tools": self
				.tools
				.iter()
				.map(|t| {
					let mut function = t.to_openai_function();
					function["source"] = json!(t.source);
					function
				})
				.collect::<Vec<_>>(),
			"sub_agents": self.sub_agents.iter().map(AgentConfig::manifest).collect::<Vec<_>>(),
			"agent_tools": self.agent_tools.iter().map(AgentConfig::manifest).collect::<Vec<_>>(),
		})
	}
}
