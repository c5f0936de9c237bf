//! Prebuilt agent teams.
//!
//! Two layouts are provided. In the delegating layout the orchestrator owns
//! the weather tool and transfers greetings and farewells to sub-agents. In
//! the routing layout the orchestrator has no native tools and calls three
//! specialist agents as tools.

use crate::agent::{AgentConfig, AgentError, AgentResult};
use crate::invoker::InvokerHandler;
use crate::tools::{time, weather, SayGoodbyeTool, SayHelloTool};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Name of the top-level agent in both layouts.
pub const ORCHESTRATOR: &str = "TeamOrchestrator";

/// Team layout selected at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamVariant {
	/// Orchestrator handles weather and transfers to greeting/farewell sub-agents.
	#[default]
	Delegating,
	/// Orchestrator routes every request to a specialist agent.
	Routing,
}

impl TeamVariant {
	/// All variants, in display order.
	pub const ALL: [TeamVariant; 2] = [TeamVariant::Delegating, TeamVariant::Routing];

	/// Build the team for this layout.
	pub fn build(self, model: &str) -> AgentConfig {
		match self {
			Self::Delegating => weather_team(model),
			Self::Routing => weather_time_team(model),
		}
	}
}

impl fmt::Display for TeamVariant {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Delegating => write!(f, "delegating"),
			Self::Routing => write!(f, "routing"),
		}
	}
}

impl FromStr for TeamVariant {
	type Err = AgentError;

	fn from_str(s: &str) -> AgentResult<Self> {
		match s.trim().to_lowercase().as_str() {
			"delegating" | "delegate" => Ok(Self::Delegating),
			"routing" | "router" => Ok(Self::Routing),
			other => Err(AgentError::UnknownVariant {
				value: other.to_string(),
			}),
		}
	}
}

/// Orchestrator with `get_weather`, transferring to greeting and farewell
/// sub-agents.
pub fn weather_team(model: &str) -> AgentConfig {
	let greeting_agent = AgentConfig::new("greeting_agent", model)
		.with_description("Handles simple greetings and hellos using the 'say_hello' tool.")
		.with_instruction(
			"You are the Greeting Agent. Your ONLY task is to provide a friendly greeting to the user. \
			 Use the 'say_hello' tool to generate the greeting. \
			 If the user provides their name, make sure to pass it to the tool. \
			 Do not engage in any other conversation or tasks.",
		)
		.with_tool(SayHelloTool.definition());

	let farewell_agent = AgentConfig::new("farewell_agent", model)
		.with_description("Handles simple farewells and goodbyes using the 'say_goodbye' tool.")
		.with_instruction(
			"You are the Farewell Agent. Your ONLY task is to provide a polite goodbye message. \
			 Use the 'say_goodbye' tool when the user indicates they are leaving or ending the conversation \
			 (e.g., using words like 'bye', 'goodbye', 'thanks bye', 'see you'). \
			 Do not perform any other actions.",
		)
		.with_tool(SayGoodbyeTool.definition());

	AgentConfig::new(ORCHESTRATOR, model)
		.with_description(
			"The main coordinator agent. Handles weather requests and delegates greetings/farewells to specialists.",
		)
		.with_instruction(
			"You are the main Weather Agent coordinating a team. Your primary responsibility is to provide weather information. \
			 Use the 'get_weather' tool ONLY for specific weather requests (e.g., 'weather in London'). \
			 You have specialized sub-agents: \
			 1. 'greeting_agent': Handles simple greetings like 'Hi', 'Hello'. Delegate to it for these. \
			 2. 'farewell_agent': Handles simple farewells like 'Bye', 'See you'. Delegate to it for these. \
			 Analyze the user's query. If it's a greeting, delegate to 'greeting_agent'. If it's a farewell, delegate to 'farewell_agent'. \
			 If it's a weather request, handle it yourself using 'get_weather'. \
			 For anything else, respond appropriately or state you cannot handle it.",
		)
		.with_tool(weather::definition())
		.with_sub_agent(greeting_agent)
		.with_sub_agent(farewell_agent)
}

/// Orchestrator routing to weather/time, greeting and farewell agents
/// exposed as tools.
pub fn weather_time_team(model: &str) -> AgentConfig {
	let weather_time_agent = AgentConfig::new("WeatherAndTimeAgent", model)
		.with_description(
			"An agent that provides current weather reports and current time for specified cities. \
			 It uses external tools for this purpose.",
		)
		.with_instruction(
			"You are a helpful Weather and Time Assistant. \
			 Your sole purpose is to answer questions about the current weather and time in cities. \
			 Always use the provided `get_weather` and `get_current_time` tools to fetch information. \
			 If a city is not supported by a tool, state that fact clearly. \
			 If asked about anything other than weather or time, tell the user that you are specialized in weather and time.",
		)
		.with_tool(weather::definition())
		.with_tool(time::definition());

	let greeting_agent = AgentConfig::new("GreetingAgent", model)
		.with_description("An agent that provides friendly greetings and welcomes users.")
		.with_instruction(
			"You are a polite and friendly Greeting Agent. \
			 Your only task is to respond to greetings like 'hello', 'hi', 'hey', 'good morning', etc. \
			 Respond with a warm greeting and ask how you can assist them. \
			 Do not try to answer complex questions or use tools. \
			 Example responses: 'Hello there! How can I assist you?', \
			 'Hi! I'm your assistant. How can I help you?'",
		);

	let farewell_agent = AgentConfig::new("FarewellAgent", model)
		.with_description("An agent that politely says goodbye and ends conversations.")
		.with_instruction(
			"You are a polite Farewell Agent. \
			 Your only task is to respond to farewells like 'bye', 'goodbye', 'see you', 'thanks for your help', 'exit', 'quit'. \
			 Respond with a warm and friendly goodbye. \
			 Example responses: 'Goodbye! Have a wonderful day!'",
		);

	AgentConfig::new(ORCHESTRATOR, model)
		.with_description(
			"A routing agent that intelligently delegates user requests to specialized sub-agents: \
			 WeatherAndTimeAgent, GreetingAgent, and FarewellAgent. \
			 It ensures the correct agent handles the query.",
		)
		.with_instruction(
			"You are a smart assistant that routes user requests to the most appropriate specialist agent. \
			 Your goal is to accurately determine the user's intent and invoke the correct sub-agent. \
			 1. If the user asks about the weather or current time in a city, route to `WeatherAndTimeAgent`. \
			 2. If the user expresses a greeting (e.g., 'hi', 'hello', 'good morning'), route to `GreetingAgent`. \
			 3. If the user expresses a farewell (e.g., 'bye', 'goodbye', 'exit', 'quit', 'thanks for your help'), route to `FarewellAgent`. \
			 4. For any other request that doesn't fit the above, answer politely that you are a specialized router \
			 and can only connect them to the weather/time, greeting, or farewell agents. \
			 Always try to route the query to one of the specific agents defined in your tools.",
		)
		.with_agent_tool(weather_time_agent)
		.with_agent_tool(greeting_agent)
		.with_agent_tool(farewell_agent)
}
