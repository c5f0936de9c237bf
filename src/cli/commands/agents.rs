//! Agent team display.

use crate::agent::{AgentConfig, TeamVariant};
use crate::cli::context::AppContext;
use crate::cli::error::CliResult;
use colored::*;

/// Team layout from the flag, falling back to configuration.
pub fn select_variant(ctx: &AppContext, flag: Option<&str>) -> CliResult<TeamVariant> {
    Ok(flag.unwrap_or(&ctx.config.config.agent.team).parse()?)
}

/// Build, validate and print the agent team.
pub fn show_agents(ctx: &AppContext, variant: Option<&str>, as_json: bool) -> CliResult<()> {
    let variant = select_variant(ctx, variant)?;
    let team = variant.build(&ctx.config.config.agent.model);
    team.validate(&ctx.registry)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&team.manifest())?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Agent team:".cyan().bold(),
        variant.to_string().cyan()
    );
    for line in render_tree(&team) {
        println!("{}", line);
    }
    Ok(())
}

/// One line per agent, indented by depth.
pub fn render_tree(team: &AgentConfig) -> Vec<String> {
    let mut lines = Vec::new();
    render(team, 0, "", &mut lines);
    lines
}

fn render(agent: &AgentConfig, depth: usize, role: &str, lines: &mut Vec<String>) {
    let tools: Vec<&str> = agent
        .tools
        .iter()
        .filter(|t| !agent.agent_tools.iter().any(|a| a.name == t.name))
        .map(|t| t.name.as_str())
        .collect();
    let tools = if tools.is_empty() {
        String::new()
    } else {
        format!(" tools: {}", tools.join(", "))
    };

    lines.push(format!(
        "{}{}{} [{}]{}",
        "  ".repeat(depth),
        role,
        agent.name,
        agent.model,
        tools
    ));

    for sub in &agent.sub_agents {
        render(sub, depth + 1, "sub-agent ", lines);
    }
    for delegate in &agent.agent_tools {
        render(delegate, depth + 1, "agent-tool ", lines);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::{weather_team, weather_time_team};

    #[test]
    fn test_render_delegating_tree() {
        let lines = render_tree(&weather_team("m"));
        assert_eq!(
            lines,
            vec![
                "TeamOrchestrator [m] tools: get_weather",
                "  sub-agent greeting_agent [m] tools: say_hello",
                "  sub-agent farewell_agent [m] tools: say_goodbye",
            ]
        );
    }

    #[test]
    fn test_render_routing_tree() {
        let lines = render_tree(&weather_time_team("m"));
        assert_eq!(
            lines,
            vec![
                "TeamOrchestrator [m]",
                "  agent-tool WeatherAndTimeAgent [m] tools: get_weather, get_current_time",
                "  agent-tool GreetingAgent [m]",
                "  agent-tool FarewellAgent [m]",
            ]
        );
    }
}
