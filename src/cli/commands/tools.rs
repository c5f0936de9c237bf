//! Tool commands: weather, time, greetings and raw invocation.

use crate::cli::context::AppContext;
use crate::cli::error::{CliError, CliResult};
use crate::invoker::{generate_openai_tools, InvokerRegistry};
use colored::*;
use serde_json::{json, Value};

/// Invoke a registered tool and record the call in the session log.
pub async fn call_tool(ctx: &AppContext, name: &str, args: Value) -> CliResult<Value> {
    let args_text = args.to_string();
    ctx.logger.log_tool_request(name, &args_text)?;

    match ctx.registry.invoke(name, args).await {
        Ok(output) => {
            ctx.logger.log_tool_execution(
                name,
                &args_text,
                &output_text(&output),
                output_succeeded(&output),
            )?;
            Ok(output)
        }
        Err(e) => {
            ctx.logger.log_error(&e.to_string(), None)?;
            Err(e.into())
        }
    }
}

/// Parse the JSON argument string of `wtk call`; absent means `{}`.
pub fn parse_args(raw: Option<&str>) -> CliResult<Value> {
    let value: Value = match raw {
        Some(text) => serde_json::from_str(text)
            .map_err(|e| CliError::InvalidInput(format!("arguments are not valid JSON: {}", e)))?,
        None => json!({}),
    };

    if !value.is_object() {
        return Err(CliError::InvalidInput(
            "arguments must be a JSON object".to_string(),
        ));
    }
    Ok(value)
}

/// Whether a tool output is anything other than an error result.
pub fn output_succeeded(output: &Value) -> bool {
    output.get("status").and_then(Value::as_str) != Some("error")
}

/// Human-readable text of a tool output.
pub fn output_text(output: &Value) -> String {
    match output {
        Value::String(s) => s.clone(),
        Value::Object(map) => map
            .get("report")
            .or_else(|| map.get("error_message"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| output.to_string()),
        other => other.to_string(),
    }
}

/// Print a tool output; an error result becomes a [`CliError::ToolReported`].
pub fn print_output(output: &Value) -> CliResult<()> {
    let text = output_text(output);
    if output_succeeded(output) {
        println!("{}", text.green());
        Ok(())
    } else {
        Err(CliError::ToolReported(text))
    }
}

/// Call a tool and print its answer.
pub async fn run_tool(ctx: &AppContext, name: &str, args: Value) -> CliResult<()> {
    let output = call_tool(ctx, name, args).await?;
    print_output(&output)
}

/// List registered tools.
pub fn list_tools(ctx: &AppContext, as_json: bool) -> CliResult<()> {
    if as_json {
        let tools = generate_openai_tools(&ctx.registry);
        println!("{}", serde_json::to_string_pretty(&tools)?);
        return Ok(());
    }

    println!("{}", "Registered tools".cyan().bold());
    println!("{}", "================".cyan());
    for def in ctx.registry.list() {
        let params = def.required_parameters();
        let signature = if params.is_empty() {
            def.name.clone()
        } else {
            format!("{}({})", def.name, params.join(", "))
        };
        println!("  {} [{}]", signature.bold(), def.source);
        println!("    {}", def.description.dimmed());
    }
    Ok(())
}
