//! Triage tool implementation
//!
//! Implements the `triage(query)` MCP tool: red flags and differentials
//! of the single best match, plus the condition and assessment-tool
//! identifiers of the top matches.

use crate::cli::TriageArgs;
use crate::error::{validate_query, AppError};
use crate::mcp::{McpResponse, ToolResult};
use crate::search::{
    best_match, conditions_for_symptom, differentials_for, red_flags_for, tools_for_symptom,
};
use serde_json::Value;
use tracing::debug;

/// Handle triage tool call (MCP)
pub async fn handle_triage(id: Option<Value>, args: Value) -> McpResponse {
    match handle_triage_impl(args).await {
        Ok(content) => McpResponse::success(id, serde_json::to_value(content).unwrap()),
        Err(e) => McpResponse::error(id, e.error_code(), &e.message()),
    }
}

async fn handle_triage_impl(args: Value) -> Result<ToolResult, AppError> {
    let triage_args: TriageArgs = serde_json::from_value(args)
        .map_err(|e| AppError::InvalidInput(format!("Invalid arguments: {}", e)))?;

    execute_triage(triage_args).await
}

/// Shared implementation for triage (used by MCP and CLI)
pub async fn execute_triage(args: TriageArgs) -> Result<ToolResult, AppError> {
    validate_query(&args.query)?;
    debug!("Triage request: query='{}'", args.query);

    let Some(entry) = best_match(&args.query) else {
        // Matching nothing is an empty answer, not an error
        return Ok(ToolResult::text(format!(
            "No matching symptom for '{}'.\n",
            args.query
        )));
    };

    let red_flags = red_flags_for(&args.query);
    let differentials = differentials_for(&args.query);
    let conditions = conditions_for_symptom(&args.query);
    let tools = tools_for_symptom(&args.query);

    let mut md = String::new();
    md.push_str(&format!(
        "# Triage · {} [{}]\n\n",
        entry.symptom,
        entry.urgency.label()
    ));

    md.push_str("## Red flags\n\n");
    if red_flags.is_empty() {
        md.push_str("No red flags recorded for this entry.\n");
    } else {
        for flag in &red_flags {
            md.push_str(&format!("- {}\n", flag));
        }
    }

    md.push_str("\n## Differentials\n\n");
    if differentials.is_empty() {
        md.push_str("No differentials recorded for this entry.\n");
    } else {
        for dx in &differentials {
            md.push_str(&format!("- {}\n", dx));
        }
    }

    if !conditions.is_empty() {
        md.push_str(&format!(
            "\n## Related conditions\n\n{}\n",
            conditions.join(", ")
        ));
    }
    if !tools.is_empty() {
        md.push_str(&format!("\n## Assessment tools\n\n{}\n", tools.join(", ")));
    }

    Ok(ToolResult::text(md))
}
