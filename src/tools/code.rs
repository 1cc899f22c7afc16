//! Code lookup tool implementation
//!
//! Implements the `code(code)` MCP tool

use crate::cli::CodeArgs;
use crate::error::{validate_code, AppError};
use crate::knowledge::SymptomEntry;
use crate::mcp::{McpResponse, ToolResult};
use crate::search::search_by_code;
use serde_json::Value;
use tracing::debug;

/// Handle code tool call (MCP)
pub async fn handle_code(id: Option<Value>, args: Value) -> McpResponse {
    match handle_code_impl(args).await {
        Ok(content) => McpResponse::success(id, serde_json::to_value(content).unwrap()),
        Err(e) => McpResponse::error(id, e.error_code(), &e.message()),
    }
}

async fn handle_code_impl(args: Value) -> Result<ToolResult, AppError> {
    let code_args: CodeArgs = serde_json::from_value(args)
        .map_err(|e| AppError::InvalidInput(format!("Invalid arguments: {}", e)))?;

    execute_code(code_args).await
}

/// Shared implementation for code lookup (used by MCP and CLI)
pub async fn execute_code(args: CodeArgs) -> Result<ToolResult, AppError> {
    validate_code(&args.code)?;

    let code = args.code.trim();
    debug!("Code lookup: '{}'", code);

    // An unknown code is an empty result, not an error
    let results = search_by_code(code);
    let markdown = format_code_results(&results, code);

    Ok(ToolResult::text(markdown))
}

/// Format code lookup results into markdown
pub fn format_code_results(entries: &[&SymptomEntry], code: &str) -> String {
    let mut md = String::new();
    md.push_str(&format!("# Code {} · {} matches\n\n", code, entries.len()));

    if entries.is_empty() {
        md.push_str(&format!("No symptom entries carry code '{}'.\n", code));
        return md;
    }

    for entry in entries {
        md.push_str(&format!(
            "## {} [{}]\n\n",
            entry.symptom,
            entry.urgency.label()
        ));
        md.push_str(&format!("> {}\n\n", entry.description));
        md.push_str(&format!("- Codes: {}\n\n", entry.codes.join(", ")));
    }

    md
}
