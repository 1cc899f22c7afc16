//! Search tool implementation
//!
//! Implements the `search(query)` MCP tool

use crate::cli::SearchArgs;
use crate::error::{validate_query, AppError};
use crate::knowledge::SymptomEntry;
use crate::mcp::{McpResponse, ToolResult};
use crate::search::search_symptoms;
use serde_json::Value;
use tracing::debug;

/// Default result count, matching the search box page size
pub const DEFAULT_LIMIT: usize = 8;
/// Upper bound on requested results
pub const MAX_LIMIT: usize = 25;

/// Handle search tool call (MCP)
pub async fn handle_search(id: Option<Value>, args: Value) -> McpResponse {
    match handle_search_impl(args).await {
        Ok(content) => McpResponse::success(id, serde_json::to_value(content).unwrap()),
        Err(e) => McpResponse::error(id, e.error_code(), &e.message()),
    }
}

async fn handle_search_impl(args: Value) -> Result<ToolResult, AppError> {
    let search_args: SearchArgs = serde_json::from_value(args)
        .map_err(|e| AppError::InvalidInput(format!("Invalid arguments: {}", e)))?;

    execute_search(search_args).await
}

/// Shared implementation for search (used by MCP and CLI)
pub async fn execute_search(args: SearchArgs) -> Result<ToolResult, AppError> {
    validate_query(&args.query)?;

    let limit = args.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    debug!("Search request: query='{}', limit={}", args.query, limit);

    let results = search_symptoms(&args.query, limit);
    let markdown = format_search_results(&results, &args.query);

    Ok(ToolResult::text(markdown))
}

/// Format search results into markdown for display (used by tests and CLI)
pub fn format_search_results(entries: &[&SymptomEntry], query: &str) -> String {
    let mut md = String::new();
    md.push_str(&format!("# Symptom Search · {} matches\n\n", entries.len()));

    if entries.is_empty() {
        md.push_str(&format!("No entries match '{}'.\n", query));
        return md;
    }

    for entry in entries {
        md.push_str(&format!(
            "## {} [{}]\n\n",
            entry.symptom,
            entry.urgency.label()
        ));

        md.push_str(&format!("> {}\n\n", entry.description));

        if !entry.medical_terms.is_empty() {
            md.push_str(&format!(
                "- Medical terms: {}\n",
                entry.medical_terms.join(", ")
            ));
        }
        if !entry.common_terms.is_empty() {
            md.push_str(&format!(
                "- Common phrasings: {}\n",
                entry.common_terms.join(", ")
            ));
        }
        if !entry.codes.is_empty() {
            md.push_str(&format!("- Codes: {}\n", entry.codes.join(", ")));
        }
        if !entry.associated_conditions.is_empty() {
            md.push_str(&format!(
                "- Conditions: {}\n",
                entry.associated_conditions.join(", ")
            ));
        }
        if !entry.associated_tools.is_empty() {
            md.push_str(&format!(
                "- Assessment tools: {}\n",
                entry.associated_tools.join(", ")
            ));
        }

        md.push_str("\n---\n\n");
    }

    md
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::search_symptoms;

    #[tokio::test]
    async fn test_execute_search_basic() {
        let result = execute_search(SearchArgs {
            query: "chest pain".to_string(),
            limit: None,
        })
        .await
        .unwrap();

        let text = &result.content[0].text;
        assert!(text.contains("## chest pain [EMERGENCY]"));
        assert!(text.contains("R07.9"));
    }

    #[tokio::test]
    async fn test_execute_search_rejects_empty_query() {
        let err = execute_search(SearchArgs {
            query: String::new(),
            limit: None,
        })
        .await
        .unwrap_err();

        assert_eq!(err.error_code(), "invalid_input");
    }

    #[tokio::test]
    async fn test_execute_search_clamps_limit() {
        let result = execute_search(SearchArgs {
            query: "pain".to_string(),
            limit: Some(1000),
        })
        .await
        .unwrap();

        // No panic, and the header reports a sane count
        assert!(result.content[0].text.starts_with("# Symptom Search"));
    }

    #[test]
    fn test_format_search_results_empty() {
        let md = format_search_results(&[], "gibberish");
        assert!(md.contains("0 matches"));
        assert!(md.contains("No entries match 'gibberish'."));
    }

    #[test]
    fn test_format_search_results_lists_fields() {
        let results = search_symptoms("dyspnea", 1);
        let md = format_search_results(&results, "dyspnea");

        assert!(md.contains("# Symptom Search · 1 matches"));
        assert!(md.contains("## dyspnea [EMERGENCY]"));
        assert!(md.contains("- Medical terms: shortness of breath"));
        assert!(md.contains("- Codes: R06.00, R06.02"));
        assert!(md.contains("- Assessment tools: wells-pe, curb-65"));
    }

    #[test]
    fn test_short_query_formats_as_no_matches() {
        let results = search_symptoms("x", DEFAULT_LIMIT);
        let md = format_search_results(&results, "x");
        assert!(md.contains("0 matches"));
    }
}
