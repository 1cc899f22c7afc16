//! CLI mode implementation
//!
//! Provides command-line interface for the symdex tools

use clap::{Parser, Subcommand};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Symdex CLI
#[derive(Parser)]
#[command(name = "symdex")]
#[command(about = "Clinical symptom search and triage reference utility", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output (no short flag to avoid conflicts)
    #[arg(long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the symptom knowledge base
    Search(SearchArgs),
    /// Look up symptoms by classification code
    Code(CodeArgs),
    /// Show red flags and differentials for the best-matching symptom
    Triage(TriageArgs),
}

/// Search tool arguments
#[derive(Parser, JsonSchema, Deserialize, Serialize, Clone, Debug)]
pub struct SearchArgs {
    /// Free-text query: symptom name, synonym, patient phrasing or code
    #[arg(short = 'q', long)]
    #[schemars(description = "Free-text query: symptom name, synonym, patient phrasing or code")]
    pub query: String,

    /// Maximum number of results (default 8, max 25)
    #[arg(short = 'l', long)]
    #[schemars(description = "Maximum number of results (default 8, max 25)")]
    pub limit: Option<usize>,
}

/// Code lookup tool arguments
#[derive(Parser, JsonSchema, Deserialize, Serialize, Clone, Debug)]
pub struct CodeArgs {
    /// Classification code, e.g. R06.02 (case-insensitive)
    #[arg(short = 'c', long)]
    #[schemars(description = "Classification code, e.g. R06.02 (case-insensitive)")]
    pub code: String,
}

/// Triage tool arguments
#[derive(Parser, JsonSchema, Deserialize, Serialize, Clone, Debug)]
pub struct TriageArgs {
    /// Free-text query; red flags and differentials of the single best match are returned
    #[arg(short = 'q', long)]
    #[schemars(
        description = "Free-text query; red flags and differentials of the single best match are returned"
    )]
    pub query: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_args() {
        let args = SearchArgs {
            query: "shortness of breath".to_string(),
            limit: Some(10),
        };
        assert_eq!(args.query, "shortness of breath");
        assert_eq!(args.limit, Some(10));
    }

    #[test]
    fn test_code_args_roundtrip() {
        let args = CodeArgs {
            code: "R06.02".to_string(),
        };
        let json = serde_json::to_value(&args).unwrap();
        let back: CodeArgs = serde_json::from_value(json).unwrap();
        assert_eq!(back.code, "R06.02");
    }
}
