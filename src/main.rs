//! symdex MCP Server & CLI (Rust)
//!
//! Dual-mode application:
//! - MCP Server Mode (default): Model Context Protocol server using stdio
//! - CLI Mode: Command-line utility for direct tool execution
//!
//! Implements three tools over a curated clinical knowledge base:
//! - `search(query)` - Ranked, urgency-aware symptom search
//! - `code(code)` - Classification-code lookup
//! - `triage(query)` - Red flags and differentials for the best match

mod cli;
mod error;
mod knowledge;
mod mcp;
mod search;
mod tools;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Detect mode: CLI if args present, MCP server otherwise
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        // CLI mode - parse arguments and execute
        run_cli_mode().await
    } else {
        // MCP server mode - default behavior
        run_mcp_mode().await
    }
}

/// Run in CLI mode
async fn run_cli_mode() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity flags
    let log_level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr) // Log to stderr to keep stdout clean
        .init();

    // Execute command
    let result = match cli.command {
        Some(Commands::Search(args)) => to_stdout(tools::search::execute_search(args).await),
        Some(Commands::Code(args)) => to_stdout(tools::code::execute_code(args).await),
        Some(Commands::Triage(args)) => to_stdout(tools::triage::execute_triage(args).await),
        None => {
            eprintln!("Error: No command specified. Use --help for usage information.");
            std::process::exit(1);
        }
    };

    // Handle result and exit with appropriate code
    match result {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(get_exit_code(&e));
        }
    }
}

/// Extract the markdown text from a ToolResult for stdout
fn to_stdout(result: Result<mcp::ToolResult, error::AppError>) -> Result<String> {
    match result {
        Ok(tool_result) => Ok(tool_result
            .content
            .first()
            .map(|c| c.text.clone())
            .unwrap_or_default()),
        Err(e) => Err(anyhow::anyhow!(e.message())),
    }
}

/// Map AppError to exit code
fn get_exit_code(err: &anyhow::Error) -> i32 {
    let err_str = err.to_string().to_lowercase();

    if err_str.contains("invalid") || err_str.contains("usage") {
        1 // Invalid arguments or usage error
    } else if err_str.contains("not found") {
        3 // Not found error
    } else {
        5 // Other application errors
    }
}

/// Run in MCP server mode
async fn run_mcp_mode() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    info!("Starting symdex MCP Server");

    // Handle stdio MCP communication
    mcp::handle_stdio().await?;

    Ok(())
}
