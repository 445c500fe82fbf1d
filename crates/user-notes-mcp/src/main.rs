//! User Notes MCP Server — entry point.

use std::sync::Arc;
use tokio::sync::Mutex;

use clap::{Parser, Subcommand};

use user_notes_mcp::config::{load_config, resolve_notes_path, ServerConfig};
use user_notes_mcp::prompts::PromptRegistry;
use user_notes_mcp::protocol::ProtocolHandler;
use user_notes_mcp::resources::ResourceRegistry;
use user_notes_mcp::session::SessionManager;
use user_notes_mcp::tools::ToolRegistry;
use user_notes_mcp::transport::StdioTransport;
use user_notes_mcp::types::InitializeResult;

#[derive(Parser)]
#[command(
    name = "user-notes-mcp",
    about = "MCP server for user notes — append, read, and summarize notes from any LLM client",
    version
)]
struct Cli {
    /// Path to the notes file.
    #[arg(short, long, global = true)]
    notes: Option<String>,

    /// Configuration file path.
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start MCP server over stdio (default).
    Serve,

    /// Print server capabilities, tools, resources, and prompts as JSON.
    Info,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match cli.config.as_deref() {
        Some(path) => Some(load_config(path)?),
        None => None,
    };

    // Initialize logging. Stdout carries protocol frames, so logs go to stderr.
    let log_level = cli
        .log_level
        .clone()
        .or_else(|| config.as_ref().map(|c| c.log_level.clone()))
        .unwrap_or_else(|| ServerConfig::default().log_level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            let notes_path = resolve_notes_path(cli.notes.as_deref(), config.as_ref());
            tracing::info!("User Notes MCP server");
            tracing::info!("Notes: {notes_path}");

            let session = Arc::new(Mutex::new(SessionManager::open(&notes_path)));
            let handler = ProtocolHandler::new(session);
            let transport = StdioTransport::new(handler);
            transport.run().await?;
        }

        Commands::Info => {
            let info = serde_json::json!({
                "initialize": InitializeResult::default_result(),
                "tools": ToolRegistry::list_tools(),
                "resources": ResourceRegistry::list_resources(),
                "resourceTemplates": ResourceRegistry::list_templates(),
                "prompts": PromptRegistry::list_prompts(),
            });
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
    }

    Ok(())
}
