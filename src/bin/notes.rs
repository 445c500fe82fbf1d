//! CLI entry point for the `notes` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use user_notes::cli::commands;
use user_notes::DEFAULT_NOTES_FILE;

#[derive(Parser)]
#[command(name = "notes", about = "Append-only plain-text notes", version)]
struct Cli {
    /// Path to the notes file
    #[arg(long, default_value = DEFAULT_NOTES_FILE)]
    file: PathBuf,

    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Append a note
    Add {
        /// The note text
        message: String,
    },
    /// Print all notes
    Read,
    /// Print the most recent note
    Latest,
    /// Print a summarization request for all notes
    Summary,
    /// Print a greeting for someone
    Greet {
        /// Who to greet
        name: String,
    },
    /// Print a greeting prompt
    Prompt {
        /// Who the greeting is for
        name: String,
        /// Style: friendly, formal, casual
        #[arg(long, default_value = "friendly")]
        style: String,
    },
    /// Show information about the notes file
    Info,
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let file = cli.file;
    let result = match cli.command {
        Commands::Add { message } => commands::cmd_add(&file, &message, json),
        Commands::Read => commands::cmd_read(&file, json),
        Commands::Latest => commands::cmd_latest(&file, json),
        Commands::Summary => commands::cmd_summary(&file, json),
        Commands::Greet { name } => commands::cmd_greet(&name, json),
        Commands::Prompt { name, style } => commands::cmd_prompt(&name, &style, json),
        Commands::Info => commands::cmd_info(&file, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            user_notes::NotesError::Io(_) => 1,
        };
        process::exit(code);
    }
}
