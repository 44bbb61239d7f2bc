//! Aide - Entry Point
//!
//! Text front end for the command dispatcher. Reads utterances from
//! stdin, submits them to the execution engine, and renders results,
//! holding at most one pending confirmation at a time.

use aide::command::{ExecutionEngine, ParsedCommand};
use aide::core::config::AssistantConfig;
use aide::core::error::Result;
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;

/// Natural-language desktop command dispatcher
#[derive(Parser, Debug)]
#[command(name = "aide")]
#[command(about = "Type plain-language commands; aide classifies and runs them")]
struct Args {
    /// Path to a TOML config file (built-in defaults when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter, e.g. "aide=debug"
    #[arg(long, default_value = "aide=info")]
    log: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(args.log.as_str())
        .init();

    let config = match &args.config {
        Some(path) => AssistantConfig::load(path)?,
        None => AssistantConfig::default(),
    };
    let engine = ExecutionEngine::new(config)?;

    println!("=== AIDE ===");
    println!("Type a command in plain language. 'help' lists commands, 'quit' exits.");
    println!();

    let mut pending: Option<ParsedCommand> = None;

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let input = line.trim();

        if input.is_empty() {
            continue;
        }
        if input == "quit" || input == "exit" || input == "q" {
            break;
        }

        let result = match pending.take() {
            Some(cmd) => match input.to_lowercase().as_str() {
                "yes" | "y" => engine.confirm(cmd),
                "no" | "n" => engine.cancel(&cmd),
                // Anything else abandons the pending command
                _ => engine.submit(input),
            },
            None => engine.submit(input),
        };

        println!("{}", result.message);
        if result.requires_confirmation {
            println!("(yes/no)");
            pending = result.pending;
        }
    }

    println!("Goodbye.");
    Ok(())
}
