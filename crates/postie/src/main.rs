//! postie CLI - multi-platform publishing client.
//!
//! Provides commands for:
//! - `oschina draft list|show|create|update|publish|delete`: manage OSChina drafts
//! - `oschina categories`: list OSChina blog categories

mod commands;
mod error;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::OschinaArgs;
use output::Output;

/// postie - publish articles to blogging platforms.
#[derive(Parser)]
#[command(name = "postie", version, about)]
struct Cli {
    /// Enable info-level logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file (default: auto-discover postie.toml).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// OSChina blog commands.
    Oschina(OschinaArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Oschina(args) => args.execute(cli.config.as_deref(), &output),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
