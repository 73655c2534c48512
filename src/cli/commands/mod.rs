//! CLI commands implementation.
//!
//! This module contains the CLI parser and dispatches to command-specific modules.

mod db;
mod serve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{load_settings, LoadOptions};

#[derive(Parser)]
#[command(name = "northwoods")]
#[command(about = "Housing-security resource directory for Northern Michigan")]
#[command(version)]
pub struct Cli {
    /// Config file path (overrides auto-discovery)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Apply migrations and start the HTTP API
    Serve {
        /// Address to bind: PORT, HOST, or HOST:PORT
        bind: Option<String>,
    },

    /// Apply pending database migrations and exit
    Migrate,

    /// Check database connectivity
    Check,
}

/// Run the CLI.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let options = LoadOptions {
        config_path: cli.config,
    };
    let (settings, config) = load_settings(options).await?;

    if let Some(ref path) = config.source_path {
        tracing::info!("Loaded config from {}", path.display());
    }

    match cli.command {
        Commands::Serve { bind } => {
            let bind = bind.unwrap_or_else(|| settings.bind.clone());
            serve::cmd_serve(&settings, &bind).await
        }
        Commands::Migrate => db::cmd_migrate(&settings).await,
        Commands::Check => db::cmd_check(&settings).await,
    }
}
