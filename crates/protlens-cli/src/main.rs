//! Protlens CLI - Main entry point

use anyhow::Result;
use clap::Parser;
use protlens_cli::{commands, Cli, Commands};
use protlens_common::logging::{init_logging, LogConfig, LogLevel};
use tracing::debug;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let log_level = if cli.verbose { LogLevel::Debug } else { LogLevel::Warn };
    let log_config = LogConfig::builder()
        .level(log_level)
        .log_file_prefix("protlens")
        .filter_directives("hyper=warn,reqwest=warn")
        .build()
        .merge_env()?;

    // Keep running without logs, but say why
    let _guard = match init_logging(&log_config) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: logging disabled: {e:#}");
            None
        },
    };

    let config = cli.uniprot_config()?;
    debug!(search_url = %config.search_url, entry_url = %config.entry_url, "Resolved UniProt configuration");

    match &cli.command {
        Commands::Search { query, json, .. } => commands::search::run(&config, query, *json).await?,
        Commands::Entry { accession, json } => commands::entry::run(&config, accession, *json).await?,
    }

    Ok(())
}
