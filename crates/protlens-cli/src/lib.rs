//! Protlens CLI Library
//!
//! Command-line access to the UniProt research tool.
//!
//! - **Search**: run a free-text query and print the tool output (`protlens search`)
//! - **Entry**: look up one accession (`protlens entry`)
//!
//! Text output is exactly what an agent receives from the tool, so the binary
//! doubles as a way to inspect what the model will see.

pub mod commands;

use clap::{Parser, Subcommand};
use protlens_uniprot::UniProtConfig;

/// Protlens - protein research from the command line
#[derive(Parser, Debug)]
#[command(name = "protlens")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// UniProt search endpoint
    #[arg(long, env = "UNIPROT_SEARCH_URL", global = true)]
    pub search_url: Option<String>,

    /// UniProt entry endpoint
    #[arg(long, env = "UNIPROT_ENTRY_URL", global = true)]
    pub entry_url: Option<String>,

    /// Contact email sent to UniProt in the User-Agent
    #[arg(long, env = "UNIPROT_EMAIL", global = true)]
    pub email: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search UniProtKB and print matching entries
    Search {
        /// Free-text query (UniProt query syntax is accepted)
        query: String,

        /// Maximum number of entries
        #[arg(short, long)]
        limit: Option<usize>,

        /// Maximum characters of text output
        #[arg(long)]
        max_chars: Option<usize>,

        /// Show entries that were fetched even if others failed (text output only)
        #[arg(long, conflicts_with = "json")]
        skip_failed: bool,

        /// Print records as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Fetch a single entry by accession
    Entry {
        /// Primary accession, e.g. P01308
        accession: String,

        /// Print the record as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Resolve the UniProt configuration: environment first, then flags.
    pub fn uniprot_config(&self) -> anyhow::Result<UniProtConfig> {
        let mut config = UniProtConfig::from_env()?;

        if let Some(ref url) = self.search_url {
            config.search_url = url.clone();
        }
        if let Some(ref url) = self.entry_url {
            config.entry_url = url.clone();
        }
        if let Some(ref email) = self.email {
            config.email = email.clone();
        }

        if let Commands::Search { limit, max_chars, skip_failed, .. } = self.command {
            if let Some(limit) = limit {
                config.result_limit = limit;
            }
            if let Some(max_chars) = max_chars {
                config.max_output_chars = max_chars;
            }
            if skip_failed {
                config.failure_policy = protlens_uniprot::FailurePolicy::SkipFailed;
            }
        }

        config.validate()?;
        Ok(config)
    }
}
