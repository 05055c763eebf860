//! Protlens UniProt Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Retrieval and normalization of UniProtKB protein entries for research
//! agents.
//!
//! # Pipeline
//!
//! 1. **Search** ([`ProteinSearch`]): query the search endpoint, collect
//!    primary accessions in relevance order
//! 2. **Fetch** ([`UniProtClient`]): GET each entry, with bounded retry on
//!    transport failures
//! 3. **Normalize** ([`normalize::normalize`]): flatten the nested entry JSON
//!    into a [`ProteinRecord`]
//! 4. **Render** ([`format::render`]): one bounded text block for the caller
//!
//! [`UniProtTool`] ties the steps together behind a `run(query) -> String`
//! boundary that never fails.
//!
//! # Example
//!
//! ```no_run
//! use protlens_uniprot::{ResearchTool, UniProtConfig, UniProtTool};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let tool = UniProtTool::new(&UniProtConfig::default())?;
//!     println!("{}", tool.run("insulin").await);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod format;
pub mod json_path;
pub mod models;
pub mod normalize;
pub mod search;
pub mod tool;

pub use client::UniProtClient;
pub use config::{FailurePolicy, UniProtConfig};
pub use error::{Result, UniProtError};
pub use models::{CitationRecord, EntryOutcome, ProteinRecord, StructureReference};
pub use search::ProteinSearch;
pub use tool::{ResearchTool, UniProtTool};
