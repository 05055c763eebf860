//! `protlens entry` - fetch one accession

use anyhow::{Context, Result};
use protlens_uniprot::format::render;
use protlens_uniprot::{ProteinSearch, UniProtConfig};

pub async fn run(config: &UniProtConfig, accession: &str, json: bool) -> Result<()> {
    let search = ProteinSearch::new(config)?;
    let record = search
        .fetch_record(accession)
        .await
        .with_context(|| format!("Failed to fetch UniProt entry {accession}"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        println!("{}", render(std::slice::from_ref(&record), config.max_output_chars));
    }

    Ok(())
}
