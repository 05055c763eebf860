//! `protlens search` - query UniProtKB

use anyhow::Result;
use protlens_uniprot::{ProteinSearch, ResearchTool, UniProtConfig, UniProtTool};
use tracing::info;

/// Print the tool output for `query`.
///
/// In text mode failures are part of the output, just as an agent sees them,
/// and the command still succeeds. JSON mode returns errors.
pub async fn run(config: &UniProtConfig, query: &str, json: bool) -> Result<()> {
    info!(limit = config.result_limit, policy = %config.failure_policy, "Searching UniProt");

    if json {
        let search = ProteinSearch::new(config)?;
        let records = search.search(query, config.result_limit).await?;
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    let tool = UniProtTool::new(config)?;
    println!("{}", tool.run(query).await);
    Ok(())
}
