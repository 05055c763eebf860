//! Tool-facing boundary for agent orchestration
//!
//! An agent hands a tool free text and expects free text back. Everything
//! below this layer returns typed errors; [`UniProtTool::run`] is the one
//! place where they are flattened into a `"UniProt exception: ..."` line.

use crate::config::{FailurePolicy, UniProtConfig};
use crate::error::Result;
use crate::format::{render, render_with_skipped, SkippedEntry};
use crate::search::ProteinSearch;
use async_trait::async_trait;
use tracing::{error, instrument};

pub const TOOL_NAME: &str = "uniprot_query";
pub const TOOL_DESCRIPTION: &str = "A wrapper around UniProt. \
    Useful for retrieving information about proteins from the UniProt database. \
    Input should be a search query.";
pub const EXCEPTION_PREFIX: &str = "UniProt exception: ";

/// A text-in, text-out research tool callable by an agent.
#[async_trait]
pub trait ResearchTool: Send + Sync {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// Never fails: errors are reported inside the returned text.
    async fn run(&self, query: &str) -> String;
}

#[derive(Debug, Clone)]
pub struct UniProtTool {
    search: ProteinSearch,
    result_limit: usize,
    max_output_chars: usize,
    failure_policy: FailurePolicy,
}

impl UniProtTool {
    pub fn new(config: &UniProtConfig) -> Result<Self> {
        Ok(Self::with_search(ProteinSearch::new(config)?, config))
    }

    pub fn with_search(search: ProteinSearch, config: &UniProtConfig) -> Self {
        Self {
            search,
            result_limit: config.result_limit,
            max_output_chars: config.max_output_chars,
            failure_policy: config.failure_policy,
        }
    }

    pub fn search(&self) -> &ProteinSearch {
        &self.search
    }

    /// Search and render, keeping the typed error.
    pub async fn try_run(&self, query: &str) -> Result<String> {
        match self.failure_policy {
            FailurePolicy::FailClosed => {
                let records = self.search.search(query, self.result_limit).await?;
                Ok(render(&records, self.max_output_chars))
            },
            FailurePolicy::SkipFailed => {
                let outcomes = self.search.search_outcomes(query, self.result_limit).await?;
                let mut records = Vec::with_capacity(outcomes.len());
                let mut skipped = Vec::new();
                for outcome in outcomes {
                    match outcome.result {
                        Ok(record) => records.push(record),
                        Err(e) => skipped.push(SkippedEntry {
                            accession: outcome.accession,
                            reason: e.to_string(),
                        }),
                    }
                }
                Ok(render_with_skipped(&records, &skipped, self.max_output_chars))
            },
        }
    }
}

#[async_trait]
impl ResearchTool for UniProtTool {
    fn name(&self) -> &str {
        TOOL_NAME
    }

    fn description(&self) -> &str {
        TOOL_DESCRIPTION
    }

    #[instrument(skip(self, query), fields(tool = TOOL_NAME))]
    async fn run(&self, query: &str) -> String {
        match self.try_run(query).await {
            Ok(text) => text,
            Err(e) => {
                error!(error = %e, "UniProt tool call failed");
                format!("{EXCEPTION_PREFIX}{e}")
            },
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_metadata() {
        let tool = UniProtTool::new(&UniProtConfig::default()).unwrap();
        assert_eq!(tool.name(), "uniprot_query");
        assert!(tool.description().starts_with("A wrapper around UniProt. Useful"));
        assert!(tool.description().ends_with("Input should be a search query."));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = UniProtConfig::builder().result_limit(0).build();
        assert!(UniProtTool::new(&config).is_err());
    }

    #[test]
    fn test_tool_is_object_safe() {
        let tool: Box<dyn ResearchTool> = Box::new(UniProtTool::new(&UniProtConfig::default()).unwrap());
        assert_eq!(tool.name(), TOOL_NAME);
    }
}
