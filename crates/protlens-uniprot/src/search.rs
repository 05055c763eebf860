//! Search orchestration: query -> accessions -> normalized records
//!
//! Entry lookups are independent reads, so they run through an ordered
//! buffered stream: up to `fetch_concurrency` requests are in flight, and
//! results come back in the order the search endpoint ranked them.

use crate::client::UniProtClient;
use crate::config::UniProtConfig;
use crate::error::Result;
use crate::models::{EntryOutcome, ProteinRecord};
use crate::normalize::normalize;
use futures::stream::{self, StreamExt};
use protlens_common::text::truncate_chars;
use tracing::{info, instrument, warn};

#[derive(Debug, Clone)]
pub struct ProteinSearch {
    client: UniProtClient,
    max_query_length: usize,
    fetch_concurrency: usize,
}

impl ProteinSearch {
    pub fn new(config: &UniProtConfig) -> Result<Self> {
        Ok(Self::with_client(UniProtClient::new(config)?, config))
    }

    pub fn with_client(client: UniProtClient, config: &UniProtConfig) -> Self {
        Self {
            client,
            max_query_length: config.max_query_length,
            fetch_concurrency: config.fetch_concurrency.max(1),
        }
    }

    pub fn client(&self) -> &UniProtClient {
        &self.client
    }

    /// Search and fetch up to `limit` records.
    ///
    /// All or nothing: if any entry lookup fails, the first failure (in
    /// search order) is returned and the other records are discarded.
    pub async fn search(&self, query: &str, limit: usize) -> Result<Vec<ProteinRecord>> {
        self.search_outcomes(query, limit)
            .await?
            .into_iter()
            .map(|outcome| outcome.result)
            .collect()
    }

    /// Search and report each entry lookup separately.
    ///
    /// Fails only when the search request itself fails.
    #[instrument(skip(self, query), fields(query_len = query.chars().count()))]
    pub async fn search_outcomes(&self, query: &str, limit: usize) -> Result<Vec<EntryOutcome>> {
        let query = truncate_chars(query, self.max_query_length);

        let mut accessions = self.client.search_accessions(query, limit).await?;
        accessions.truncate(limit);

        info!(count = accessions.len(), "Fetching UniProt entries");

        let outcomes: Vec<EntryOutcome> = stream::iter(accessions)
            .map(|accession| async move {
                let result = self.fetch_record(&accession).await;
                if let Err(ref e) = result {
                    warn!(accession = %accession, error = %e, "UniProt entry lookup failed");
                }
                EntryOutcome { accession, result }
            })
            .buffered(self.fetch_concurrency)
            .collect()
            .await;

        Ok(outcomes)
    }

    /// Fetch and normalize a single accession
    pub async fn fetch_record(&self, accession: &str) -> Result<ProteinRecord> {
        let entry = self.client.fetch_entry(accession).await?;
        let mut record = normalize(&entry);

        if record.accession.is_empty() {
            warn!(accession = %accession, "Entry has no primaryAccession, using requested accession");
            record.accession = accession.to_string();
        }

        Ok(record)
    }
}
