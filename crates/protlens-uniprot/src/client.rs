//! HTTP client for the UniProt REST API
//!
//! Two endpoint families are used: the search endpoint, which yields
//! accessions in relevance order, and the per-accession entry endpoint.
//! [`UniProtClient::fetch_json`] is a single attempt;
//! [`UniProtClient::fetch_json_with_retry`] layers a bounded linear backoff
//! on top for transport failures only.

use crate::config::UniProtConfig;
use crate::endpoints;
use crate::error::{Result, UniProtError};
use crate::json_path::{get_array, get_path};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument, warn};

#[derive(Debug, Clone)]
pub struct UniProtClient {
    client: Client,
    search_url: String,
    entry_url: String,
    max_retries: u32,
    retry_delay: Duration,
}

impl UniProtClient {
    pub fn new(config: &UniProtConfig) -> Result<Self> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent())
            .default_headers(headers)
            .build()
            .map_err(|e| UniProtError::config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            search_url: config.search_url.clone(),
            entry_url: config.entry_url.clone(),
            max_retries: config.max_retries,
            retry_delay: config.retry_delay(),
        })
    }

    /// GET `url` and decode the body as JSON. One attempt, no retry.
    pub async fn fetch_json(&self, url: &str) -> Result<Value> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| UniProtError::Transport { url: url.to_string(), source })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(UniProtError::NotFound { url: url.to_string() });
        }
        if !status.is_success() {
            return Err(UniProtError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| UniProtError::Transport { url: url.to_string(), source })?;

        serde_json::from_slice(&body).map_err(|source| UniProtError::Decode { url: url.to_string(), source })
    }

    /// [`fetch_json`](Self::fetch_json) with up to `max_retries` extra
    /// attempts on transport errors. Attempt `n` is preceded by a sleep of
    /// `n * retry_delay`.
    #[instrument(skip(self), fields(max_retries = self.max_retries))]
    pub async fn fetch_json_with_retry(&self, url: &str) -> Result<Value> {
        let mut attempt: u32 = 0;
        loop {
            match self.fetch_json(url).await {
                Ok(value) => return Ok(value),
                Err(e) if e.is_retryable() && attempt < self.max_retries => {
                    attempt += 1;
                    let delay = self.retry_delay * attempt;
                    warn!(
                        attempt,
                        max_retries = self.max_retries,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "UniProt request failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                },
                Err(e) => return Err(e),
            }
        }
    }

    /// Run a search and return the primary accessions of the hits, in the
    /// order UniProt ranked them. Hits without an accession are skipped.
    #[instrument(skip(self))]
    pub async fn search_accessions(&self, query: &str, size: usize) -> Result<Vec<String>> {
        let url = endpoints::search_url(&self.search_url, query, size);
        let body = self.fetch_json_with_retry(&url).await?;

        let results = get_array(&body, &["results"]);
        let mut accessions = Vec::with_capacity(results.len());
        for (position, hit) in results.iter().enumerate() {
            match get_path(hit, &["primaryAccession"]).and_then(Value::as_str) {
                Some(accession) if !accession.is_empty() => accessions.push(accession.to_string()),
                _ => warn!(position, "Search hit has no primaryAccession, skipping"),
            }
        }

        debug!(hits = results.len(), accessions = accessions.len(), "UniProt search complete");
        Ok(accessions)
    }

    /// Fetch the raw JSON entry for one accession
    #[instrument(skip(self))]
    pub async fn fetch_entry(&self, accession: &str) -> Result<Value> {
        let url = endpoints::entry_url(&self.entry_url, accession);
        self.fetch_json_with_retry(&url).await
    }
}
