//! UniProt REST client configuration
//!
//! The configuration is a plain value handed to [`crate::UniProtClient`] and
//! [`crate::ProteinSearch`] at construction, so two searches with different
//! settings can run side by side (in tests or in one process) without
//! touching shared state.

use crate::error::{Result, UniProtError};
use serde::{Deserialize, Serialize};
use std::time::Duration;

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_SEARCH_URL: &str = "https://rest.uniprot.org/uniprotkb/search";
pub const DEFAULT_ENTRY_URL: &str = "https://rest.uniprot.org/uniprotkb";
pub const DEFAULT_RESULT_LIMIT: usize = 3;
pub const DEFAULT_MAX_QUERY_LENGTH: usize = 300;
pub const DEFAULT_MAX_OUTPUT_CHARS: usize = 10_000;
pub const DEFAULT_EMAIL: &str = "your_email@example.com";
pub const DEFAULT_MAX_RETRIES: u32 = 10;
pub const DEFAULT_RETRY_DELAY_MS: u64 = 200;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_FETCH_CONCURRENCY: usize = 3;

/// What the tool boundary does when some entry lookups fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// Any failed entry fails the whole call and discards fetched records
    #[default]
    FailClosed,
    /// Render the entries that succeeded and list the ones that did not
    SkipFailed,
}

impl std::str::FromStr for FailurePolicy {
    type Err = UniProtError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "fail-closed" | "fail_closed" => Ok(Self::FailClosed),
            "skip-failed" | "skip_failed" => Ok(Self::SkipFailed),
            _ => Err(UniProtError::config(format!("invalid failure policy: {s}"))),
        }
    }
}

impl std::fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FailClosed => f.write_str("fail-closed"),
            Self::SkipFailed => f.write_str("skip-failed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniProtConfig {
    /// Search endpoint; queried as `{search_url}?query=..&size=..`
    pub search_url: String,
    /// Entry endpoint; queried as `{entry_url}/{accession}`
    pub entry_url: String,
    /// Maximum number of records per search
    pub result_limit: usize,
    /// Queries longer than this many characters are cut before use
    pub max_query_length: usize,
    /// Hard cap on rendered tool output, in characters
    pub max_output_chars: usize,
    /// Contact address sent in the User-Agent header
    pub email: String,
    /// Extra attempts after a transport failure
    pub max_retries: u32,
    /// Base delay between attempts; attempt `n` waits `n * retry_delay_ms`
    pub retry_delay_ms: u64,
    /// Per-request timeout
    pub timeout_secs: u64,
    /// Entry lookups in flight at once
    pub fetch_concurrency: usize,
    pub failure_policy: FailurePolicy,
}

impl Default for UniProtConfig {
    fn default() -> Self {
        Self {
            search_url: DEFAULT_SEARCH_URL.to_string(),
            entry_url: DEFAULT_ENTRY_URL.to_string(),
            result_limit: DEFAULT_RESULT_LIMIT,
            max_query_length: DEFAULT_MAX_QUERY_LENGTH,
            max_output_chars: DEFAULT_MAX_OUTPUT_CHARS,
            email: DEFAULT_EMAIL.to_string(),
            max_retries: DEFAULT_MAX_RETRIES,
            retry_delay_ms: DEFAULT_RETRY_DELAY_MS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            fetch_concurrency: DEFAULT_FETCH_CONCURRENCY,
            failure_policy: FailurePolicy::FailClosed,
        }
    }
}

impl UniProtConfig {
    pub fn builder() -> UniProtConfigBuilder {
        UniProtConfigBuilder::default()
    }

    /// Load configuration from environment variables
    ///
    /// Unset variables keep their defaults:
    /// - `UNIPROT_SEARCH_URL`, `UNIPROT_ENTRY_URL`
    /// - `UNIPROT_RESULT_LIMIT`, `UNIPROT_MAX_QUERY_LENGTH`, `UNIPROT_MAX_OUTPUT_CHARS`
    /// - `UNIPROT_EMAIL`
    /// - `UNIPROT_MAX_RETRIES`, `UNIPROT_RETRY_DELAY_MS`, `UNIPROT_TIMEOUT_SECS`
    /// - `UNIPROT_FETCH_CONCURRENCY`, `UNIPROT_FAILURE_POLICY`
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("UNIPROT_SEARCH_URL") {
            config.search_url = url;
        }
        if let Ok(url) = std::env::var("UNIPROT_ENTRY_URL") {
            config.entry_url = url;
        }
        if let Ok(email) = std::env::var("UNIPROT_EMAIL") {
            config.email = email;
        }
        if let Some(v) = env_parse("UNIPROT_RESULT_LIMIT")? {
            config.result_limit = v;
        }
        if let Some(v) = env_parse("UNIPROT_MAX_QUERY_LENGTH")? {
            config.max_query_length = v;
        }
        if let Some(v) = env_parse("UNIPROT_MAX_OUTPUT_CHARS")? {
            config.max_output_chars = v;
        }
        if let Some(v) = env_parse("UNIPROT_MAX_RETRIES")? {
            config.max_retries = v;
        }
        if let Some(v) = env_parse("UNIPROT_RETRY_DELAY_MS")? {
            config.retry_delay_ms = v;
        }
        if let Some(v) = env_parse("UNIPROT_TIMEOUT_SECS")? {
            config.timeout_secs = v;
        }
        if let Some(v) = env_parse("UNIPROT_FETCH_CONCURRENCY")? {
            config.fetch_concurrency = v;
        }
        if let Ok(policy) = std::env::var("UNIPROT_FAILURE_POLICY") {
            config.failure_policy = policy.parse()?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.search_url.trim().is_empty() {
            return Err(UniProtError::config("search URL cannot be empty"));
        }
        if self.entry_url.trim().is_empty() {
            return Err(UniProtError::config("entry URL cannot be empty"));
        }
        if self.result_limit == 0 {
            return Err(UniProtError::config("result limit must be greater than 0"));
        }
        if self.max_query_length == 0 {
            return Err(UniProtError::config("max query length must be greater than 0"));
        }
        if self.fetch_concurrency == 0 {
            return Err(UniProtError::config("fetch concurrency must be greater than 0"));
        }
        if self.timeout_secs == 0 {
            return Err(UniProtError::config("timeout must be greater than 0"));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }

    /// User agent identifying this client and a contact address to UniProt
    pub fn user_agent(&self) -> String {
        format!(
            "protlens/{} (+https://github.com/protlens/protlens; mailto:{})",
            env!("CARGO_PKG_VERSION"),
            self.email
        )
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Result<Option<T>> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| UniProtError::config(format!("{key} has invalid value '{raw}'"))),
        Err(_) => Ok(None),
    }
}

/// Builder for UniProtConfig
#[derive(Debug, Default)]
pub struct UniProtConfigBuilder {
    config: UniProtConfig,
}

impl UniProtConfigBuilder {
    pub fn search_url(mut self, url: impl Into<String>) -> Self {
        self.config.search_url = url.into();
        self
    }

    pub fn entry_url(mut self, url: impl Into<String>) -> Self {
        self.config.entry_url = url.into();
        self
    }

    /// Point both endpoints at one server, the way the public API lays them out
    pub fn base_url(self, base: &str) -> Self {
        let base = base.trim_end_matches('/');
        self.search_url(format!("{base}/uniprotkb/search"))
            .entry_url(format!("{base}/uniprotkb"))
    }

    pub fn result_limit(mut self, limit: usize) -> Self {
        self.config.result_limit = limit;
        self
    }

    pub fn max_query_length(mut self, len: usize) -> Self {
        self.config.max_query_length = len;
        self
    }

    pub fn max_output_chars(mut self, chars: usize) -> Self {
        self.config.max_output_chars = chars;
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.config.email = email.into();
        self
    }

    pub fn max_retries(mut self, retries: u32) -> Self {
        self.config.max_retries = retries;
        self
    }

    pub fn retry_delay_ms(mut self, ms: u64) -> Self {
        self.config.retry_delay_ms = ms;
        self
    }

    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.timeout_secs = secs;
        self
    }

    pub fn fetch_concurrency(mut self, n: usize) -> Self {
        self.config.fetch_concurrency = n;
        self
    }

    pub fn failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.config.failure_policy = policy;
        self
    }

    pub fn build(self) -> UniProtConfig {
        self.config
    }
}
