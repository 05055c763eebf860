//! Shared fixtures for UniProt integration tests
//!
//! Every test gets its own `wiremock` server laid out like the public REST
//! API: `/uniprotkb/search` for searches and `/uniprotkb/{accession}` for
//! entries.

#![allow(dead_code)]

use protlens_uniprot::UniProtConfig;
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const SEARCH_PATH: &str = "/uniprotkb/search";

/// Config aimed at `server` with retries off and a short timeout
pub fn config_for(server: &MockServer) -> UniProtConfig {
    UniProtConfig::builder()
        .base_url(&server.uri())
        .email("tests@example.org")
        .max_retries(0)
        .retry_delay_ms(0)
        .timeout_secs(5)
        .build()
}

pub fn search_body(accessions: &[&str]) -> Value {
    let results: Vec<Value> = accessions
        .iter()
        .map(|acc| json!({"entryType": "UniProtKB reviewed (Swiss-Prot)", "primaryAccession": acc}))
        .collect();
    json!({ "results": results })
}

/// Minimal entry with a name, an organism and one FUNCTION comment
pub fn entry_body(accession: &str, protein: &str, organism: &str, function: &str) -> Value {
    json!({
        "primaryAccession": accession,
        "uniProtkbId": format!("{}_TEST", accession),
        "proteinDescription": {"recommendedName": {"fullName": {"value": protein}}},
        "organism": {"scientificName": organism},
        "comments": [{"commentType": "FUNCTION", "texts": [{"value": function}]}],
        "sequence": {"value": "MALWMRLLPLLALLALWGPDPAAA"}
    })
}

pub fn entry_path(accession: &str) -> String {
    format!("/uniprotkb/{accession}")
}

pub async fn mount_search(server: &MockServer, body: Value) {
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

pub async fn mount_entry(server: &MockServer, accession: &str, body: Value) {
    mount_entry_delayed(server, accession, body, Duration::ZERO).await;
}

pub async fn mount_entry_delayed(server: &MockServer, accession: &str, body: Value, delay: Duration) {
    Mock::given(method("GET"))
        .and(path(entry_path(accession)))
        .respond_with(ResponseTemplate::new(200).set_body_json(body).set_delay(delay))
        .mount(server)
        .await;
}

pub async fn mount_entry_status(server: &MockServer, accession: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(entry_path(accession)))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Decoded `query` parameter of every search request the server received
pub async fn received_search_queries(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|req| req.url.path() == SEARCH_PATH)
        .filter_map(|req| {
            req.url
                .query_pairs()
                .find(|(key, _)| key == "query")
                .map(|(_, value)| value.into_owned())
        })
        .collect()
}

/// Base URL where nothing listens; connections are refused
pub fn unreachable_config() -> UniProtConfig {
    UniProtConfig::builder()
        .base_url("http://127.0.0.1:1")
        .max_retries(0)
        .retry_delay_ms(0)
        .timeout_secs(2)
        .build()
}
