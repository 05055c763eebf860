//! HTTP fetcher tests against a mock UniProt server
//!
//! Covers:
//! - JSON decoding and error classification (transport, decode, 404, status)
//! - Retry on transport failures only
//! - Request headers (Accept, User-Agent courtesy email)
//! - Accession extraction from search responses

mod common;

use common::*;
use protlens_uniprot::{UniProtClient, UniProtError};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{header, header_regex, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_fetch_json_decodes_body() {
    let server = MockServer::start().await;
    mount_entry(&server, "P01308", json!({"primaryAccession": "P01308"})).await;

    let client = UniProtClient::new(&config_for(&server)).unwrap();
    let value = client
        .fetch_json(&format!("{}/uniprotkb/P01308", server.uri()))
        .await
        .unwrap();

    assert_eq!(value["primaryAccession"], "P01308");
}

#[tokio::test]
async fn test_fetch_json_invalid_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/uniprotkb/P01308"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = UniProtClient::new(&config_for(&server)).unwrap();
    let err = client.fetch_entry("P01308").await.unwrap_err();

    assert!(matches!(err, UniProtError::Decode { .. }), "got {err:?}");
}

#[tokio::test]
async fn test_fetch_json_404_is_not_found() {
    let server = MockServer::start().await;
    mount_entry_status(&server, "XXXXXX", 404).await;

    let client = UniProtClient::new(&config_for(&server)).unwrap();
    let err = client.fetch_entry("XXXXXX").await.unwrap_err();

    assert!(err.is_not_found(), "got {err:?}");
    assert!(err.to_string().ends_with("/uniprotkb/XXXXXX"));
}

#[tokio::test]
async fn test_server_error_is_status_and_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/uniprotkb/P01308"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let config = protlens_uniprot::UniProtConfig {
        max_retries: 3,
        ..config_for(&server)
    };
    let client = UniProtClient::new(&config).unwrap();
    let err = client.fetch_entry("P01308").await.unwrap_err();

    assert!(matches!(err, UniProtError::Status { status: 503, .. }), "got {err:?}");
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let client = UniProtClient::new(&unreachable_config()).unwrap();
    let err = client.fetch_entry("P01308").await.unwrap_err();

    assert!(matches!(err, UniProtError::Transport { .. }), "got {err:?}");
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_timeout_is_retried_until_exhausted() {
    let server = MockServer::start().await;
    mount_entry_delayed(&server, "P01308", json!({}), Duration::from_secs(3)).await;

    let config = protlens_uniprot::UniProtConfig {
        timeout_secs: 1,
        max_retries: 2,
        retry_delay_ms: 10,
        ..config_for(&server)
    };
    let client = UniProtClient::new(&config).unwrap();
    let err = client.fetch_entry("P01308").await.unwrap_err();

    assert!(matches!(err, UniProtError::Transport { .. }), "got {err:?}");
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 3);
}

#[tokio::test]
async fn test_retry_recovers_after_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/uniprotkb/P01308"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})).set_delay(Duration::from_secs(3)))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    mount_entry(&server, "P01308", json!({"primaryAccession": "P01308"})).await;

    let config = protlens_uniprot::UniProtConfig {
        timeout_secs: 1,
        max_retries: 1,
        retry_delay_ms: 10,
        ..config_for(&server)
    };
    let client = UniProtClient::new(&config).unwrap();
    let value = client.fetch_entry("P01308").await.unwrap();

    assert_eq!(value["primaryAccession"], "P01308");
}

#[tokio::test]
async fn test_requests_carry_accept_and_user_agent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/uniprotkb/P01308"))
        .and(header("accept", "application/json"))
        .and(header_regex("user-agent", r"^protlens/.*mailto:tests@example\.org"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = UniProtClient::new(&config_for(&server)).unwrap();
    client.fetch_entry("P01308").await.unwrap();
}

#[tokio::test]
async fn test_search_accessions_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("query", "insulin"))
        .and(query_param("size", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body(&["P01308", "P06213", "P01317"])))
        .mount(&server)
        .await;

    let client = UniProtClient::new(&config_for(&server)).unwrap();
    let accessions = client.search_accessions("insulin", 3).await.unwrap();

    assert_eq!(accessions, vec!["P01308", "P06213", "P01317"]);
}

#[tokio::test]
async fn test_search_accessions_skips_hits_without_accession() {
    let server = MockServer::start().await;
    mount_search(
        &server,
        json!({"results": [
            {"primaryAccession": "P01308"},
            {"uniProtkbId": "NOACC_HUMAN"},
            {"primaryAccession": 42},
            {"primaryAccession": "P06213"}
        ]}),
    )
    .await;

    let client = UniProtClient::new(&config_for(&server)).unwrap();
    let accessions = client.search_accessions("insulin", 5).await.unwrap();

    assert_eq!(accessions, vec!["P01308", "P06213"]);
}

#[tokio::test]
async fn test_search_accessions_missing_results_is_empty() {
    let server = MockServer::start().await;
    mount_search(&server, json!({"facets": []})).await;

    let client = UniProtClient::new(&config_for(&server)).unwrap();
    assert!(client.search_accessions("zzzz", 3).await.unwrap().is_empty());
}
