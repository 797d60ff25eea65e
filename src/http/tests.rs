//! Tests for the HTTP client module

use super::*;
use crate::error::Error;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_with_base(base_url: Option<String>) -> HttpClient {
    let mut builder = HttpClientConfig::builder();
    if let Some(base) = base_url {
        builder = builder.base_url(base);
    }
    HttpClient::with_config(builder.build()).unwrap()
}

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert!(config.base_url.is_none());
    assert!(config.user_agent.starts_with("sosq/"));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .base_url("https://api.stackexchange.com/2.3/")
        .timeout(Duration::from_secs(60))
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(
        config.base_url,
        Some("https://api.stackexchange.com/2.3/".to_string())
    );
    assert_eq!(config.timeout, Duration::from_secs(60));
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[test]
fn test_build_url_joins_relative_path() {
    let client = client_with_base(Some("https://api.stackexchange.com/2.3/".to_string()));

    let url = client.build_url("search/advanced").unwrap();
    assert_eq!(
        url.as_str(),
        "https://api.stackexchange.com/2.3/search/advanced"
    );
}

#[test]
fn test_build_url_absolute_passthrough() {
    let client = client_with_base(None);
    let url = client.build_url("https://example.com/x").unwrap();
    assert_eq!(url.as_str(), "https://example.com/x");
}

#[test]
fn test_build_url_relative_without_base() {
    let client = client_with_base(None);
    let err = client.build_url("search/advanced").unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
}

#[tokio::test]
async fn test_get_sends_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/2.3/search/advanced"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .mount(&mock_server)
        .await;

    let client = client_with_base(Some(format!("{}/2.3/", mock_server.uri())));

    let response = client
        .get_with_config("search/advanced", RequestConfig::new().query("page", "2"))
        .await
        .unwrap();
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["ok"], true);
}

#[tokio::test]
async fn test_client_error_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bad"))
        .respond_with(ResponseTemplate::new(400).set_body_string("bad request"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_with_base(None);
    let err = client
        .get_with_config(&format!("{}/bad", mock_server.uri()), RequestConfig::new())
        .await
        .unwrap_err();

    match err {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 400);
            assert_eq!(body, "bad request");
        }
        other => panic!("Expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/flaky"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_with_base(None);
    let err = client
        .get_with_config(&format!("{}/flaky", mock_server.uri()), RequestConfig::new())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::HttpStatus { status: 503, .. }));
}
