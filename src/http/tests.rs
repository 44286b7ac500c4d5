//! Tests for the HTTP module

use super::*;
use std::time::Duration;

#[test]
fn test_config_builder() {
    let config = HttpClientConfig::new("https://api.tilroy.example")
        .timeout(Duration::from_secs(5))
        .header("x-api-key", "xk-456")
        .user_agent("test-agent");

    assert_eq!(config.base_url, "https://api.tilroy.example");
    assert_eq!(config.timeout, Duration::from_secs(5));
    assert_eq!(
        config.default_headers.get("x-api-key").map(String::as_str),
        Some("xk-456")
    );
    assert_eq!(config.user_agent, "test-agent");
}

#[test]
fn test_build_url_joins_base_and_path() {
    let client =
        HttpClient::with_config(HttpClientConfig::new("https://api.tilroy.example/")).unwrap();

    assert_eq!(
        client.build_url("/shopapi/production/shops"),
        "https://api.tilroy.example/shopapi/production/shops"
    );
    assert_eq!(
        client.build_url("saleapi/production/export/sales"),
        "https://api.tilroy.example/saleapi/production/export/sales"
    );
}

#[test]
fn test_build_url_passes_absolute_urls_through() {
    let client =
        HttpClient::with_config(HttpClientConfig::new("https://api.tilroy.example")).unwrap();

    assert_eq!(
        client.build_url("https://other.example/x"),
        "https://other.example/x"
    );
}
