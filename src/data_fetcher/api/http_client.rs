//! HTTP client creation and configuration utilities

use crate::constants::stats_api;
use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, ORIGIN, REFERER};
use std::time::Duration;

/// Creates an HTTP client with a per-request timeout and the browser-like
/// headers the stats provider insists on.
///
/// The same client is used for the logo CDN, which ignores the extra headers.
pub fn create_http_client_with_timeout(timeout_seconds: u64) -> Result<Client, reqwest::Error> {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("application/json, text/plain, */*"),
    );
    headers.insert(REFERER, HeaderValue::from_static(stats_api::REFERER));
    headers.insert(ORIGIN, HeaderValue::from_static(stats_api::ORIGIN));
    headers.insert("x-nba-stats-origin", HeaderValue::from_static("stats"));
    headers.insert("x-nba-stats-token", HeaderValue::from_static("true"));

    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .user_agent(stats_api::USER_AGENT)
        .default_headers(headers)
        .pool_max_idle_per_host(crate::constants::HTTP_POOL_MAX_IDLE_PER_HOST)
        .build()
}

/// Creates an HTTP client for testing with default timeout
#[cfg(test)]
pub fn create_test_http_client() -> Client {
    create_http_client_with_timeout(crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS)
        .expect("Failed to create test HTTP client")
}
