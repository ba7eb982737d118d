//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the harvester, including:
//! - Building the shared HTTP client with the configured header set
//! - GET requests for the index and detail pages
//! - Bounded retry for transient failures
//! - Error classification into human-readable causes

use crate::config::HttpConfig;
use crate::record::FetchFailure;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use std::time::Duration;

/// Retry policy for transient fetch failures
///
/// Only timeouts and 5xx responses are considered transient; client errors
/// (4xx) and connection failures resolve immediately.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Additional attempts after the first failure
    pub max_retries: u32,

    /// Fixed pause between attempts
    pub delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_retries: u32, delay: Duration) -> Self {
        Self { max_retries, delay }
    }

    /// No retries at all; every failure is final
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            delay: Duration::ZERO,
        }
    }
}

/// Builds the shared HTTP client from transport configuration
///
/// The client carries the configured User-Agent and extra headers on every
/// request, and enforces the per-request timeout so a hung fetch resolves
/// to a failure after a bounded duration.
///
/// # Arguments
///
/// * `config` - The HTTP transport configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    let mut headers = HeaderMap::new();
    for (name, value) in &config.headers {
        // Config validation rejects malformed headers; this is the fallback
        // for configs constructed in code.
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            (Ok(n), Ok(v)) => {
                headers.insert(n, v);
            }
            _ => tracing::warn!("Skipping invalid header '{}'", name),
        }
    }

    Client::builder()
        .user_agent(config.user_agent.clone())
        .default_headers(headers)
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a page and returns its body text
///
/// Succeeds only on a 2xx response. Any non-success status, timeout, or
/// transport error yields a `FetchFailure` carrying the URL and a
/// human-readable cause. Transient failures (timeouts and 5xx) are retried
/// per the policy; everything else is final on the first attempt.
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `url` - The URL to fetch
/// * `retry` - Retry policy for transient failures
pub async fn fetch_page(client: &Client, url: &str, retry: &RetryPolicy) -> Result<String, FetchFailure> {
    let mut attempt = 0;
    loop {
        match try_fetch(client, url).await {
            Ok(body) => return Ok(body),
            Err((cause, transient)) => {
                if transient && attempt < retry.max_retries {
                    attempt += 1;
                    tracing::debug!(
                        "Transient failure for {} ({}), retry {}/{}",
                        url,
                        cause,
                        attempt,
                        retry.max_retries
                    );
                    tokio::time::sleep(retry.delay).await;
                    continue;
                }
                return Err(FetchFailure {
                    url: url.to_string(),
                    cause,
                });
            }
        }
    }
}

/// Performs a single GET attempt
///
/// Returns the body on success, or the failure cause paired with whether
/// the failure is transient (worth retrying).
async fn try_fetch(client: &Client, url: &str) -> Result<String, (String, bool)> {
    match client.get(url).send().await {
        Ok(response) => {
            let status = response.status();

            if !status.is_success() {
                return Err((format!("HTTP {}", status.as_u16()), status.is_server_error()));
            }

            response.text().await.map_err(|e| (e.to_string(), false))
        }
        Err(e) if e.is_timeout() => Err(("request timeout".to_string(), true)),
        Err(e) if e.is_connect() => Err(("connection refused".to_string(), false)),
        Err(e) => Err((e.to_string(), false)),
    }
}
