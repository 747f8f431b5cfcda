//! HTTP feed client.
//!
//! The pipeline only sees [`FeedSource`]: a parameter list goes in, parsed
//! JSON comes out. [`HttpFeed`] is the network implementation.

use std::thread;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;
use url::Url;

use crate::error::{Result, ScraperError};

/// Maximum number of retry attempts for transient failures.
const MAX_RETRIES: u32 = 3;

/// Base delay for exponential backoff (milliseconds).
const RETRY_BASE_DELAY_MS: u64 = 500;

/// A source of feed payloads.
pub trait FeedSource {
    /// Fetch the payload for one set of query parameters.
    fn fetch(&self, params: &[(&str, String)]) -> Result<Value>;
}

/// Feed served over HTTP GET with query parameters.
pub struct HttpFeed {
    client: Client,
    base_url: Url,
}

impl HttpFeed {
    /// Create a feed client for `base_url`, sending `headers` on every request.
    pub fn new(base_url: &str, headers: &[(&str, &str)], timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        let client = create_client(headers, timeout)?;
        Ok(Self { client, base_url })
    }

    /// Full request URL for a parameter list.
    pub fn request_url(&self, params: &[(&str, String)]) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .extend_pairs(params.iter().map(|(k, v)| (*k, v.as_str())));
        url
    }
}

impl FeedSource for HttpFeed {
    fn fetch(&self, params: &[(&str, String)]) -> Result<Value> {
        let url = self.request_url(params);
        tracing::debug!(url = %url, "Fetching feed");

        let bytes = download_bytes(&self.client, url.as_str()).map_err(|e| {
            if let ScraperError::Http(source) = e {
                ScraperError::FeedRequest {
                    context: url.to_string(),
                    source,
                }
            } else {
                e
            }
        })?;

        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Create a configured HTTP client.
///
/// # Returns
/// A `reqwest::blocking::Client` with the given timeout and default headers.
pub fn create_client(headers: &[(&str, &str)], timeout: Duration) -> Result<Client> {
    let mut default_headers = HeaderMap::new();
    for (name, value) in headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| ScraperError::Config(format!("invalid header name {name}: {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| ScraperError::Config(format!("invalid header value {value}: {e}")))?;
        default_headers.insert(name, value);
    }

    let client = Client::builder()
        .timeout(timeout)
        .default_headers(default_headers)
        .build()?;
    Ok(client)
}

/// Download content from a URL with retry logic.
///
/// Uses exponential backoff for transient failures (network errors, 5xx responses).
///
/// # Arguments
/// * `client` - HTTP client to use
/// * `url` - URL to download from
///
/// # Returns
/// Raw bytes of the response body
pub fn download_bytes(client: &Client, url: &str) -> Result<Vec<u8>> {
    let mut last_error: Option<String> = None;

    for attempt in 0..MAX_RETRIES {
        if attempt > 0 {
            // Exponential backoff: 500ms, 1000ms
            let delay = RETRY_BASE_DELAY_MS * (1 << (attempt - 1));
            tracing::debug!(attempt, delay_ms = delay, "Retrying after delay");
            thread::sleep(Duration::from_millis(delay));
        }

        match client.get(url).send() {
            Ok(response) => {
                let status = response.status();

                // Retry on server errors (5xx)
                if status.is_server_error() {
                    tracing::warn!(
                        status = %status,
                        attempt = attempt + 1,
                        max_retries = MAX_RETRIES,
                        "Server error, will retry"
                    );
                    last_error = Some(format!("Server error: {status}"));
                    continue;
                }

                // Don't retry client errors (4xx) - they won't succeed
                let response = response.error_for_status()?;
                let bytes = response.bytes()?;
                return Ok(bytes.to_vec());
            }
            Err(e) => {
                if e.is_connect() || e.is_timeout() {
                    tracing::warn!(
                        error = %e,
                        attempt = attempt + 1,
                        max_retries = MAX_RETRIES,
                        "Connection error, will retry"
                    );
                    last_error = Some(e.to_string());
                    continue;
                }
                return Err(ScraperError::Http(e));
            }
        }
    }

    Err(ScraperError::RetriesExhausted {
        attempts: MAX_RETRIES,
        message: last_error.unwrap_or_else(|| "Unknown error".to_string()),
    })
}
