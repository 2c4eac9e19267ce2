//! HTTP client for downloading daily CSV files.

use bytes::Bytes;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

/// Configuration for the fetch client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Maximum concurrent day downloads per pair.
    pub concurrency: usize,
    /// Request timeout.
    pub timeout: Duration,
    /// Maximum retry attempts for failed requests.
    pub max_retries: u32,
    /// Base delay for exponential backoff (in milliseconds).
    pub base_delay_ms: u64,
    /// Maximum delay between retries (in milliseconds).
    pub max_delay_ms: u64,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            // Daily files are small and few; modest concurrency suffices
            concurrency: 4,
            timeout: Duration::from_secs(30),
            max_retries: 5,
            base_delay_ms: 250,
            max_delay_ms: 15_000,
            user_agent: format!("tidemark/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Errors that can occur during downloads.
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server kept returning errors after all retries.
    #[error("Server error: {status}")]
    ServerError {
        /// HTTP status code.
        status: u16,
    },
}

/// HTTP client with connection pooling and retry logic.
#[derive(Debug, Clone)]
pub struct FetchClient {
    client: Client,
    config: ClientConfig,
}

impl FetchClient {
    /// Creates a new fetch client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .pool_max_idle_per_host(config.concurrency)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_nodelay(true)
            .tcp_keepalive(Duration::from_secs(60))
            .timeout(config.timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self { client, config })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(ClientConfig::default())
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Downloads one daily CSV file, returning its bytes.
    ///
    /// Returns `Ok(None)` on 404: the provider serves no file for
    /// weekends, market holidays and future dates, which is data shape
    /// rather than failure.
    ///
    /// # Errors
    ///
    /// Returns an error if the download still fails after all retries.
    pub async fn download(&self, url: &str) -> Result<Option<Bytes>, FetchError> {
        let mut attempts = 0;

        loop {
            match self.client.get(url).send().await {
                Ok(response) => {
                    if response.status() == reqwest::StatusCode::NOT_FOUND {
                        return Ok(None);
                    }

                    // Retry on server errors (5xx) and rate limiting (429)
                    if response.status().is_server_error()
                        || response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS
                    {
                        if attempts < self.config.max_retries {
                            attempts += 1;
                            tokio::time::sleep(self.backoff_delay(attempts)).await;
                            continue;
                        }
                        return Err(FetchError::ServerError {
                            status: response.status().as_u16(),
                        });
                    }

                    response.error_for_status_ref()?;
                    return Ok(Some(response.bytes().await?));
                }
                Err(e) if is_retryable(&e) && attempts < self.config.max_retries => {
                    attempts += 1;
                    tokio::time::sleep(self.backoff_delay(attempts)).await;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Exponential backoff delay for the given attempt, capped and with
    /// a small deterministic jitter so parallel pairs do not retry in
    /// lockstep.
    fn backoff_delay(&self, attempt: u32) -> Duration {
        let exp = self
            .config
            .base_delay_ms
            .saturating_mul(1u64 << attempt.min(10));
        let capped = exp.min(self.config.max_delay_ms);

        let jitter_range = capped / 4;
        let jitter = if jitter_range > 0 {
            let offset = (u64::from(attempt) * 31) % (jitter_range * 2);
            offset.saturating_sub(jitter_range)
        } else {
            0
        };

        Duration::from_millis((capped + jitter).max(100))
    }
}

/// Transport errors worth retrying: timeouts, connection and request
/// failures. Builder errors are configuration bugs and fail immediately.
fn is_retryable(error: &reqwest::Error) -> bool {
    if error.is_builder() {
        return false;
    }
    error.is_timeout() || error.is_connect() || error.is_request()
}
