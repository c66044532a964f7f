//! HTTP client for the domain feed.
//!
//! Fetches `GET /api/domains` from the ingestion service and decodes it into
//! [`RawCertRecord`]s. Plugs into [`catalog::CatalogStore`] as a
//! [`FeedSource`].
//!
//! # Example
//!
//! ```rust,ignore
//! use feed_client::FeedClient;
//!
//! let client = FeedClient::new("http://localhost:5000/api/domains")
//!     .with_timeout(Duration::from_secs(10));
//!
//! let records = client.fetch().await?;
//! println!("{} certificates", records.len());
//! ```

use std::time::Duration;

use async_trait::async_trait;
use catalog::{parse_feed_body, FeedError, FeedResult, FeedSource, RawCertRecord};

/// Applied to every request unless overridden.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub struct FeedClient {
    client: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl FeedClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the per-request timeout. A timed out request is a transport error.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom HTTP client.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch and decode the whole feed.
    pub async fn fetch(&self) -> FeedResult<Vec<RawCertRecord>> {
        tracing::debug!(url = %self.url, "Fetching domain feed");

        let resp = self
            .client
            .get(&self.url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(transport_error)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Domain feed returned an error status");
            return Err(FeedError::Status {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = resp.bytes().await.map_err(transport_error)?;
        let records = parse_feed_body(&body)?;
        tracing::info!(count = records.len(), "Fetched domain feed");

        Ok(records)
    }
}

#[async_trait]
impl FeedSource for FeedClient {
    async fn fetch_records(&self) -> FeedResult<Vec<RawCertRecord>> {
        self.fetch().await
    }
}

fn transport_error(e: reqwest::Error) -> FeedError {
    tracing::warn!(error = %e, timeout = e.is_timeout(), "Domain feed request failed");
    FeedError::Transport(Box::new(e))
}
