//! Batched parallel page fetching
//!
//! Retrieves page content for the URLs a search resolved to. Requests run
//! concurrently inside fixed-width batches; batches run strictly one after
//! another, so peak outbound connections never exceed the batch width
//! regardless of how many URLs the search returned.

use futures::future::join_all;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

use super::config::ContentFetchConfig;
use crate::search::types::FetchOutcome;

/// Page fetcher with bounded batch concurrency
pub struct ContentFetcher {
    client: Client,
    config: ContentFetchConfig,
}

impl ContentFetcher {
    /// Create a new content fetcher
    pub fn new(config: ContentFetchConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .user_agent("Mozilla/5.0 (compatible; ParallelSearchBot/1.0)")
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// Fetch every URL, one outcome per URL
    ///
    /// URLs are processed in contiguous batches of `batch_size`; a batch's
    /// requests are all issued concurrently and joined once every one of
    /// them has settled. A failed request becomes a `Failure` outcome and
    /// never aborts its siblings or later batches. One attempt per URL, no
    /// retries.
    pub async fn fetch_all(&self, urls: &[String]) -> Vec<FetchOutcome> {
        if urls.is_empty() {
            return vec![];
        }

        let mut outcomes = Vec::with_capacity(urls.len());
        for batch in create_batches(urls, self.config.batch_size) {
            debug!("Fetching batch of {} pages", batch.len());
            let requests: Vec<_> = batch.iter().map(|url| self.fetch_page(url)).collect();
            outcomes.extend(join_all(requests).await);
        }

        outcomes
    }

    /// Fetch a single page, classifying any failure into the outcome
    async fn fetch_page(&self, url: &str) -> FetchOutcome {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                let reason = if e.is_timeout() {
                    format!("Timeout after {}s", self.config.timeout_secs)
                } else if e.is_redirect() {
                    format!("Too many redirects (max {})", self.config.max_redirects)
                } else {
                    e.to_string()
                };
                warn!("Fetch failed for {}: {}", url, reason);
                return FetchOutcome::Failure {
                    url: url.to_string(),
                    reason,
                };
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!("Fetch failed for {}: HTTP {}", url, status.as_u16());
            return FetchOutcome::Failure {
                url: url.to_string(),
                reason: format!("HTTP {}", status.as_u16()),
            };
        }

        match response.text().await {
            Ok(raw_body) => {
                debug!("Fetched {} bytes from {}", raw_body.len(), url);
                FetchOutcome::Success {
                    url: url.to_string(),
                    raw_body,
                }
            }
            Err(e) => FetchOutcome::Failure {
                url: url.to_string(),
                reason: format!("Body read error: {}", e),
            },
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &ContentFetchConfig {
        &self.config
    }
}

/// Split a slice into contiguous batches of at most `size` items
///
/// Order is preserved; the final batch may be shorter.
pub fn create_batches<T>(items: &[T], size: usize) -> Vec<&[T]> {
    items.chunks(size.max(1)).collect()
}
