// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Search-then-fetch pipeline orchestration
//!
//! Resolves a query to URLs, fetches the pages in bounded batches, and
//! aggregates the outcomes into one report.

use tracing::{debug, warn};

use super::brave::BraveSearchProvider;
use super::config::SearchConfig;
use super::content::{aggregate, ContentFetchConfig, ContentFetcher};
use super::provider::SearchProvider;
use super::types::{FetchReport, SearchError, SearchQuery};

/// Orchestrates resolver, batch fetcher, and aggregator
pub struct ParallelSearchService {
    provider: Box<dyn SearchProvider>,
    fetcher: ContentFetcher,
}

impl ParallelSearchService {
    /// Create a service over an arbitrary provider (tests inject mocks here)
    pub fn new(provider: Box<dyn SearchProvider>, fetch_config: ContentFetchConfig) -> Self {
        Self {
            fetcher: ContentFetcher::new(fetch_config),
            provider,
        }
    }

    /// Create a service backed by the Brave Search provider
    pub fn from_config(search_config: &SearchConfig, fetch_config: ContentFetchConfig) -> Self {
        Self::new(
            Box::new(BraveSearchProvider::new(search_config)),
            fetch_config,
        )
    }

    /// Run one full pipeline invocation
    ///
    /// Zero resolved URLs is a soft failure: `{ success: false, pages: [] }`
    /// without a single fetch being issued. Configuration and upstream
    /// errors, and the all-fetches-failed case, propagate as errors.
    pub async fn search_and_fetch(&self, query: &SearchQuery) -> Result<FetchReport, SearchError> {
        query
            .validate()
            .map_err(|reason| SearchError::InvalidQuery { reason })?;

        let urls = self.provider.resolve(query).await?;
        if urls.is_empty() {
            warn!("No URLs resolved for query: {}", query.query);
            return Ok(FetchReport::empty());
        }

        debug!(
            "Resolved {} URLs via {} for query: {}",
            urls.len(),
            self.provider.name(),
            query.query
        );

        let outcomes = self.fetcher.fetch_all(&urls).await;
        aggregate(outcomes, self.fetcher.config())
    }

    /// Check whether the underlying provider is usable
    pub fn is_available(&self) -> bool {
        self.provider.is_available()
    }

    /// Name of the underlying provider
    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }
}
