// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Brave Search API provider
//!
//! Resolves a query into result URLs with a single GET against the Brave
//! Search API.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

use super::config::SearchConfig;
use super::provider::SearchProvider;
use super::types::{SearchError, SearchQuery};

/// Brave Search API provider
pub struct BraveSearchProvider {
    api_key: Option<String>,
    endpoint: String,
    timeout_ms: u64,
    client: Client,
}

impl BraveSearchProvider {
    /// Create a new Brave Search provider from configuration
    pub fn new(config: &SearchConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            api_key: config.brave_api_key.clone(),
            endpoint: config.endpoint.clone(),
            timeout_ms: config.request_timeout_secs * 1000,
            client,
        }
    }
}

#[async_trait]
impl SearchProvider for BraveSearchProvider {
    async fn resolve(&self, query: &SearchQuery) -> Result<Vec<String>, SearchError> {
        let api_key = match self.api_key.as_deref() {
            Some(key) if !key.is_empty() => key,
            _ => {
                return Err(SearchError::MissingApiKey {
                    provider: "brave".to_string(),
                })
            }
        };

        let mut params = vec![
            ("q", query.query.clone()),
            ("search_lang", query.search_lang.as_str().to_string()),
        ];
        if let Some(country) = query.country {
            params.push(("country", country.as_str().to_string()));
        }

        debug!("Brave search request: {:?}", query.query);

        let response = self
            .client
            .get(&self.endpoint)
            .header("Accept", "application/json")
            .header("X-Subscription-Token", api_key)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SearchError::Timeout {
                        timeout_ms: self.timeout_ms,
                    }
                } else {
                    SearchError::ApiError {
                        status: 0,
                        message: e.to_string(),
                    }
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SearchError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let data: BraveResponse = response.json().await.map_err(|e| SearchError::ApiError {
            status: 0,
            message: format!("JSON parse error: {}", e),
        })?;

        let urls = extract_result_urls(data);
        if urls.is_empty() {
            warn!("No usable URLs in Brave Search response");
        } else {
            debug!("Brave Search returned {} result URLs", urls.len());
        }

        Ok(urls)
    }

    fn name(&self) -> &'static str {
        "brave"
    }

    fn is_available(&self) -> bool {
        self.api_key.as_deref().map(|k| !k.is_empty()).unwrap_or(false)
    }
}

/// Pull URLs out of a provider response, dropping entries without one
///
/// Missing or malformed `web`/`results` fields mean zero results, never an
/// error.
fn extract_result_urls(data: BraveResponse) -> Vec<String> {
    data.web
        .map(|web| {
            web.results
                .into_iter()
                .filter_map(|r| r.url)
                .filter(|url| !url.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

#[derive(Debug, serde::Deserialize)]
struct BraveResponse {
    web: Option<BraveWebResults>,
}

#[derive(Debug, serde::Deserialize)]
struct BraveWebResults {
    #[serde(default)]
    results: Vec<BraveResult>,
}

#[derive(Debug, serde::Deserialize)]
struct BraveResult {
    url: Option<String>,
}
