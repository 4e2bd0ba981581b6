// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Configuration for the search provider

use std::env;

/// Default Brave Search API endpoint
pub const DEFAULT_BRAVE_ENDPOINT: &str = "https://api.search.brave.com/res/v1/web/search";

/// Configuration for the search provider
///
/// Loaded once at process startup and passed into the provider constructor;
/// nothing in this module reads the environment at call time.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Brave Search API key
    pub brave_api_key: Option<String>,
    /// Search API endpoint
    pub endpoint: String,
    /// Request timeout in seconds
    pub request_timeout_secs: u64,
}

impl SearchConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            brave_api_key: env::var("BRAVE_SEARCH_API_KEY").ok(),
            endpoint: env::var("BRAVE_SEARCH_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_BRAVE_ENDPOINT.to_string()),
            request_timeout_secs: env::var("SEARCH_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.endpoint.is_empty() {
            return Err("Search endpoint cannot be empty".to_string());
        }
        if self.request_timeout_secs == 0 {
            return Err("request_timeout_secs must be at least 1".to_string());
        }
        Ok(())
    }

    /// Check if a search credential is configured
    pub fn has_api_key(&self) -> bool {
        self.brave_api_key
            .as_deref()
            .map(|k| !k.is_empty())
            .unwrap_or(false)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            brave_api_key: None,
            endpoint: DEFAULT_BRAVE_ENDPOINT.to_string(),
            request_timeout_secs: 10,
        }
    }
}
