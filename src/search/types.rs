// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Core types for the search-then-fetch pipeline

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Language hint passed to the search provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SearchLang {
    #[default]
    En,
    Jp,
}

impl SearchLang {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Jp => "jp",
        }
    }
}

/// Country hint passed to the search provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum SearchCountry {
    #[default]
    Us,
    Jp,
}

impl SearchCountry {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Us => "US",
            Self::Jp => "JP",
        }
    }
}

/// A search request: one query plus locale hints
///
/// Constructed once per invocation and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    /// The search query string
    pub query: String,
    /// Search language (default: en)
    #[serde(default)]
    pub search_lang: SearchLang,
    /// Country to search from (default: US)
    #[serde(default = "default_country", skip_serializing_if = "Option::is_none")]
    pub country: Option<SearchCountry>,
}

fn default_country() -> Option<SearchCountry> {
    Some(SearchCountry::default())
}

impl SearchQuery {
    /// Build a query with default locale hints
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            search_lang: SearchLang::default(),
            country: Some(SearchCountry::default()),
        }
    }

    /// Validate the query before hitting the provider
    pub fn validate(&self) -> Result<(), String> {
        if self.query.trim().is_empty() {
            return Err("Query cannot be empty".to_string());
        }
        if self.query.chars().count() > 500 {
            return Err("Query too long (max 500 characters)".to_string());
        }
        Ok(())
    }
}

/// Result of one page-fetch attempt
///
/// One outcome per URL; a failed fetch never aborts its siblings.
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    /// Page retrieved; body not yet normalized
    Success { url: String, raw_body: String },
    /// Network error, non-success status, or timeout
    Failure { url: String, reason: String },
}

impl FetchOutcome {
    pub fn url(&self) -> &str {
        match self {
            Self::Success { url, .. } | Self::Failure { url, .. } => url,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Final output of the search-then-fetch pipeline
///
/// `success` is false only when the resolver returned zero URLs. When every
/// fetch of a non-empty list fails the pipeline errors instead, so callers
/// can tell "nothing to fetch" from "everything failed".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchReport {
    pub success: bool,
    pub pages: Vec<String>,
}

impl FetchReport {
    /// Report for the empty-URL-list case
    pub fn empty() -> Self {
        Self {
            success: false,
            pages: vec![],
        }
    }
}

/// Errors that can terminate a pipeline invocation
///
/// Per-URL fetch failures are not represented here: they are recovered into
/// [`FetchOutcome::Failure`] and only surface as diagnostics.
#[derive(Debug, Error)]
pub enum SearchError {
    /// No API credential configured for the search provider
    #[error("No API key configured for {provider}")]
    MissingApiKey {
        /// Name of the provider missing its key
        provider: String,
    },

    /// Search provider returned a non-success response
    #[error("Search API error: {status} - {message}")]
    ApiError {
        /// HTTP status code (0 when the request never completed)
        status: u16,
        /// Error message or response body
        message: String,
    },

    /// Search request timed out
    #[error("Search timeout after {timeout_ms}ms")]
    Timeout {
        /// Timeout duration in milliseconds
        timeout_ms: u64,
    },

    /// Every URL in a non-empty list failed to fetch
    #[error("All {attempted} page fetches failed")]
    AllFetchesFailed {
        /// Number of URLs attempted
        attempted: usize,
    },

    /// Invalid search query
    #[error("Invalid query: {reason}")]
    InvalidQuery {
        /// Reason the query was rejected
        reason: String,
    },
}
