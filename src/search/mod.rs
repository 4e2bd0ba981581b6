// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Search-then-fetch pipeline
//!
//! Resolves a query into result URLs via the Brave Search API, fetches the
//! pages in bounded parallel batches, and aggregates whatever could be
//! recovered into a single report.
//!
//! Key properties:
//! - Batch width caps concurrent outbound connections (bulkhead)
//! - Per-URL failures are isolated; partial success is still success
//! - Zero results and total fetch failure are distinguishable terminal states

pub mod brave;
pub mod config;
pub mod content;
pub mod provider;
pub mod service;
pub mod types;

// Re-export commonly used types
pub use config::SearchConfig;
pub use provider::SearchProvider;
pub use service::ParallelSearchService;
pub use types::{FetchOutcome, FetchReport, SearchCountry, SearchError, SearchLang, SearchQuery};

// Re-export content fetching types
pub use content::{ContentFetchConfig, ContentFetcher};
