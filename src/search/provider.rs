// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Search provider trait definition

use async_trait::async_trait;

use super::types::{SearchError, SearchQuery};

/// Trait for resolving a search query into a list of result URLs
///
/// The pipeline only needs URLs from the provider; titles and snippets are
/// not carried past this boundary.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Resolve a query into an ordered list of absolute result URLs
    ///
    /// Returns an empty list (not an error) when the provider responds
    /// successfully with zero usable results. Result entries without a URL
    /// must be filtered out.
    async fn resolve(&self, query: &SearchQuery) -> Result<Vec<String>, SearchError>;

    /// Get the provider name for logging
    fn name(&self) -> &'static str;

    /// Check if the provider is usable (has an API key, etc.)
    fn is_available(&self) -> bool;
}
