// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod search;
pub mod tools;

// Re-export main types
pub use search::{
    ContentFetchConfig, ContentFetcher, FetchOutcome, FetchReport, ParallelSearchService,
    SearchConfig, SearchError, SearchProvider, SearchQuery,
};
pub use tools::{ParallelSearchTool, StrCounterTool, Tool, ToolDefinition, ToolRegistry};
