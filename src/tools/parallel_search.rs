// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Search-then-fetch tool
//!
//! Wraps the pipeline behind the tool boundary: parameters in, JSON
//! envelope out. Terminal pipeline errors become an error envelope here
//! instead of failing the invocation opaquely.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::warn;

use super::registry::Tool;
use crate::search::{FetchReport, ParallelSearchService, SearchQuery};

/// Result envelope for the parallel-search tool
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParallelSearchResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub html_data: Vec<String>,
}

impl ParallelSearchResult {
    fn from_report(report: FetchReport) -> Self {
        Self {
            success: report.success,
            message: None,
            html_data: report.pages,
        }
    }

    fn error(message: String) -> Self {
        Self {
            success: false,
            message: Some(message),
            html_data: vec![],
        }
    }
}

/// The parallel-search tool
pub struct ParallelSearchTool {
    service: Arc<ParallelSearchService>,
}

impl ParallelSearchTool {
    pub fn new(service: Arc<ParallelSearchService>) -> Self {
        Self { service }
    }

    fn encode(result: &ParallelSearchResult) -> String {
        serde_json::to_string(result).unwrap_or_else(|e| {
            json!({
                "success": false,
                "message": format!("Failed to encode result: {}", e),
                "htmlData": [],
            })
            .to_string()
        })
    }
}

#[async_trait]
impl Tool for ParallelSearchTool {
    fn name(&self) -> &'static str {
        "parallel-search"
    }

    fn description(&self) -> &'static str {
        "Searches the web and fetches the content of the result pages in parallel"
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Search query"
                },
                "searchLang": {
                    "type": "string",
                    "enum": ["en", "jp"],
                    "default": "en",
                    "description": "Search language"
                },
                "country": {
                    "type": "string",
                    "enum": ["US", "JP"],
                    "default": "US",
                    "description": "Country to search from"
                }
            },
            "required": ["query"]
        })
    }

    async fn execute(&self, params: Value) -> String {
        let query: SearchQuery = match serde_json::from_value(params) {
            Ok(query) => query,
            Err(e) => {
                return Self::encode(&ParallelSearchResult::error(format!(
                    "Invalid parameters: {}",
                    e
                )));
            }
        };

        match self.service.search_and_fetch(&query).await {
            Ok(report) => Self::encode(&ParallelSearchResult::from_report(report)),
            Err(e) => {
                warn!("parallel-search failed: {}", e);
                Self::encode(&ParallelSearchResult::error(e.to_string()))
            }
        }
    }
}
