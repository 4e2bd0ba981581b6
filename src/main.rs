// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Process bootstrap and stdio tool host
//!
//! Loads configuration once at startup, registers the tools, and serves
//! them over a newline-delimited JSON protocol on stdin/stdout:
//!
//! - `{"list": true}` answers with the registered tool definitions
//! - `{"tool": "<name>", "params": {...}}` answers with the tool's
//!   JSON-encoded result on a single line

use anyhow::{anyhow, Result};
use serde::Deserialize;
use serde_json::{json, Value};
use std::env;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use parallel_search_node::search::{ContentFetchConfig, ParallelSearchService, SearchConfig};
use parallel_search_node::tools::{ParallelSearchTool, StrCounterTool, ToolRegistry};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum HostRequest {
    Invoke {
        tool: String,
        #[serde(default)]
        params: Value,
    },
    List {
        #[allow(dead_code)]
        list: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Environment is read once here; everything downstream takes explicit
    // configuration objects.
    dotenv::dotenv().ok();

    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    let search_config = SearchConfig::from_env();
    search_config
        .validate()
        .map_err(|e| anyhow!("Invalid search config: {}", e))?;

    let fetch_config = ContentFetchConfig::from_env();
    fetch_config
        .validate()
        .map_err(|e| anyhow!("Invalid content fetch config: {}", e))?;

    if !search_config.has_api_key() {
        tracing::warn!(
            "BRAVE_SEARCH_API_KEY is not set; parallel-search invocations will fail"
        );
    }

    let service = Arc::new(ParallelSearchService::from_config(
        &search_config,
        fetch_config,
    ));

    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(StrCounterTool));
    registry.register(Arc::new(ParallelSearchTool::new(service)));

    tracing::info!(
        "parallel-search-node ready, {} tools registered",
        registry.definitions().len()
    );

    serve_stdio(registry).await
}

/// Serve the registry over stdin/stdout until EOF
async fn serve_stdio(registry: ToolRegistry) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<HostRequest>(line) {
            Ok(HostRequest::Invoke { tool, params }) => registry.invoke(&tool, params).await,
            Ok(HostRequest::List { .. }) => {
                json!({ "tools": registry.definitions() }).to_string()
            }
            Err(e) => json!({
                "success": false,
                "message": format!("Malformed request: {}", e),
            })
            .to_string(),
        };

        stdout.write_all(response.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
        stdout.flush().await?;
    }

    tracing::info!("stdin closed, shutting down");
    Ok(())
}
