// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Tool trait and registry
//!
//! The host runtime advertises tools by name/description/schema and invokes
//! them with a JSON parameter object; every tool answers with a
//! JSON-encoded string, errors included.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// A callable tool
#[async_trait]
pub trait Tool: Send + Sync {
    /// Tool name used for registration and invocation
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// JSON schema of the parameter object
    fn parameters_schema(&self) -> Value;

    /// Execute with a parameter object matching the schema
    ///
    /// Always returns a JSON-encoded string; invalid parameters or internal
    /// errors become a structured error envelope, never a panic.
    async fn execute(&self, params: Value) -> String;
}

/// Advertised description of a registered tool
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

/// Registry of callable tools, keyed by name
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<&'static str, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool under its own name
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        debug!("Registering tool: {}", tool.name());
        self.tools.insert(tool.name(), tool);
    }

    /// Look up a tool by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// Definitions of every registered tool
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        let mut definitions: Vec<_> = self
            .tools
            .values()
            .map(|tool| ToolDefinition {
                name: tool.name().to_string(),
                description: tool.description().to_string(),
                parameters: tool.parameters_schema(),
            })
            .collect();
        definitions.sort_by(|a, b| a.name.cmp(&b.name));
        definitions
    }

    /// Invoke a tool by name, returning its JSON result
    ///
    /// An unknown tool name yields a JSON error envelope rather than an Err,
    /// keeping the invocation boundary string-in/string-out.
    pub async fn invoke(&self, name: &str, params: Value) -> String {
        match self.get(name) {
            Some(tool) => tool.execute(params).await,
            None => serde_json::json!({
                "success": false,
                "message": format!("Unknown tool: {}", name),
            })
            .to_string(),
        }
    }
}
