// parallel-search tool: envelope behavior over an injected provider.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;

use parallel_search_node::search::{
    ContentFetchConfig, ParallelSearchService, SearchError, SearchProvider, SearchQuery,
};
use parallel_search_node::tools::{ParallelSearchTool, Tool};

enum Behavior {
    Urls(Vec<String>),
    Fail(fn() -> SearchError),
}

struct ScriptedProvider {
    behavior: Behavior,
}

#[async_trait]
impl SearchProvider for ScriptedProvider {
    async fn resolve(&self, _query: &SearchQuery) -> Result<Vec<String>, SearchError> {
        match &self.behavior {
            Behavior::Urls(urls) => Ok(urls.clone()),
            Behavior::Fail(make) => Err(make()),
        }
    }

    fn name(&self) -> &'static str {
        "scripted"
    }

    fn is_available(&self) -> bool {
        true
    }
}

fn tool(behavior: Behavior) -> ParallelSearchTool {
    let service = ParallelSearchService::new(
        Box::new(ScriptedProvider { behavior }),
        ContentFetchConfig::default(),
    );
    ParallelSearchTool::new(Arc::new(service))
}

async fn invoke(tool: &ParallelSearchTool, params: Value) -> Value {
    let raw = tool.execute(params).await;
    serde_json::from_str(&raw).expect("tool must return valid JSON")
}

#[tokio::test]
async fn test_no_results_envelope() {
    let tool = tool(Behavior::Urls(vec![]));
    let result = invoke(&tool, json!({"query": "test search"})).await;

    assert_eq!(result["success"], false);
    assert_eq!(result["htmlData"], json!([]));
}

#[tokio::test]
async fn test_defaults_applied_to_params() {
    // Only "query" given; searchLang/country defaults must not be required
    let tool = tool(Behavior::Urls(vec![]));
    let result = invoke(&tool, json!({"query": "q"})).await;
    assert_eq!(result["success"], false); // empty resolver, but params parsed
    assert!(result.get("message").is_none() || result["message"].is_null());
}

#[tokio::test]
async fn test_upstream_error_envelope() {
    let tool = tool(Behavior::Fail(|| SearchError::ApiError {
        status: 502,
        message: "bad gateway".to_string(),
    }));
    let result = invoke(&tool, json!({"query": "q"})).await;

    assert_eq!(result["success"], false);
    assert!(result["message"].as_str().unwrap().contains("502"));
    assert_eq!(result["htmlData"], json!([]));
}

#[tokio::test]
async fn test_missing_credential_envelope() {
    let tool = tool(Behavior::Fail(|| SearchError::MissingApiKey {
        provider: "brave".to_string(),
    }));
    let result = invoke(&tool, json!({"query": "q"})).await;

    assert_eq!(result["success"], false);
    assert!(result["message"].as_str().unwrap().contains("brave"));
}

#[tokio::test]
async fn test_malformed_params_envelope() {
    let tool = tool(Behavior::Urls(vec![]));
    let result = invoke(&tool, json!({"query": 42})).await;

    assert_eq!(result["success"], false);
    assert!(result["message"]
        .as_str()
        .unwrap()
        .contains("Invalid parameters"));
}

#[test]
fn test_tool_metadata() {
    let tool = tool(Behavior::Urls(vec![]));
    assert_eq!(tool.name(), "parallel-search");

    let schema = tool.parameters_schema();
    assert_eq!(schema["required"], json!(["query"]));
    assert_eq!(
        schema["properties"]["searchLang"]["enum"],
        json!(["en", "jp"])
    );
    assert_eq!(schema["properties"]["country"]["enum"], json!(["US", "JP"]));
}
