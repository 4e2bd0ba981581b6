// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Character counting tool
//!
//! Counts non-whitespace characters in a text and checks the count against
//! an upper limit and its 80% floor.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::registry::Tool;

/// Fraction of the limit below which the text is flagged as too short
const FALL_BELOW_RATIO: f64 = 0.8;

/// Parameters for the str-counter tool
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrCounterParams {
    /// Text to count
    pub text: String,
    /// Upper character limit
    pub number_limit: f64,
}

/// Result of a str-counter invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrCounterResult {
    pub success: bool,
    pub message: String,
    pub count: usize,
    pub is_exceeded: bool,
    pub is_fall_below: bool,
}

/// Count non-whitespace characters and evaluate both limit checks
pub fn count_characters(params: &StrCounterParams) -> StrCounterResult {
    let count = params.text.chars().filter(|c| !c.is_whitespace()).count();
    let limit = params.number_limit;
    let floor = limit * FALL_BELOW_RATIO;

    let is_exceeded = (count as f64) > limit;
    let is_fall_below = (count as f64) < floor;

    let mut message = if is_exceeded {
        format!(
            "Character count exceeds the limit ({}). Current count: {}",
            limit, count
        )
    } else {
        format!(
            "Character count is within the limit ({}). Current count: {}",
            limit, count
        )
    };
    if is_fall_below {
        message.push_str(&format!(
            "\nCharacter count is below 80% of the limit ({}).",
            floor
        ));
    } else {
        message.push_str(&format!(
            "\nCharacter count is above 80% of the limit ({}).",
            floor
        ));
    }

    StrCounterResult {
        success: true,
        message,
        count,
        is_exceeded,
        is_fall_below,
    }
}

/// The str-counter tool
pub struct StrCounterTool;

#[async_trait]
impl Tool for StrCounterTool {
    fn name(&self) -> &'static str {
        "str-counter"
    }

    fn description(&self) -> &'static str {
        "Counts the characters in a given text, ignoring whitespace"
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "text": {
                    "type": "string",
                    "description": "Text to count"
                },
                "numberLimit": {
                    "type": "number",
                    "description": "Upper character limit"
                }
            },
            "required": ["text", "numberLimit"]
        })
    }

    async fn execute(&self, params: Value) -> String {
        let params: StrCounterParams = match serde_json::from_value(params) {
            Ok(params) => params,
            Err(e) => {
                return json!({
                    "success": false,
                    "message": format!("Invalid parameters: {}", e),
                    "count": 0,
                    "isExceeded": false,
                    "isFallBelow": false,
                })
                .to_string();
            }
        };

        let result = count_characters(&params);
        serde_json::to_string(&result).unwrap_or_else(|e| {
            json!({
                "success": false,
                "message": format!("Failed to encode result: {}", e),
                "count": 0,
                "isExceeded": false,
                "isFallBelow": false,
            })
            .to_string()
        })
    }
}
