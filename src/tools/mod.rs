// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Tool invocation boundary
//!
//! Tools are described by a name, a description, and a typed parameter
//! schema; invocation takes a JSON parameter object and returns a
//! JSON-encoded string result.

pub mod parallel_search;
pub mod registry;
pub mod str_counter;

pub use parallel_search::ParallelSearchTool;
pub use registry::{Tool, ToolDefinition, ToolRegistry};
pub use str_counter::StrCounterTool;
