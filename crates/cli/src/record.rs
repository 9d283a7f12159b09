// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run-record data model.
//!
//! A `RunRecord` is one observed pass/fail outcome of one test within
//! one execution run. Records are immutable inputs, read-only for the
//! duration of one analysis pass.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of a single test execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Passed,
    Failed,
}

impl RunStatus {
    pub fn is_failed(self) -> bool {
        matches!(self, Self::Failed)
    }
}

/// One observed outcome of one test within one execution run.
///
/// `test_id` is stable across runs; it is the grouping key for the
/// whole analysis. Field names on the wire are camelCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunRecord {
    /// Identifier of the parent execution run.
    pub run_id: String,
    /// Stable identifier of the individual test.
    pub test_id: String,
    /// Human-readable description.
    pub test_name: String,
    pub status: RunStatus,
    pub started_at: DateTime<Utc>,
    /// Environment tag, e.g. "development" or "staging".
    pub environment: String,
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
