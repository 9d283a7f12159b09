// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format report output.

use crate::analysis::TestAnalysis;

use super::ReportFormatter;

/// JSON formatter: the exact serialization of the result array, in
/// analyzer order.
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format(&self, results: &[TestAnalysis]) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(results)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
