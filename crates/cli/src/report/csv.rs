// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CSV format report output.

use chrono::SecondsFormat;

use crate::analysis::TestAnalysis;

use super::ReportFormatter;

/// Column order is part of the output contract.
const HEADER: &str = "test_id,test_name,failure_rate,total_runs,failed_runs,severity,failure_pattern,last_failure_at,recommended_action";

/// Rough per-row size for pre-allocation.
const ROW_SIZE: usize = 96;

/// CSV formatter, one row per result in analyzer order.
pub struct CsvFormatter;

/// Quote a field when it contains a delimiter, quote, or newline;
/// embedded quotes are doubled.
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn format_row(analysis: &TestAnalysis) -> String {
    let last_failure = analysis
        .last_failure_at
        .map(|at| at.to_rfc3339_opts(SecondsFormat::Secs, true))
        .unwrap_or_default();

    [
        escape_field(&analysis.test_id),
        escape_field(&analysis.test_name),
        format!("{:.2}", analysis.failure_rate),
        analysis.total_runs.to_string(),
        analysis.failed_runs.to_string(),
        analysis.severity.label().to_string(),
        analysis.failure_pattern.label().to_string(),
        last_failure,
        escape_field(&analysis.recommended_action),
    ]
    .join(",")
}

impl ReportFormatter for CsvFormatter {
    fn format(&self, results: &[TestAnalysis]) -> anyhow::Result<String> {
        let mut output = String::with_capacity(HEADER.len() + 1 + results.len() * ROW_SIZE);
        output.push_str(HEADER);
        output.push('\n');
        for analysis in results {
            output.push_str(&format_row(analysis));
            output.push('\n');
        }
        Ok(output)
    }
}

#[cfg(test)]
#[path = "csv_tests.rs"]
mod tests;
