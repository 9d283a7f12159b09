// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Analysis pass: group, filter, classify, score, sort.
//!
//! The analyzer is pure computation: no I/O, deterministic for a given
//! record list and configuration, and recomputed from scratch on every
//! invocation.

pub mod classify;
pub mod group;
pub mod recommend;
pub mod severity;

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use self::classify::FailurePattern;
pub use self::severity::Severity;

use crate::config::AnalysisConfig;
use crate::record::RunRecord;

use self::group::group_by_test;

/// Distinct environments and parent runs a test was observed in, with
/// the bounds of its observation window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisMetadata {
    pub environments: BTreeSet<String>,
    pub run_ids: BTreeSet<String>,
    pub first_seen_at: DateTime<Utc>,
    pub last_seen_at: DateTime<Utc>,
}

/// Analysis output row for one test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestAnalysis {
    pub test_id: String,
    pub test_name: String,
    pub total_runs: usize,
    pub failed_runs: usize,
    /// Failure rate as a percentage (0-100), rounded to 2 decimals.
    pub failure_rate: f64,
    /// Most recent failing run; absent if the test never failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_failure_at: Option<DateTime<Utc>>,
    pub failure_pattern: FailurePattern,
    pub severity: Severity,
    pub recommended_action: String,
    pub metadata: AnalysisMetadata,
}

/// Run one full analysis pass over a window of run records.
///
/// Tests with fewer than `min_runs` observations or a failure fraction
/// below `failure_threshold` are silently excluded. Output is sorted by
/// severity descending, then failure rate descending; the sort is
/// stable, so ties keep the order groups were first seen in.
pub fn analyze(records: Vec<RunRecord>, config: &AnalysisConfig) -> Vec<TestAnalysis> {
    let groups = group_by_test(records);
    tracing::debug!(groups = groups.len(), "grouped run records");

    let mut results: Vec<TestAnalysis> = Vec::new();
    for mut group in groups {
        let total_runs = group.runs.len();
        if total_runs < config.min_runs {
            continue;
        }
        // Classification reads the history in chronological order,
        // regardless of arrival order.
        group.runs.sort_by_key(|r| r.started_at);

        let failed_runs = group.runs.iter().filter(|r| r.status.is_failed()).count();
        let raw_rate = failed_runs as f64 / total_runs as f64;
        if raw_rate < config.failure_threshold {
            continue;
        }

        let pattern = classify::classify(&group.runs);
        let recent_rate = classify::recent_failure_rate(&group.runs);
        let severity = severity::score(raw_rate, recent_rate, pattern);

        let last_failure_at = group
            .runs
            .iter()
            .rev()
            .find(|r| r.status.is_failed())
            .map(|r| r.started_at);

        let environments: BTreeSet<String> =
            group.runs.iter().map(|r| r.environment.clone()).collect();
        let run_ids: BTreeSet<String> = group.runs.iter().map(|r| r.run_id.clone()).collect();
        let (Some(first), Some(last)) = (group.runs.first(), group.runs.last()) else {
            continue;
        };
        let first_seen_at = first.started_at;
        let last_seen_at = last.started_at;
        let test_name = last.test_name.clone();

        results.push(TestAnalysis {
            test_id: group.test_id,
            test_name,
            total_runs,
            failed_runs,
            failure_rate: to_percent(raw_rate),
            last_failure_at,
            failure_pattern: pattern,
            severity,
            recommended_action: recommend::action(severity, pattern).to_string(),
            metadata: AnalysisMetadata {
                environments,
                run_ids,
                first_seen_at,
                last_seen_at,
            },
        });
    }

    results.sort_by(|a, b| {
        b.severity
            .cmp(&a.severity)
            .then_with(|| b.failure_rate.total_cmp(&a.failure_rate))
    });
    results
}

/// Round a failure fraction to a 2-decimal percentage.
fn to_percent(rate: f64) -> f64 {
    (rate * 100.0 * 100.0).round() / 100.0
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
