//! Shared unit test utilities.
//!
//! Provides common builders for run histories and analysis rows.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::analysis::{AnalysisMetadata, FailurePattern, Severity, TestAnalysis, recommend};
use crate::record::{RunRecord, RunStatus};

/// Timestamp `minutes` past a fixed base instant.
pub fn at(minutes: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap() + Duration::minutes(minutes)
}

/// Run record for `test_id` at minute offset `minutes`.
pub fn run(test_id: &str, minutes: i64, status: RunStatus) -> RunRecord {
    RunRecord {
        run_id: format!("run-{minutes}"),
        test_id: test_id.to_string(),
        test_name: format!("{test_id} spec"),
        status,
        started_at: at(minutes),
        environment: "ci".to_string(),
    }
}

/// A run history from outcome flags, oldest first; `true` means the
/// run failed.
pub fn history(test_id: &str, outcomes: &[bool]) -> Vec<RunRecord> {
    outcomes
        .iter()
        .enumerate()
        .map(|(i, &failed)| {
            let status = if failed {
                RunStatus::Failed
            } else {
                RunStatus::Passed
            };
            run(test_id, i as i64, status)
        })
        .collect()
}

/// Analysis row with plausible metadata, for reporter and sink tests.
pub fn analysis_row(
    test_id: &str,
    severity: Severity,
    pattern: FailurePattern,
    failure_rate: f64,
    total_runs: usize,
    failed_runs: usize,
) -> TestAnalysis {
    TestAnalysis {
        test_id: test_id.to_string(),
        test_name: format!("{test_id} spec"),
        total_runs,
        failed_runs,
        failure_rate,
        last_failure_at: (failed_runs > 0).then(|| at(total_runs as i64 - 1)),
        failure_pattern: pattern,
        severity,
        recommended_action: recommend::action(severity, pattern).to_string(),
        metadata: AnalysisMetadata {
            environments: ["ci".to_string()].into(),
            run_ids: (0..total_runs).map(|i| format!("run-{i}")).collect(),
            first_seen_at: at(0),
            last_seen_at: at(total_runs as i64 - 1),
        },
    }
}
