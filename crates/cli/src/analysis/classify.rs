// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Failure pattern classification.
//!
//! Labels the shape of one test's failure history over the window:
//! failing almost every recent run, materially worse in the later half,
//! or sporadic with no trend.

use serde::{Deserialize, Serialize};

use crate::record::RunRecord;

/// Qualitative shape of a test's failure history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePattern {
    Intermittent,
    RecentRegression,
    ConsistentlyFailing,
}

impl FailurePattern {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Intermittent => "intermittent",
            Self::RecentRegression => "recent_regression",
            Self::ConsistentlyFailing => "consistently_failing",
        }
    }
}

impl std::fmt::Display for FailurePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Recent-window failure rate above which a test counts as
/// consistently failing. Strictly greater-than: exactly 0.8 falls
/// through to the regression check.
const CONSISTENT_FAILURE_RATE: f64 = 0.8;

/// The later-half rate must exceed the early-half rate times this
/// factor to count as a regression.
const REGRESSION_FACTOR: f64 = 2.0;

/// Fraction of the history that makes up the recent window.
const RECENT_WINDOW_FRACTION: f64 = 0.25;

/// Classify one test's failure history.
///
/// `runs` must be sorted ascending by `started_at`. Check order is part
/// of the contract: consistently-failing wins over recent-regression,
/// which wins over the intermittent default.
pub fn classify(runs: &[RunRecord]) -> FailurePattern {
    if recent_failure_rate(runs) > CONSISTENT_FAILURE_RATE {
        return FailurePattern::ConsistentlyFailing;
    }

    // An early-half rate of zero makes any later failure "more than
    // double"; the emergence of failures is itself a regression signal.
    let mid = runs.len() / 2;
    let early_rate = failure_fraction(&runs[..mid]);
    let later_rate = failure_fraction(&runs[mid..]);
    if later_rate > early_rate * REGRESSION_FACTOR {
        return FailurePattern::RecentRegression;
    }

    FailurePattern::Intermittent
}

/// Failure rate within the most recent `ceil(n × 0.25)` runs (at least
/// one). This is the same window the consistently-failing check uses,
/// and severity scoring reuses it.
pub fn recent_failure_rate(runs: &[RunRecord]) -> f64 {
    if runs.is_empty() {
        return 0.0;
    }
    let window = ((runs.len() as f64) * RECENT_WINDOW_FRACTION)
        .ceil()
        .max(1.0) as usize;
    failure_fraction(&runs[runs.len().saturating_sub(window)..])
}

/// Fraction of failed runs in a slice; an empty slice rates 0.0.
pub fn failure_fraction(runs: &[RunRecord]) -> f64 {
    if runs.is_empty() {
        return 0.0;
    }
    let failed = runs.iter().filter(|r| r.status.is_failed()).count();
    failed as f64 / runs.len() as f64
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
