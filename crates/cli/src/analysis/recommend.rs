// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Remediation recommendations for flagged tests.

use super::classify::FailurePattern;
use super::severity::Severity;

/// Human-actionable recommendation for a flagged test.
///
/// Wording is keyed on severity, with pattern-sensitive phrasing for
/// the medium tier.
pub fn action(severity: Severity, pattern: FailurePattern) -> &'static str {
    match severity {
        Severity::Critical => "Immediate investigation required — test is consistently failing.",
        Severity::High => "High priority — investigate root cause and fix.",
        Severity::Medium if pattern == FailurePattern::RecentRegression => {
            "Medium priority — recent regression detected, review recent changes."
        }
        Severity::Medium => "Medium priority — investigate intermittent failures.",
        Severity::Low => "Low priority — monitor for trend changes.",
    }
}

#[cfg(test)]
#[path = "recommend_tests.rs"]
mod tests;
