// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Severity scoring for flagged tests.

use serde::{Deserialize, Serialize};

use super::classify::FailurePattern;

/// Urgency tier for triage prioritization. The derived ordering is
/// meaningful: `Critical` > `High` > `Medium` > `Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Recent-window rate bound for the critical rule.
const CRITICAL_RECENT_RATE: f64 = 0.8;

/// Overall rate bound for the high rule.
const HIGH_RATE: f64 = 0.5;

/// Overall rate bound for the medium rule.
const MEDIUM_RATE: f64 = 0.25;

/// Map failure rates and pattern to a severity tier.
///
/// Rules are evaluated in a fixed order and the first match wins; they
/// are not mutually exclusive by value alone, so the order is part of
/// the contract. `failure_rate` is the overall failed fraction for the
/// window; `recent_failure_rate` is the fraction within the
/// classifier's recent window.
pub fn score(failure_rate: f64, recent_failure_rate: f64, pattern: FailurePattern) -> Severity {
    if pattern == FailurePattern::ConsistentlyFailing && recent_failure_rate > CRITICAL_RECENT_RATE
    {
        return Severity::Critical;
    }
    if failure_rate > HIGH_RATE {
        return Severity::High;
    }
    if failure_rate > MEDIUM_RATE || pattern == FailurePattern::RecentRegression {
        return Severity::Medium;
    }
    Severity::Low
}

#[cfg(test)]
#[path = "severity_tests.rs"]
mod tests;
