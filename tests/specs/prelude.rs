//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for building throwaway projects with run
//! histories and invoking the flakewatch binary.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;

use std::path::Path;
use std::process::Command;

use chrono::{DateTime, Duration, Utc};
use serde_json::json;

/// Returns a Command configured to run the flakewatch binary.
pub fn flakewatch_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("flakewatch"))
}

/// Throwaway project directory holding a run history and config.
pub struct Project {
    dir: tempfile::TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().expect("tempdir should be created"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write flakewatch.toml with the given content.
    pub fn config(&self, content: &str) {
        std::fs::write(self.path().join("flakewatch.toml"), content)
            .expect("config should be written");
    }

    /// Write run-history.json from (test_id, outcomes) pairs; `true`
    /// means the run failed. Timestamps are recent, oldest first.
    pub fn history(&self, tests: &[(&str, &[bool])]) {
        self.history_at(tests, Utc::now() - Duration::hours(12));
    }

    /// Like `history`, with run timestamps starting from `base`.
    pub fn history_at(&self, tests: &[(&str, &[bool])], base: DateTime<Utc>) {
        let mut records = Vec::new();
        for (test_id, outcomes) in tests {
            for (i, failed) in outcomes.iter().enumerate() {
                records.push(json!({
                    "runId": format!("{test_id}-run-{i}"),
                    "testId": test_id,
                    "testName": format!("{test_id} spec"),
                    "status": if *failed { "failed" } else { "passed" },
                    "startedAt": (base + Duration::minutes(i as i64)).to_rfc3339(),
                    "environment": "ci",
                }));
            }
        }
        std::fs::write(
            self.path().join("run-history.json"),
            serde_json::to_string_pretty(&records).expect("history should serialize"),
        )
        .expect("history should be written");
    }

    /// Read the flagged-tests store, if present.
    pub fn flagged_store(&self) -> Option<serde_json::Value> {
        let raw = std::fs::read_to_string(self.path().join(".flakewatch/flagged.json")).ok()?;
        serde_json::from_str(&raw).ok()
    }
}

/// `n` passing runs.
pub fn passes(n: usize) -> Vec<bool> {
    vec![false; n]
}

/// `n` failing runs.
pub fn fails(n: usize) -> Vec<bool> {
    vec![true; n]
}

/// Concatenate two outcome sequences.
pub fn then(mut a: Vec<bool>, b: Vec<bool>) -> Vec<bool> {
    a.extend(b);
    a
}
