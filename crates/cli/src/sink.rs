// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Flagged-test persistence.
//!
//! The sink is best-effort: a failed upsert is logged and swallowed so
//! it never changes the outcome of a pass whose report has already
//! been emitted.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::analysis::TestAnalysis;

/// Consumed store interface for flagged tests.
pub trait FlaggedTestSink {
    /// Insert or update the store entry for every flagged test.
    fn upsert_flagged_tests(&self, results: &[TestAnalysis]) -> anyhow::Result<()>;
}

/// JSON store keyed by test id, read-merge-write on every pass.
pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl FlaggedTestSink for JsonFileSink {
    fn upsert_flagged_tests(&self, results: &[TestAnalysis]) -> anyhow::Result<()> {
        let mut store: BTreeMap<String, TestAnalysis> = if self.path.exists() {
            let raw = std::fs::read_to_string(&self.path)?;
            serde_json::from_str(&raw)?
        } else {
            BTreeMap::new()
        };

        for analysis in results {
            store.insert(analysis.test_id.clone(), analysis.clone());
        }

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(&store)?)?;
        Ok(())
    }
}

/// Record flagged tests without letting a store failure surface.
pub fn persist_best_effort(sink: &dyn FlaggedTestSink, results: &[TestAnalysis]) {
    if let Err(error) = sink.upsert_flagged_tests(results) {
        tracing::warn!(%error, "failed to update flagged-tests store");
    }
}

#[cfg(test)]
#[path = "sink_tests.rs"]
mod tests;
