// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run-record ingestion.
//!
//! The engine consumes run history through `RunRecordSource`; the
//! production implementation reads a JSON array file and filters to
//! the lookback window. Production code never synthesizes its own
//! input data.

use std::path::PathBuf;

use chrono::{DateTime, Duration, Utc};

use crate::error::EngineError;
use crate::record::RunRecord;

/// Supplies run records for a lookback window. A fetch failure aborts
/// the whole pass; there is no partial result.
pub trait RunRecordSource {
    fn fetch(&self, lookback_days: u32) -> Result<Vec<RunRecord>, EngineError>;
}

/// Production source: a JSON array of run records on disk.
pub struct JsonFileSource {
    path: PathBuf,
    now: DateTime<Utc>,
}

impl JsonFileSource {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            now: Utc::now(),
        }
    }

    /// Pin the reference instant the lookback cutoff is computed from.
    pub fn at(path: PathBuf, now: DateTime<Utc>) -> Self {
        Self { path, now }
    }
}

impl RunRecordSource for JsonFileSource {
    fn fetch(&self, lookback_days: u32) -> Result<Vec<RunRecord>, EngineError> {
        let raw = std::fs::read_to_string(&self.path).map_err(|source| EngineError::Ingest {
            path: self.path.clone(),
            source,
        })?;
        let records: Vec<RunRecord> =
            serde_json::from_str(&raw).map_err(|source| EngineError::Parse {
                path: self.path.clone(),
                source,
            })?;

        let cutoff = self.now - Duration::days(i64::from(lookback_days));
        let total = records.len();
        let windowed: Vec<RunRecord> = records
            .into_iter()
            .filter(|r| r.started_at >= cutoff)
            .collect();
        tracing::debug!(
            total,
            windowed = windowed.len(),
            lookback_days,
            "fetched run records"
        );
        Ok(windowed)
    }
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
