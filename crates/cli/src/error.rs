// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Engine error taxonomy.
//!
//! Configuration and ingestion failures are fatal for one analysis
//! pass: no partial report is emitted. Persistence failures are not
//! represented here because they are recovered locally in the sink
//! (logged and swallowed).

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// Invalid configuration, detected before any fetch happens.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Run-history input could not be read.
    #[error("failed to read run history from {}", path.display())]
    Ingest {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Run-history input could not be parsed.
    #[error("failed to parse run history from {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
