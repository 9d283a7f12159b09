// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Analyze command implementation: one full batch pass.
//!
//! Fetch, analyze, report, then best-effort persistence. Exit-code
//! policy lives in `main`, not here.

use std::io::Write;

use crate::analysis::{Severity, analyze};
use crate::cli::Cli;
use crate::config::AnalysisConfig;
use crate::report::format_report;
use crate::sink::{JsonFileSink, persist_best_effort};
use crate::source::{JsonFileSource, RunRecordSource};

/// Outcome of one analysis pass, consumed by the exit-code decision in
/// `main`.
pub struct PassSummary {
    pub flagged: usize,
    pub critical: usize,
}

/// Run the full pass: resolve config, fetch, analyze, report, persist.
pub fn run(cli: &Cli) -> anyhow::Result<PassSummary> {
    let config = AnalysisConfig::resolve(cli)?;
    tracing::debug!(?config, "resolved configuration");

    let source = JsonFileSource::new(config.input.clone());
    let records = source.fetch(config.lookback_days)?;
    let results = analyze(records, &config);

    let report = format_report(config.output, cli.color, &results)?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(report.as_bytes())?;
    if !report.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }

    // The report above is already out; a store failure must not undo
    // the pass.
    if config.update_database {
        let sink = JsonFileSink::new(config.flagged_path.clone());
        persist_best_effort(&sink, &results);
    }

    let critical = results
        .iter()
        .filter(|r| r.severity == Severity::Critical)
        .count();
    tracing::info!(flagged = results.len(), critical, "analysis pass complete");
    Ok(PassSummary {
        flagged: results.len(),
        critical,
    })
}
