// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report rendering for analysis results.
//!
//! Formatters never reorder results: row order is the analyzer's.

mod csv;
mod json;
mod text;

pub use self::csv::CsvFormatter;
pub use self::json::JsonFormatter;
pub use self::text::TextFormatter;

use crate::analysis::TestAnalysis;
use crate::color::ColorMode;
use crate::config::OutputFormat;

/// Trait for formatting analysis results into an output encoding.
pub trait ReportFormatter {
    fn format(&self, results: &[TestAnalysis]) -> anyhow::Result<String>;
}

/// Format a report in the chosen output format.
pub fn format_report(
    format: OutputFormat,
    color: ColorMode,
    results: &[TestAnalysis],
) -> anyhow::Result<String> {
    let formatter: Box<dyn ReportFormatter> = match format {
        OutputFormat::Console => Box::new(TextFormatter::new(color)),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Csv => Box::new(CsvFormatter),
    };
    formatter.format(results)
}
