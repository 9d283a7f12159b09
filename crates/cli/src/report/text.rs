// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Console format report output.

use std::io::Write;

use chrono::SecondsFormat;
use termcolor::{Buffer, Color, ColorChoice, ColorSpec, WriteColor};

use crate::analysis::{Severity, TestAnalysis};
use crate::color::ColorMode;

use super::ReportFormatter;

/// Human-readable console formatter with colored severity markers.
pub struct TextFormatter {
    color: ColorMode,
}

impl TextFormatter {
    pub fn new(color: ColorMode) -> Self {
        Self { color }
    }

    fn buffer(&self) -> Buffer {
        match self.color.to_choice() {
            ColorChoice::Never => Buffer::no_color(),
            _ => Buffer::ansi(),
        }
    }
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Critical | Severity::High => Color::Red,
        Severity::Medium => Color::Yellow,
        Severity::Low => Color::Green,
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, results: &[TestAnalysis]) -> anyhow::Result<String> {
        let mut buf = self.buffer();

        if results.is_empty() {
            writeln!(buf, "No flaky tests detected.")?;
            return Ok(String::from_utf8(buf.into_inner())?);
        }

        writeln!(buf, "Flaky tests ({})", results.len())?;
        writeln!(buf)?;

        for analysis in results {
            let mut marker = ColorSpec::new();
            marker
                .set_bold(true)
                .set_fg(Some(severity_color(analysis.severity)));
            buf.set_color(&marker)?;
            write!(buf, "[{}]", analysis.severity.label().to_uppercase())?;
            buf.reset()?;
            writeln!(buf, " {} ({})", analysis.test_name, analysis.test_id)?;

            writeln!(
                buf,
                "  failure rate: {:.2}% ({}/{} runs)",
                analysis.failure_rate, analysis.failed_runs, analysis.total_runs
            )?;
            writeln!(buf, "  pattern:      {}", analysis.failure_pattern)?;
            if let Some(at) = analysis.last_failure_at {
                writeln!(
                    buf,
                    "  last failure: {}",
                    at.to_rfc3339_opts(SecondsFormat::Secs, true)
                )?;
            }
            writeln!(buf, "  action:       {}", analysis.recommended_action)?;
            writeln!(buf)?;
        }

        Ok(String::from_utf8(buf.into_inner())?)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
