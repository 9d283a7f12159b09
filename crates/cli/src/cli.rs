//! CLI argument parsing with clap derive.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::color::ColorMode;

/// Flags flaky tests from historical run records
#[derive(Debug, Parser)]
#[command(name = "flakewatch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", env = "FLAKEWATCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Run-history JSON file to analyze
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Lookback window in days
    #[arg(long, value_name = "DAYS")]
    pub lookback_days: Option<u32>,

    /// Minimum failure rate (0..=1) for a test to be reported
    #[arg(long, value_name = "RATE", allow_negative_numbers = true)]
    pub threshold: Option<f64>,

    /// Minimum observed runs for a test to be analyzed
    #[arg(long, value_name = "N")]
    pub min_runs: Option<usize>,

    /// Emit the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Emit the report as CSV (wins over --json when both are given)
    #[arg(long)]
    pub csv: bool,

    /// Skip updating the flagged-tests store
    #[arg(long)]
    pub no_update: bool,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Catches stray value tokens left behind by dropped unknown flags
    #[arg(hide = true, value_name = "IGNORED")]
    pub ignored: Vec<String>,
}

/// Flag names the parser recognizes, matched against the part of the
/// token before any `=`.
const KNOWN_FLAGS: &[&str] = &[
    "--config",
    "-C",
    "--input",
    "-i",
    "--lookback-days",
    "--threshold",
    "--min-runs",
    "--json",
    "--csv",
    "--no-update",
    "--color",
    "--verbose",
    "-v",
    "--help",
    "-h",
    "--version",
    "-V",
];

/// Drop unrecognized flags from argv before clap sees them.
///
/// Unrecognized flags are ignored rather than rejected; values of
/// recognized flags still go through normal clap validation. Tokens
/// that look like negative numbers are values, not flags.
pub fn filter_unknown_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .filter(|arg| {
            let Some(token) = arg.to_str() else {
                return true;
            };
            if !token.starts_with('-') || token == "-" || token == "--" {
                return true;
            }
            if token[1..].starts_with(|c: char| c.is_ascii_digit() || c == '.') {
                return true;
            }
            let name = token.split('=').next().unwrap_or(token);
            KNOWN_FLAGS.contains(&name)
        })
        .collect()
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
