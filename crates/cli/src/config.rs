// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Analysis configuration.
//!
//! Resolution order: built-in defaults, then `flakewatch.toml` (or the
//! file named by `--config`), then CLI flags. The resolved config is
//! validated before any fetch runs; unknown config keys are errors.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::cli::Cli;
use crate::error::EngineError;

/// Config file looked up in the working directory when `--config` is
/// not given.
pub const CONFIG_FILE: &str = "flakewatch.toml";

/// Report output encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Console,
    Json,
    Csv,
}

/// Resolved, validated configuration for one analysis pass.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Time span of historical records considered, in days.
    pub lookback_days: u32,
    /// Minimum failure fraction (0..=1) for a test to be reported.
    pub failure_threshold: f64,
    /// Minimum observations for a test to be analyzed at all.
    pub min_runs: usize,
    pub output: OutputFormat,
    /// Whether to upsert flagged tests into the store after reporting.
    pub update_database: bool,
    /// Run-history JSON file consumed by the production source.
    pub input: PathBuf,
    /// Flagged-tests store written by the sink.
    pub flagged_path: PathBuf,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            lookback_days: 30,
            failure_threshold: 0.1,
            min_runs: 5,
            output: OutputFormat::Console,
            update_database: true,
            input: PathBuf::from("run-history.json"),
            flagged_path: PathBuf::from(".flakewatch/flagged.json"),
        }
    }
}

/// On-disk configuration file. Every key is optional; unknown keys are
/// rejected.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    lookback_days: Option<u32>,
    failure_threshold: Option<f64>,
    min_runs: Option<usize>,
    output: Option<OutputFormat>,
    update_database: Option<bool>,
    input: Option<PathBuf>,
    flagged_path: Option<PathBuf>,
}

impl AnalysisConfig {
    /// Resolve configuration from defaults, config file, and CLI flags,
    /// then validate.
    pub fn resolve(cli: &Cli) -> Result<Self, EngineError> {
        let mut config = Self::default();
        if let Some(file) = load_file(cli.config.as_deref())? {
            config.apply_file(file);
        }
        config.apply_cli(cli);
        config.validate()?;
        Ok(config)
    }

    fn apply_file(&mut self, file: FileConfig) {
        if let Some(days) = file.lookback_days {
            self.lookback_days = days;
        }
        if let Some(threshold) = file.failure_threshold {
            self.failure_threshold = threshold;
        }
        if let Some(min_runs) = file.min_runs {
            self.min_runs = min_runs;
        }
        if let Some(output) = file.output {
            self.output = output;
        }
        if let Some(update) = file.update_database {
            self.update_database = update;
        }
        if let Some(input) = file.input {
            self.input = input;
        }
        if let Some(flagged) = file.flagged_path {
            self.flagged_path = flagged;
        }
    }

    fn apply_cli(&mut self, cli: &Cli) {
        if let Some(days) = cli.lookback_days {
            self.lookback_days = days;
        }
        if let Some(threshold) = cli.threshold {
            self.failure_threshold = threshold;
        }
        if let Some(min_runs) = cli.min_runs {
            self.min_runs = min_runs;
        }
        // --csv wins when both format flags are given.
        if cli.csv {
            self.output = OutputFormat::Csv;
        } else if cli.json {
            self.output = OutputFormat::Json;
        }
        if cli.no_update {
            self.update_database = false;
        }
        if let Some(input) = &cli.input {
            self.input = input.clone();
        }
    }

    fn validate(&self) -> Result<(), EngineError> {
        if !(0.0..=1.0).contains(&self.failure_threshold) {
            return Err(EngineError::Config(format!(
                "failure_threshold must be within 0..=1, got {}",
                self.failure_threshold
            )));
        }
        if self.lookback_days == 0 {
            return Err(EngineError::Config(
                "lookback_days must be at least 1".to_string(),
            ));
        }
        if self.min_runs == 0 {
            return Err(EngineError::Config(
                "min_runs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn load_file(explicit: Option<&Path>) -> Result<Option<FileConfig>, EngineError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let default = Path::new(CONFIG_FILE);
            if !default.exists() {
                return Ok(None);
            }
            default.to_path_buf()
        }
    };

    let raw = std::fs::read_to_string(&path)
        .map_err(|e| EngineError::Config(format!("cannot read {}: {e}", path.display())))?;
    let parsed = toml::from_str(&raw)
        .map_err(|e| EngineError::Config(format!("cannot parse {}: {e}", path.display())))?;
    Ok(Some(parsed))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
