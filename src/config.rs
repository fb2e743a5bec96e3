//! Report configuration
//!
//! Settings come from three layers, highest priority first: command-line
//! flags, an optional TOML file, built-in defaults.
//!
//! # Example keygram.toml
//!
//! ```toml
//! percentages = true
//! format = "text"
//! on_bad_record = "skip"
//! unit_label = "keypresses"
//! top = 20
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::accumulator::BadRecordPolicy;
use crate::cli::{Cli, OutputFormat};
use crate::report::ReportOptions;

/// Contents of a keygram.toml file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub percentages: Option<bool>,
    pub format: Option<OutputFormat>,
    pub on_bad_record: Option<BadRecordPolicy>,
    pub unit_label: Option<String>,
    pub top: Option<usize>,
}

impl FileConfig {
    /// Load config from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Load config from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML")
    }
}

/// Effective settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub report: ReportOptions,
    pub format: OutputFormat,
    pub policy: BadRecordPolicy,
}

impl Settings {
    /// Merge CLI flags over the file config over defaults
    pub fn resolve(cli: &Cli, file: &FileConfig) -> Self {
        let defaults = ReportOptions::default();

        let include_percentage = if cli.percent {
            true
        } else if cli.plain {
            false
        } else {
            file.percentages.unwrap_or(defaults.include_percentage)
        };

        let unit_label = cli
            .unit
            .clone()
            .or_else(|| file.unit_label.clone())
            .unwrap_or(defaults.unit_label);

        Self {
            report: ReportOptions {
                include_percentage,
                unit_label,
                top: cli.top.or(file.top),
            },
            format: cli.format.or(file.format).unwrap_or_default(),
            policy: cli.on_bad_record.or(file.on_bad_record).unwrap_or_default(),
        }
    }

    /// Load the config file named on the command line, if any, and resolve
    pub fn load(cli: &Cli) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => FileConfig::from_file(path)?,
            None => FileConfig::default(),
        };
        tracing::debug!(?file, "config loaded");
        Ok(Self::resolve(cli, &file))
    }
}
