//! CLI argument parsing for keygram

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::accumulator::BadRecordPolicy;

/// Output format for the frequency report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Banner-delimited text report (default)
    #[default]
    Text,
    /// JSON format for machine parsing
    Json,
    /// CSV format for spreadsheet analysis
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "keygram")]
#[command(version)]
#[command(
    about = "Ranked symbol, digraph and trigraph frequencies from keycount logs",
    long_about = None
)]
pub struct Cli {
    /// Keycount log to read (stdin when omitted or "-")
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Annotate rows with percentage of total keypresses
    #[arg(short = 'p', long = "percent", conflicts_with = "plain")]
    pub percent: bool,

    /// Plain rows even if the config file asks for percentages
    #[arg(long = "plain")]
    pub plain: bool,

    /// Output format (overrides config file)
    #[arg(long = "format", value_enum)]
    pub format: Option<OutputFormat>,

    /// What to do with lines whose count cannot be parsed
    #[arg(long = "on-bad-record", value_enum, value_name = "POLICY")]
    pub on_bad_record: Option<BadRecordPolicy>,

    /// Unit printed on the total line
    #[arg(long = "unit", value_name = "LABEL")]
    pub unit: Option<String>,

    /// Show only the N most frequent entries of each section
    #[arg(long = "top", value_name = "N")]
    pub top: Option<usize>,

    /// TOML config file with report defaults
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug tracing output (stderr)
    #[arg(long = "debug")]
    pub debug: bool,
}

impl Cli {
    /// Input path, `None` meaning stdin
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input.as_ref().filter(|p| p.as_os_str() != "-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["keygram"]);
        assert!(cli.input.is_none());
        assert!(!cli.percent);
        assert!(!cli.plain);
        assert!(cli.format.is_none());
        assert!(cli.on_bad_record.is_none());
        assert!(cli.top.is_none());
        assert!(!cli.debug);
    }

    #[test]
    fn test_cli_input_path() {
        let cli = Cli::parse_from(["keygram", "keycount.log"]);
        assert_eq!(cli.input_path(), Some(&PathBuf::from("keycount.log")));
    }

    #[test]
    fn test_cli_dash_means_stdin() {
        let cli = Cli::parse_from(["keygram", "-"]);
        assert!(cli.input_path().is_none());
    }

    #[test]
    fn test_cli_percent_flag() {
        let cli = Cli::parse_from(["keygram", "-p"]);
        assert!(cli.percent);
        let cli = Cli::parse_from(["keygram", "--percent"]);
        assert!(cli.percent);
    }

    #[test]
    fn test_cli_percent_conflicts_with_plain() {
        let result = Cli::try_parse_from(["keygram", "--percent", "--plain"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_format_json() {
        let cli = Cli::parse_from(["keygram", "--format", "json"]);
        assert_eq!(cli.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_cli_format_invalid() {
        let result = Cli::try_parse_from(["keygram", "--format", "xml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_on_bad_record() {
        let cli = Cli::parse_from(["keygram", "--on-bad-record", "skip"]);
        assert_eq!(cli.on_bad_record, Some(BadRecordPolicy::Skip));
    }

    #[test]
    fn test_cli_top_and_unit() {
        let cli = Cli::parse_from(["keygram", "--top", "5", "--unit", "events"]);
        assert_eq!(cli.top, Some(5));
        assert_eq!(cli.unit.as_deref(), Some("events"));
    }

    #[test]
    fn test_cli_top_rejects_negative() {
        let result = Cli::try_parse_from(["keygram", "--top", "-1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_config_path() {
        let cli = Cli::parse_from(["keygram", "-c", "keygram.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("keygram.toml")));
    }
}
