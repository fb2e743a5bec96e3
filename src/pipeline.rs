//! Single-pass pipeline: accumulate the whole stream, then report

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::accumulator::{Accumulator, Tables};
use crate::cli::OutputFormat;
use crate::config::Settings;
use crate::csv_output::CsvOutput;
use crate::json_output::JsonReport;
use crate::report::Report;

/// Read every line of `reader` into fresh tables
pub fn accumulate<R: BufRead>(reader: R, settings: &Settings) -> Result<Tables> {
    let mut acc = Accumulator::with_policy(settings.policy);
    acc.consume(reader).context("Failed to read keycount log")?;

    let stats = acc.stats();
    if stats.malformed > 0 || stats.rejected > 0 {
        tracing::warn!(
            malformed = stats.malformed,
            rejected = stats.rejected,
            "some lines were ignored"
        );
    }

    Ok(acc.finish())
}

/// Render `tables` in the configured format
pub fn render<W: Write>(tables: &Tables, settings: &Settings, out: &mut W) -> Result<()> {
    let report = Report::build(tables, &settings.report);

    match settings.format {
        OutputFormat::Text => report.write_text(out)?,
        OutputFormat::Json => writeln!(out, "{}", JsonReport::new(&report).to_json()?)?,
        OutputFormat::Csv => write!(out, "{}", CsvOutput::new(&report).to_csv())?,
    }

    out.flush()?;
    Ok(())
}

/// Accumulate then render
pub fn run<R: BufRead, W: Write>(reader: R, settings: &Settings, out: &mut W) -> Result<()> {
    let tables = accumulate(reader, settings)?;
    render(&tables, settings, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accumulator::BadRecordPolicy;
    use crate::report::ReportOptions;

    fn settings(format: OutputFormat, include_percentage: bool) -> Settings {
        Settings {
            report: ReportOptions {
                include_percentage,
                ..ReportOptions::default()
            },
            format,
            policy: BadRecordPolicy::Abort,
        }
    }

    fn run_to_string(input: &str, settings: &Settings) -> Result<String> {
        let mut out = Vec::new();
        run(input.as_bytes(), settings, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_run_plain_text() {
        let out = run_to_string(
            "A:10\nA B:4\nA B C:2\nB:6\n",
            &settings(OutputFormat::Text, false),
        )
        .unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[1], "10 A");
        assert_eq!(lines[2], "6 B");
    }

    #[test]
    fn test_run_json() {
        let out = run_to_string("A:1\n", &settings(OutputFormat::Json, true)).unwrap();
        assert!(out.contains("\"total\": 1"));
    }

    #[test]
    fn test_run_csv() {
        let out = run_to_string("A:1\n", &settings(OutputFormat::Csv, false)).unwrap();
        assert_eq!(out, "section,key,count\nsymbol,A,1\n");
    }

    #[test]
    fn test_run_bad_count_fails_with_context() {
        let err = run_to_string("A:zz\n", &settings(OutputFormat::Text, false)).unwrap_err();
        let msg = format!("{:#}", err);
        assert!(msg.contains("Failed to read keycount log"));
        assert!(msg.contains("line 1"));
    }

    #[test]
    fn test_run_emits_nothing_on_failure() {
        let mut out = Vec::new();
        let result = run(
            "A:1\nB:bad\n".as_bytes(),
            &settings(OutputFormat::Text, false),
            &mut out,
        );
        assert!(result.is_err());
        assert!(out.is_empty());
    }
}
