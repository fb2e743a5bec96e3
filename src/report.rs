//! Ranked frequency report
//!
//! One renderer covers both output variants: plain (`<count> <key>`) and
//! annotated (`<pct>% <count> <key>`), selected by [`ReportOptions`].
//! Every percentage uses the symbol grand total as denominator, including
//! the digraph and trigraph sections.

use std::cmp::Reverse;
use std::io::Write;

use serde::Serialize;

use crate::accumulator::{FrequencyTable, Tables};

/// Default unit printed after the grand total
pub const DEFAULT_UNIT_LABEL: &str = "keypresses";

/// Which table a section was built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Symbol,
    Digraph,
    Trigraph,
}

impl SectionKind {
    /// Banner line printed above the section
    pub fn banner(self) -> &'static str {
        match self {
            SectionKind::Symbol => "------- Symbol frequency -------",
            SectionKind::Digraph => "------- digraph frequency -------",
            SectionKind::Trigraph => "------- trigraph frequency -------",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SectionKind::Symbol => "symbol",
            SectionKind::Digraph => "digraph",
            SectionKind::Trigraph => "trigraph",
        }
    }
}

/// Rendering options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// Annotate rows with percentage of the grand total
    pub include_percentage: bool,
    /// Unit printed on the `total:` line
    pub unit_label: String,
    /// Keep only the first N entries of each section
    pub top: Option<usize>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            include_percentage: false,
            unit_label: DEFAULT_UNIT_LABEL.to_string(),
            top: None,
        }
    }
}

/// One ranked row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    pub key: String,
    pub count: u64,
    /// `None` in plain mode, or when the grand total is zero
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
}

/// One ranked table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedSection {
    #[serde(rename = "name")]
    pub kind: SectionKind,
    pub entries: Vec<RankedEntry>,
}

/// Fully ranked report, ready for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub grand_total: u64,
    pub sections: Vec<RankedSection>,
    pub options: ReportOptions,
}

/// Percentage of `total`, `None` when `total` is zero
pub fn percentage(count: u64, total: u64) -> Option<f64> {
    if total == 0 {
        None
    } else {
        Some(100.0 * count as f64 / total as f64)
    }
}

/// Sort a table by count descending, ties by key descending
pub fn rank(table: &FrequencyTable) -> Vec<(&str, u64)> {
    let mut ranked: Vec<(&str, u64)> = table.iter().map(|(k, &v)| (k.as_str(), v)).collect();
    ranked.sort_unstable_by_key(|&(key, count)| Reverse((count, key)));
    ranked
}

impl Report {
    /// Rank all three tables. Does not modify `tables`.
    pub fn build(tables: &Tables, options: &ReportOptions) -> Self {
        let grand_total = tables.grand_total();

        let section = |kind: SectionKind, table: &FrequencyTable| {
            let limit = options.top.unwrap_or(usize::MAX);
            let entries = rank(table)
                .into_iter()
                .take(limit)
                .map(|(key, count)| RankedEntry {
                    key: key.to_string(),
                    count,
                    percentage: if options.include_percentage {
                        percentage(count, grand_total)
                    } else {
                        None
                    },
                })
                .collect();
            RankedSection { kind, entries }
        };

        let sections = vec![
            section(SectionKind::Symbol, &tables.symbols),
            section(SectionKind::Digraph, &tables.digraphs),
            section(SectionKind::Trigraph, &tables.trigraphs),
        ];

        tracing::debug!(
            grand_total,
            symbols = tables.symbols.len(),
            digraphs = tables.digraphs.len(),
            trigraphs = tables.trigraphs.len(),
            "report built"
        );

        Self {
            grand_total,
            sections,
            options: options.clone(),
        }
    }

    fn format_row(&self, entry: &RankedEntry) -> String {
        if !self.options.include_percentage {
            return format!("{} {}", entry.count, entry.key);
        }
        match entry.percentage {
            Some(pct) => format!("{:.3}% {} {}", pct, entry.count, entry.key),
            None => format!("n/a {} {}", entry.count, entry.key),
        }
    }

    /// Write the text report
    pub fn write_text<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        for section in &self.sections {
            writeln!(out, "{}", section.kind.banner())?;

            if section.kind == SectionKind::Symbol && self.options.include_percentage {
                writeln!(
                    out,
                    "total: {} {}",
                    self.grand_total, self.options.unit_label
                )?;
                if self.grand_total == 0 {
                    writeln!(out, "no data: percentages unavailable")?;
                }
            }

            for entry in &section.entries {
                writeln!(out, "{}", self.format_row(entry))?;
            }
        }
        Ok(())
    }

    /// Render the text report into a string
    pub fn to_text(&self) -> String {
        let mut buf = Vec::new();
        // Writing to a Vec cannot fail
        let _ = self.write_text(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}
