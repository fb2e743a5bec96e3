//! JSON output format for frequency reports

use serde::Serialize;

use crate::report::{RankedSection, Report};

/// Serializable view of a [`Report`]
#[derive(Debug, Clone, Serialize)]
pub struct JsonReport<'a> {
    pub version: &'static str,
    pub format: &'static str,
    /// Sum of all symbol counts
    pub total: u64,
    pub unit: &'a str,
    pub sections: &'a [RankedSection],
}

impl<'a> JsonReport<'a> {
    pub fn new(report: &'a Report) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            format: "keygram-json-v1",
            total: report.grand_total,
            unit: &report.options.unit_label,
            sections: &report.sections,
        }
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
