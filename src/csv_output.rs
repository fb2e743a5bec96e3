//! CSV output format for frequency reports

use crate::report::Report;

/// CSV formatter over a ranked report
#[derive(Debug)]
pub struct CsvOutput<'a> {
    report: &'a Report,
}

impl<'a> CsvOutput<'a> {
    pub fn new(report: &'a Report) -> Self {
        Self { report }
    }

    /// Header row; adds a percentage column in annotated mode
    fn header(&self) -> &'static str {
        if self.report.options.include_percentage {
            "section,key,count,percentage"
        } else {
            "section,key,count"
        }
    }

    /// Escape CSV field (handle commas, quotes, newlines)
    fn escape_field(field: &str) -> String {
        if field.contains(',') || field.contains('"') || field.contains('\n') {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    /// Generate CSV output as string
    pub fn to_csv(&self) -> String {
        let mut output = String::new();
        output.push_str(self.header());
        output.push('\n');

        for section in &self.report.sections {
            for entry in &section.entries {
                output.push_str(section.kind.name());
                output.push(',');
                output.push_str(&Self::escape_field(&entry.key));
                output.push(',');
                output.push_str(&entry.count.to_string());

                if self.report.options.include_percentage {
                    output.push(',');
                    if let Some(pct) = entry.percentage {
                        output.push_str(&format!("{:.3}", pct));
                    }
                }

                output.push('\n');
            }
        }

        output
    }
}
