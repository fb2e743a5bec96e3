//! Running symbol, digraph and trigraph tallies
//!
//! Digraph and trigraph keys are built from trailing context: the most recent
//! unigram key and the most recent digraph key. Lines must therefore be fed in
//! arrival order.

use std::collections::HashMap;
use std::io::BufRead;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{KeygramError, Result};
use crate::record::{classify, Record};

/// Separator joining the components of digraph and trigraph keys
pub const KEY_SEPARATOR: char = '-';

/// Key component used when a digraph or trigraph arrives before its context
pub const UNDEFINED_CONTEXT: &str = "undefined";

/// Map from key to accumulated count
pub type FrequencyTable = HashMap<String, u64>;

/// What to do with a line whose `name:count` token cannot be read
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadRecordPolicy {
    /// Fail the run (default)
    #[default]
    Abort,
    /// Warn and skip the line
    Skip,
}

/// The three final frequency tables
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tables {
    pub symbols: FrequencyTable,
    pub digraphs: FrequencyTable,
    pub trigraphs: FrequencyTable,
}

impl Tables {
    /// Sum of all symbol counts
    pub fn grand_total(&self) -> u64 {
        self.symbols
            .values()
            .fold(0u64, |acc, &count| acc.saturating_add(count))
    }
}

/// Per-run line counters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccumulatorStats {
    pub lines: usize,
    pub blank: usize,
    pub unigrams: usize,
    pub digraphs: usize,
    pub trigraphs: usize,
    pub malformed: usize,
    pub rejected: usize,
}

/// Line classifier plus running totals
#[derive(Debug, Default)]
pub struct Accumulator {
    tables: Tables,
    current_symbol: Option<String>,
    current_digraph: Option<String>,
    policy: BadRecordPolicy,
    stats: AccumulatorStats,
}

fn join_key(context: Option<&str>, name: &str) -> String {
    let context = context.unwrap_or(UNDEFINED_CONTEXT);
    let mut key = String::with_capacity(context.len() + 1 + name.len());
    key.push_str(context);
    key.push(KEY_SEPARATOR);
    key.push_str(name);
    key
}

fn add_count(table: &mut FrequencyTable, key: &str, count: u64) {
    if let Some(total) = table.get_mut(key) {
        *total = total.saturating_add(count);
    } else {
        table.insert(key.to_string(), count);
    }
}

impl Accumulator {
    /// Create an accumulator that aborts on unreadable counts
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an accumulator with an explicit bad-record policy
    pub fn with_policy(policy: BadRecordPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Process one line. `line_no` is 1-based and only used for reporting.
    pub fn feed_line(&mut self, line_no: usize, line: &str) -> Result<()> {
        self.stats.lines += 1;

        let record = match classify(line) {
            Ok(record) => record,
            Err(source) => match self.policy {
                BadRecordPolicy::Abort => {
                    return Err(KeygramError::BadRecord {
                        line_no,
                        line: line.to_string(),
                        source,
                    });
                }
                BadRecordPolicy::Skip => {
                    tracing::warn!(line_no, "skipping bad record: {}: {}", source, line);
                    self.stats.rejected += 1;
                    return Ok(());
                }
            },
        };

        match record {
            Record::Blank => self.stats.blank += 1,
            Record::Unigram { name, count } => {
                add_count(&mut self.tables.symbols, name, count);
                self.current_symbol = Some(name.to_string());
                self.stats.unigrams += 1;
            }
            Record::Digraph { name, count } => {
                let key = join_key(self.current_symbol.as_deref(), name);
                add_count(&mut self.tables.digraphs, &key, count);
                self.current_digraph = Some(key);
                self.stats.digraphs += 1;
            }
            Record::Trigraph { name, count } => {
                let key = join_key(self.current_digraph.as_deref(), name);
                add_count(&mut self.tables.trigraphs, &key, count);
                self.stats.trigraphs += 1;
            }
            Record::Malformed { tokens } => {
                tracing::warn!(line_no, tokens, "malformed record: {}", line);
                self.stats.malformed += 1;
            }
        }

        Ok(())
    }

    /// Process a whole line-oriented stream in order
    pub fn consume<R: BufRead>(&mut self, reader: R) -> Result<()> {
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            self.feed_line(idx + 1, &line)?;
        }
        tracing::debug!(stats = ?self.stats, "input exhausted");
        Ok(())
    }

    /// Tables accumulated so far
    pub fn tables(&self) -> &Tables {
        &self.tables
    }

    /// Sum of all symbol counts seen so far
    pub fn grand_total(&self) -> u64 {
        self.tables.grand_total()
    }

    /// Last unigram key seen
    pub fn current_symbol(&self) -> Option<&str> {
        self.current_symbol.as_deref()
    }

    /// Last digraph key seen
    pub fn current_digraph(&self) -> Option<&str> {
        self.current_digraph.as_deref()
    }

    pub fn stats(&self) -> &AccumulatorStats {
        &self.stats
    }

    /// Consume the accumulator and hand back the final tables
    pub fn finish(self) -> Tables {
        self.tables
    }
}
