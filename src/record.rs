//! Line classification for keycount logs
//!
//! Each non-comment line is classified by its whitespace token count:
//! - `A:10` is a unigram
//! - `*   B:4` is a digraph (only the second token is read)
//! - `*   *   C:2` is a trigraph (only the third token is read)
//!
//! A `#` anywhere on the line marks it as a comment, which also covers the
//! `####...` separators written between dumps.

use crate::error::RecordError;

/// Comment marker; any line containing it is skipped whole
pub const COMMENT_MARKER: char = '#';

/// Separator between a symbol name and its count
pub const COUNT_SEPARATOR: char = ':';

/// A classified input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record<'a> {
    /// Comment, empty or whitespace-only line
    Blank,
    Unigram { name: &'a str, count: u64 },
    Digraph { name: &'a str, count: u64 },
    Trigraph { name: &'a str, count: u64 },
    /// Wrong number of tokens
    Malformed { tokens: usize },
}

/// Split a `name:count` token into its parts
///
/// The split happens at the first separator. The count must be a base-10
/// non-negative integer; anything else is an error, never zero.
pub fn parse_symbol_count(token: &str) -> Result<(&str, u64), RecordError> {
    let (name, count) = token
        .split_once(COUNT_SEPARATOR)
        .ok_or_else(|| RecordError::MissingSeparator(token.to_string()))?;

    let count = count.parse::<u64>().map_err(|_| RecordError::InvalidCount {
        name: name.to_string(),
        count: count.to_string(),
    })?;

    Ok((name, count))
}

/// Classify one line of input
pub fn classify(line: &str) -> Result<Record<'_>, RecordError> {
    if line.contains(COMMENT_MARKER) {
        return Ok(Record::Blank);
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    let record = match tokens.as_slice() {
        [] => Record::Blank,
        [token] => {
            let (name, count) = parse_symbol_count(token)?;
            Record::Unigram { name, count }
        }
        [_, token] => {
            let (name, count) = parse_symbol_count(token)?;
            Record::Digraph { name, count }
        }
        [_, _, token] => {
            let (name, count) = parse_symbol_count(token)?;
            Record::Trigraph { name, count }
        }
        other => Record::Malformed {
            tokens: other.len(),
        },
    };

    Ok(record)
}
