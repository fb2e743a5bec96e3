//! Error types for keycount log processing

use thiserror::Error;

/// Why a single `name:count` token could not be read
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("missing ':' separator in token '{0}'")]
    MissingSeparator(String),

    #[error("invalid count '{count}' for symbol '{name}'")]
    InvalidCount { name: String, count: String },
}

/// Errors that abort a run
#[derive(Error, Debug)]
pub enum KeygramError {
    #[error("line {line_no}: {source} (in '{line}')")]
    BadRecord {
        line_no: usize,
        line: String,
        #[source]
        source: RecordError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for keygram operations
pub type Result<T> = std::result::Result<T, KeygramError>;
