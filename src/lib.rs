//! Keygram - ranked key frequency reports from keycount logs
//!
//! This library reads the periodic dumps written by a keycount collector and
//! produces symbol, digraph and trigraph frequency tables ranked by count,
//! optionally annotated with percentage of total keypresses.

pub mod accumulator;
pub mod cli;
pub mod config;
pub mod csv_output;
pub mod error;
pub mod json_output;
pub mod pipeline;
pub mod record;
pub mod report;
