//! Core processing modules
//!
//! Word extraction and per-speaker aggregation. Attribution lives in
//! [`crate::attribution`]; this module only ever sees message text.

pub mod aggregate;
pub mod tokenizer;

pub use aggregate::{build_frequency_tables, SpeakerTables};
pub use tokenizer::{extract_words, IllegalChars, WordFrequencyTable, DEFAULT_ILLEGAL_CHARS};
