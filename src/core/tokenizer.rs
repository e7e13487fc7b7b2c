//! Word Extraction
//!
//! Turns raw message text into a case-folded word frequency table.

use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Characters stripped from words unless configured otherwise
pub const DEFAULT_ILLEGAL_CHARS: &str = ".,!?;:";

lazy_static! {
    static ref ALPHANUMERIC: Regex = Regex::new("^[A-Z0-9]+$").expect("valid word pattern");
}

/// Normalized word -> occurrence count, in first-seen order.
///
/// Every key matches `^[A-Z0-9]+$` and every count is at least 1.
pub type WordFrequencyTable = IndexMap<String, u64>;

/// Set of characters deleted from each word before it is validated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct IllegalChars(Vec<char>);

impl IllegalChars {
    pub fn new(chars: &str) -> Self {
        let mut set: Vec<char> = Vec::new();
        for c in chars.chars() {
            if !set.contains(&c) {
                set.push(c);
            }
        }
        Self(set)
    }

    pub fn contains(&self, c: char) -> bool {
        self.0.contains(&c)
    }

    /// Remove every illegal character from `word`, joining what is left
    pub fn strip(&self, word: &str) -> String {
        word.chars().filter(|c| !self.contains(*c)).collect()
    }
}

impl Default for IllegalChars {
    fn default() -> Self {
        Self::new(DEFAULT_ILLEGAL_CHARS)
    }
}

impl From<&str> for IllegalChars {
    fn from(chars: &str) -> Self {
        Self::new(chars)
    }
}

impl From<String> for IllegalChars {
    fn from(chars: String) -> Self {
        Self::new(&chars)
    }
}

impl From<IllegalChars> for String {
    fn from(chars: IllegalChars) -> Self {
        chars.0.into_iter().collect()
    }
}

impl fmt::Display for IllegalChars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.0 {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// Normalize a single raw token, or `None` if it should not be counted
pub fn normalize_word(token: &str, illegal_chars: &IllegalChars) -> Option<String> {
    let word = illegal_chars.strip(&token.to_uppercase());
    if ALPHANUMERIC.is_match(&word) {
        Some(word)
    } else {
        None
    }
}

/// Build a word frequency table from a list of messages
pub fn extract_words<S: AsRef<str>>(
    messages: &[S],
    illegal_chars: &IllegalChars,
) -> WordFrequencyTable {
    let mut freq = WordFrequencyTable::new();

    for message in messages {
        for token in message.as_ref().split_whitespace() {
            if let Some(word) = normalize_word(token, illegal_chars) {
                *freq.entry(word).or_insert(0) += 1;
            }
        }
    }

    freq
}
