//! Message attribution
//!
//! Assigns every message in a source to the speaker who wrote it. Two
//! source shapes are supported: free-text chat exports read line by line
//! ([`sequential`]) and unlabeled tables whose column roles are inferred
//! from their contents ([`tabular`]).

pub mod sequential;
pub mod tabular;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use sequential::{attribute_sequential, attribute_sequential_with, UnattributedPolicy};
pub use tabular::{attribute_tabular, infer_roles, ColumnRoles, Role, Table};

/// Speaker identifier as it appears in the source
pub type Speaker = String;

/// Pseudo-speaker used when a table has no recognisable name column
pub const IMPLICIT_SPEAKER: &str = "all";

/// Pseudo-speaker for lines seen before any speaker, under the lenient policy.
///
/// The parentheses keep it out of the speaker name character class, so no
/// real participant can collide with it.
pub const UNKNOWN_SPEAKER: &str = "(unknown)";

/// Layout of the input file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    /// WhatsApp-style export: one entry per line, continuations allowed
    #[default]
    WhatsApp,
    /// CSV with 1-3 columns whose roles are inferred
    Csv,
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceFormat::WhatsApp => write!(f, "whatsapp"),
            SourceFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Messages grouped by speaker.
///
/// Speakers keep first-seen order and each speaker's messages keep input
/// order. The group is append-only while parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageGroup {
    messages: IndexMap<Speaker, Vec<String>>,
}

impl MessageGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message to a speaker, registering the speaker if new
    pub fn push(&mut self, speaker: &str, message: String) {
        match self.messages.get_mut(speaker) {
            Some(list) => list.push(message),
            None => {
                self.messages.insert(speaker.to_string(), vec![message]);
            }
        }
    }

    pub fn get(&self, speaker: &str) -> Option<&[String]> {
        self.messages.get(speaker).map(|m| m.as_slice())
    }

    pub fn speakers(&self) -> impl Iterator<Item = &Speaker> {
        self.messages.keys()
    }

    /// Number of distinct speakers
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Total number of messages across all speakers
    pub fn message_count(&self) -> usize {
        self.messages.values().map(|m| m.len()).sum()
    }
}

impl IntoIterator for MessageGroup {
    type Item = (Speaker, Vec<String>);
    type IntoIter = indexmap::map::IntoIter<Speaker, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.into_iter()
    }
}
