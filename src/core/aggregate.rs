//! Per-speaker aggregation
//!
//! Applies word extraction to each speaker's messages independently.

use indexmap::IndexMap;
use tracing::info;

use super::tokenizer::{extract_words, IllegalChars, WordFrequencyTable};
use crate::attribution::{MessageGroup, Speaker};

/// One frequency table per speaker, in first-seen speaker order
pub type SpeakerTables = IndexMap<Speaker, WordFrequencyTable>;

/// Consume a message group and count each speaker's vocabulary
pub fn build_frequency_tables(group: MessageGroup, illegal_chars: &IllegalChars) -> SpeakerTables {
    info!("🗣️ Extracting words for {} speaker(s)", group.len());

    group
        .into_iter()
        .map(|(speaker, messages)| {
            let table = extract_words(&messages, illegal_chars);
            info!("   {} -> {} words extracted", speaker, table.len());
            (speaker, table)
        })
        .collect()
}
