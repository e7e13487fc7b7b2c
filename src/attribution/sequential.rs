//! WhatsApp export attribution
//!
//! Exports look like:
//!
//! ```text
//! 17/01/2018, 19:15 - Firstname 1: This is my first message
//! 17/01/2018, 19:21 - Firstname Surname 2: A reply that
//! carries on over a second line
//! ```
//!
//! Embedded newlines are not escaped, so a line that does not look like a
//! new entry belongs to whoever spoke last.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{MessageGroup, Speaker, UNKNOWN_SPEAKER};
use crate::error::{WcgError, WcgResult};

lazy_static! {
    /// Groups are (speaker, message)
    static ref NEW_ENTRY: Regex = Regex::new(
        r"^[0-9]{2}/[0-9]{2}/[0-9]{4}, [0-9]{2}:[0-9]{2} - ([A-Za-z0-9 -]{1,30}): (.+)$"
    )
    .expect("valid entry pattern");
}

/// What to do with lines that appear before any speaker
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnattributedPolicy {
    /// Fail the run
    #[default]
    Reject,
    /// Attribute them to the `unknown` pseudo-speaker
    Unknown,
}

/// Who the next continuation line belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
enum Cursor {
    NoSpeaker,
    Speaker(Speaker),
}

/// Split a line into (speaker, message) if it starts a new entry
pub fn parse_entry(line: &str) -> Option<(&str, &str)> {
    let caps = NEW_ENTRY.captures(line)?;
    let speaker = caps.get(1)?.as_str();
    let message = caps.get(2)?.as_str();
    Some((speaker, message))
}

/// Attribute export lines, rejecting input that starts with a continuation
pub fn attribute_sequential<S: AsRef<str>>(lines: &[S]) -> WcgResult<MessageGroup> {
    attribute_sequential_with(lines, UnattributedPolicy::Reject)
}

/// Attribute export lines with an explicit policy for leading orphan lines
pub fn attribute_sequential_with<S: AsRef<str>>(
    lines: &[S],
    policy: UnattributedPolicy,
) -> WcgResult<MessageGroup> {
    let (group, _) = lines.iter().enumerate().try_fold(
        (MessageGroup::new(), Cursor::NoSpeaker),
        |(mut group, cursor), (idx, line)| {
            let line = line.as_ref();

            let (speaker, message) = match (parse_entry(line), cursor) {
                (Some((speaker, message)), _) => (speaker.to_string(), message.to_string()),
                (None, Cursor::Speaker(current)) => {
                    debug!("Line {} continues {}'s message", idx + 1, current);
                    (current, line.to_string())
                }
                (None, Cursor::NoSpeaker) => match policy {
                    UnattributedPolicy::Reject => {
                        return Err(WcgError::UnattributableLine {
                            line_number: idx + 1,
                            line: line.to_string(),
                        });
                    }
                    UnattributedPolicy::Unknown => {
                        debug!("Line {} has no speaker yet, using '{}'", idx + 1, UNKNOWN_SPEAKER);
                        (UNKNOWN_SPEAKER.to_string(), line.to_string())
                    }
                },
            };

            group.push(&speaker, message);
            Ok((group, Cursor::Speaker(speaker)))
        },
    )?;

    Ok(group)
}
