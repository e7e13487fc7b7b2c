//! WordCloud Generator Library
//!
//! Attributes chat messages to speakers and counts each speaker's words
//! for word cloud rendering.

pub mod attribution;
pub mod config;
pub mod core;
pub mod error;
pub mod generator;
pub mod render;
pub mod source;

pub use attribution::{MessageGroup, SourceFormat, Speaker};
pub use config::Config;
pub use error::{WcgError, WcgResult};
pub use generator::{Generator, RunSummary};
