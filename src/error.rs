//! WordCloud Generator Error Types
//!
//! Every parsing failure aborts the run, so each variant carries enough
//! context to explain itself without a backtrace.

use thiserror::Error;

/// Central error type for the generator
#[derive(Error, Debug)]
pub enum WcgError {
    #[error("Structural input error: {0}")]
    StructuralInput(String),

    #[error("Line {line_number} does not start a new entry and no speaker has been seen yet: '{line}'")]
    UnattributableLine { line_number: usize, line: String },

    #[error("Could not identify a {role} column")]
    RoleInference { role: &'static str },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to render word cloud for {speaker}: {reason}")]
    Render { speaker: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for generator operations
pub type WcgResult<T> = Result<T, WcgError>;
