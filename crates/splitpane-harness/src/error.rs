#![forbid(unsafe_code)]

use std::path::PathBuf;

use splitpane_layout::SplitLayoutError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, HarnessError>;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("layout error: {0}")]
    Layout(#[from] SplitLayoutError),

    #[error("failed to read script {path}: {source}")]
    ReadScript {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("script has no steps")]
    EmptyScript,

    #[error("checksum mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: String, actual: String },

    #[error("{count} geometry invariant violation(s); first at step {first_index}: {message}")]
    InvariantViolations {
        count: usize,
        first_index: usize,
        message: String,
    },

    #[error("failed to install logger: {0}")]
    Logging(String),
}

impl HarnessError {
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Layout(_) => 2,
            Self::ChecksumMismatch { .. } => 3,
            Self::InvariantViolations { .. } => 4,
            _ => 1,
        }
    }
}
