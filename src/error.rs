//! Error types for the scoring engine
//!
//! Scoring itself is total over text. Errors only surface at the boundaries
//! where raw bytes or JSON values become text, and in the batch/config glue.

use std::fmt;
use thiserror::Error;

/// Which side of a scoring pair an input belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputRole {
    Candidate,
    Reference,
}

impl fmt::Display for InputRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputRole::Candidate => write!(f, "candidate"),
            InputRole::Reference => write!(f, "reference"),
        }
    }
}

/// Errors that can occur around a scoring call
#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("Invalid {role} input: {reason}")]
    InvalidInput { role: InputRole, reason: String },

    #[error("Batch length mismatch: {candidates} candidates, {references} references")]
    LengthMismatch {
        candidates: usize,
        references: usize,
    },

    #[error("Cannot aggregate an empty batch")]
    EmptyBatch,

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScoreError {
    pub(crate) fn invalid(role: InputRole, reason: impl Into<String>) -> Self {
        ScoreError::InvalidInput {
            role,
            reason: reason.into(),
        }
    }
}

/// Result type for scoring operations
pub type Result<T> = std::result::Result<T, ScoreError>;
