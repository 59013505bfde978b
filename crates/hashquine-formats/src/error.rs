//! Error types for format profiles.

use thiserror::Error;

use hashquine_core::CoreError;

/// Errors from loading or validating a profile.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("unknown profile {0:?}")]
    UnknownProfile(String),

    #[error("profile {name:?}: {reason}")]
    InvalidProfile { name: String, reason: String },

    #[error("arithmetic position list overflows: start {start}, step {step}, count {count}")]
    PositionOverflow {
        start: usize,
        step: usize,
        count: usize,
    },

    #[error("malformed profile: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error(transparent)]
    Core(#[from] CoreError),
}
