use thiserror::Error;

/// Top-level error type for session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// A collision-block operation failed.
    #[error("engine error: {0}")]
    Core(#[from] hashquine_core::CoreError),

    /// A profile was malformed or inconsistent.
    #[error("profile error: {0}")]
    Format(#[from] hashquine_formats::FormatError),

    /// The file is shorter than the header region the profile pins.
    #[error("file too short for header: {len} bytes, profile pins {expected}")]
    HeaderTooShort { expected: usize, len: usize },

    /// The header bytes do not hash to the profile's pinned digest.
    #[error("header digest mismatch: expected {expected}, got {actual}")]
    HeaderMismatch { expected: String, actual: String },

    /// The whole file does not hash to the profile's pinned digest.
    #[error("whole-file digest mismatch: expected {expected}, got {actual}")]
    FullDigestMismatch { expected: String, actual: String },
}

/// Convenience alias for session results.
pub type Result<T> = std::result::Result<T, SessionError>;
