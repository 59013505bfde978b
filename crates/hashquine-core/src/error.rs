//! Error types for the collision engine.

use thiserror::Error;

use crate::family::Family;

/// Errors from primitive and encoding operations.
///
/// Out-of-range indexes and malformed inputs abort before any mutation;
/// a digest that fails to survive both transform directions is a fatal
/// integrity failure and the buffer is restored before returning.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("block {index} spans past the end of the buffer ({len} bytes)")]
    OutOfBounds { index: usize, len: usize },

    #[error("neither {family} transform preserves the {algo} digest at block {index}")]
    DigestNotPreserved {
        algo: &'static str,
        family: Family,
        index: usize,
    },

    #[error("offset {offset:#x} is not a differing byte for {family} instances")]
    UnknownDiffOffset { family: Family, offset: usize },

    #[error("position list entries {first} and {second} overlap")]
    OverlappingPositions { first: usize, second: usize },

    #[error("encoding needs {expected} symbols, got {actual}")]
    CapacityMismatch { expected: usize, actual: usize },

    #[error("{positions} positions do not divide into groups of {group}")]
    GroupMismatch { positions: usize, group: usize },

    #[error("symbol {symbol} out of range for a group of {group}")]
    SymbolOutOfRange { symbol: usize, group: usize },

    #[error("group {group} holds {matches} selected instances, expected exactly one")]
    AmbiguousGroup { group: usize, matches: usize },

    #[error("not a hex value: {value:?}")]
    InvalidHex { value: String },

    #[error("masked flip does not preserve the {algo} digest")]
    MaskNotPreserved { algo: &'static str },
}
