//! Block geometry: sizes, sides, and validated position lists.
//!
//! Offsets in this crate are byte offsets; block indexes multiply by
//! [`BLOCK_SIZE`]. A collision instance always occupies two consecutive
//! blocks, so every bounds check works in terms of [`INSTANCE_SPAN`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreError;

/// Size of one hash compression block in bytes.
pub const BLOCK_SIZE: usize = 0x40;

/// Size of one collision instance: two consecutive blocks.
pub const INSTANCE_SPAN: usize = 2 * BLOCK_SIZE;

/// Which of the two colliding contents a collision instance currently holds.
///
/// Every instance has exactly two valid states with the same digest. The
/// names follow the fastcoll convention: side B is the state the collision
/// search emits first, side A is its sibling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    A,
    B,
}

impl Side {
    /// The other side of the pair.
    pub const fn opposite(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::A => write!(f, "A"),
            Side::B => write!(f, "B"),
        }
    }
}

/// An ordered list of block indexes, one collision instance per entry.
///
/// Entries are strictly increasing and at least two blocks apart, so the
/// 128-byte instances never overlap. Formats reserve these positions when
/// the file is built; the engine only ever walks them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct PositionList(Vec<usize>);

impl PositionList {
    /// Validate and wrap a list of block indexes.
    pub fn new(indexes: Vec<usize>) -> Result<Self, CoreError> {
        for pair in indexes.windows(2) {
            if pair[1] < pair[0] + 2 {
                return Err(CoreError::OverlappingPositions {
                    first: pair[0],
                    second: pair[1],
                });
            }
        }
        Ok(Self(indexes))
    }

    /// Number of positions.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the block indexes.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    /// The indexes as a slice.
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }
}

impl TryFrom<Vec<usize>> for PositionList {
    type Error = CoreError;

    fn try_from(indexes: Vec<usize>) -> Result<Self, Self::Error> {
        Self::new(indexes)
    }
}

impl From<PositionList> for Vec<usize> {
    fn from(list: PositionList) -> Self {
        list.0
    }
}

/// Read the little-endian u32 at `offset`.
pub(crate) fn read_dword(data: &[u8], offset: usize) -> u32 {
    let mut raw = [0u8; 4];
    raw.copy_from_slice(&data[offset..offset + 4]);
    u32::from_le_bytes(raw)
}

/// Write a little-endian u32 at `offset`.
pub(crate) fn write_dword(data: &mut [u8], offset: usize, value: u32) {
    data[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

/// Add `delta` to the little-endian u32 at `offset`, wrapping on overflow.
///
/// Transforms rely on the mod-2^32 wrap: a delta applied in one direction
/// and its negation in the other always round-trips.
pub(crate) fn add_dword(data: &mut [u8], offset: usize, delta: u32) {
    let value = read_dword(data, offset).wrapping_add(delta);
    write_dword(data, offset, value);
}
