//! The two MD5 collision families and their byte-level transforms.
//!
//! A transform rewrites a 128-byte instance from one side to the other
//! without changing the MD5 of any buffer that starts with the same
//! prefix. FastColl toggles four high bits and moves a +/-0x8000 pair of
//! word deltas; UniColl moves a single +/-0x100 carry in each block.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::block::add_dword;

/// Instance-relative offsets whose top bit a FastColl transform toggles.
const FAST_BIT_OFFSETS: [usize; 4] = [0x13, 0x3b, 0x53, 0x7b];

/// Which collision construction produced an instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    /// Two-block fastcoll instances (Wang-style differentials).
    Fast,
    /// UniColl instances with a single carry difference per block.
    Uni,
}

impl Family {
    /// Instance-relative offsets of the bytes that differ between sides.
    ///
    /// These are the bytes a by-size policy is allowed to compare.
    pub const fn diff_offsets(self) -> &'static [usize] {
        match self {
            Family::Fast => &[0x13, 0x2d, 0x3b, 0x53, 0x6d, 0x7b],
            Family::Uni => &[0x09, 0x49],
        }
    }

    /// Apply the transform in `direction` to the instance at byte `offset`.
    ///
    /// The caller has already bounds-checked the 128-byte span.
    pub(crate) fn apply(self, data: &mut [u8], offset: usize, direction: Direction) {
        match self {
            Family::Fast => {
                for rel in FAST_BIT_OFFSETS {
                    data[offset + rel] ^= 0x80;
                }
                let delta = match direction {
                    Direction::Forward => 0x8000u32,
                    Direction::Backward => 0x8000u32.wrapping_neg(),
                };
                add_dword(data, offset + 0x2c, delta);
                add_dword(data, offset + 0x6c, delta.wrapping_neg());
            }
            Family::Uni => {
                let delta = match direction {
                    Direction::Forward => 0x100u32,
                    Direction::Backward => 0x100u32.wrapping_neg(),
                };
                add_dword(data, offset + 0x08, delta);
                add_dword(data, offset + 0x48, delta.wrapping_neg());
            }
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::Fast => write!(f, "fastcoll"),
            Family::Uni => write!(f, "unicoll"),
        }
    }
}

/// Direction of a transform between the two sides.
///
/// Forward takes side B to side A; backward is its inverse. The bit
/// toggles self-invert but the word deltas do not, so undoing a transform
/// always means applying the opposite direction, never the same one twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub(crate) const fn opposite(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}
