//! The fixed SHA-1 collision flip from the Shattered prefix.
//!
//! Unlike the MD5 families this is a single known instance, not a
//! construction: one published 320-byte prefix whose blocks 3 and 4 admit
//! exactly one XOR mask. The mask is an involution, so flipping twice is
//! the identity and no direction probing is needed.

use crate::block::BLOCK_SIZE;
use crate::digest::CollisionDigest;
use crate::error::CoreError;

/// XOR mask between the two colliding message blocks.
///
/// The same mask applies to both blocks of the instance.
pub const SHATTERED_MASK: [u8; BLOCK_SIZE] = [
    0x0c, 0x00, 0x00, 0x02, 0xc0, 0x00, 0x00, 0x10, 0xb4, 0x00, 0x00, 0x1c, 0x3c, 0x00, 0x00, 0x04,
    0xbc, 0x00, 0x00, 0x1a, 0x20, 0x00, 0x00, 0x10, 0x24, 0x00, 0x00, 0x1c, 0xec, 0x00, 0x00, 0x14,
    0x0c, 0x00, 0x00, 0x02, 0xc0, 0x00, 0x00, 0x10, 0xb4, 0x00, 0x00, 0x1c, 0x2c, 0x00, 0x00, 0x04,
    0xbc, 0x00, 0x00, 0x18, 0xb0, 0x00, 0x00, 0x10, 0x00, 0x00, 0x00, 0x0c, 0xb8, 0x00, 0x00, 0x10,
];

/// Block indexes the mask applies to.
pub const SHATTERED_BLOCKS: [usize; 2] = [3, 4];

/// Length of the fixed prefix shared by both sides, through the last
/// colliding block.
pub const SHATTERED_HEADER_LEN: usize =
    (SHATTERED_BLOCKS[0] + SHATTERED_BLOCKS.len()) * BLOCK_SIZE;

/// SHA-1 of the fixed prefix, the gate for "is this a Shattered file".
pub const SHATTERED_HEADER_SHA1: &str = "f92d74e3874587aaf443d1db961d4e26dde13e9c";

/// Flip the Shattered instance to its other side.
///
/// Verifies that the whole-buffer digest is unchanged; on failure the
/// mask is removed again and the buffer is byte-identical to the input.
pub fn flip<D: CollisionDigest>(data: &mut [u8]) -> Result<(), CoreError> {
    let last = SHATTERED_BLOCKS[SHATTERED_BLOCKS.len() - 1];
    if SHATTERED_HEADER_LEN > data.len() {
        return Err(CoreError::OutOfBounds {
            index: last,
            len: data.len(),
        });
    }

    let reference = D::digest(data);
    apply_mask(data);
    if D::digest(data) != reference {
        apply_mask(data);
        return Err(CoreError::MaskNotPreserved { algo: D::ALGO });
    }
    Ok(())
}

fn apply_mask(data: &mut [u8]) {
    for index in SHATTERED_BLOCKS {
        let offset = index * BLOCK_SIZE;
        for (i, mask) in SHATTERED_MASK.iter().enumerate() {
            data[offset + i] ^= mask;
        }
    }
}
