//! Collision-aware digest doubles.
//!
//! Real FastColl and UniColl block pairs cannot be synthesized in a
//! test, so the fixtures in this crate mark synthetic instances with a
//! tag and these digests canonicalize the tagged differing bits away
//! before hashing. To the engine the result behaves exactly like a real
//! collision: the transform between the two sides preserves the digest,
//! and every other change moves it.

use std::fmt;

use md5::{Digest as _, Md5};
use sha1::Sha1;

use hashquine_core::{
    CollisionDigest, Family, BLOCK_SIZE, INSTANCE_SPAN, SHATTERED_BLOCKS, SHATTERED_MASK,
};

/// Tag marking a synthetic FastColl instance, at offset 0 of its first block.
pub const FAST_TAG: [u8; 8] = *b"FASTCOLL";

/// Tag marking a synthetic UniColl instance, at offset 0 of its first block.
pub const UNI_TAG: [u8; 8] = *b"UNICOLL!";

fn tag_of(family: Family) -> [u8; 8] {
    match family {
        Family::Fast => FAST_TAG,
        Family::Uni => UNI_TAG,
    }
}

/// The bit canonicalization clears at each of the family's differing
/// offsets: the XOR bit for FastColl, the carry-in bit for UniColl.
fn family_mask(family: Family) -> u8 {
    match family {
        Family::Fast => 0x80,
        Family::Uni => 0x01,
    }
}

/// Clear the differing bits of every tagged instance span.
fn canonicalize_instances(data: &[u8]) -> Vec<u8> {
    let mut canon = data.to_vec();
    if data.len() < INSTANCE_SPAN {
        return canon;
    }
    let last = (data.len() - INSTANCE_SPAN) / BLOCK_SIZE;
    for index in 0..=last {
        let offset = index * BLOCK_SIZE;
        for family in [Family::Fast, Family::Uni] {
            if data[offset..offset + 8] == tag_of(family) {
                for &diff in family.diff_offsets() {
                    canon[offset + diff] &= !family_mask(family);
                }
            }
        }
    }
    canon
}

/// MD5 that treats the two sides of a tagged instance as equal.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct MaskedMd5([u8; 16]);

impl MaskedMd5 {
    /// Lowercase hex of the digest.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl CollisionDigest for MaskedMd5 {
    const ALGO: &'static str = "masked-MD5";

    fn digest(data: &[u8]) -> Self {
        Self(Md5::digest(canonicalize_instances(data)).into())
    }
}

impl fmt::Debug for MaskedMd5 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MaskedMd5({})", self.to_hex())
    }
}

impl AsRef<[u8]> for MaskedMd5 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// SHA-1 that ignores the Shattered mask bits in the two pinned blocks.
///
/// The real collision survives exactly one operation, XORing the mask
/// into both of its blocks; clearing the masked bits makes that same
/// operation digest-neutral for synthetic files too.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ShatteredSha1([u8; 20]);

impl ShatteredSha1 {
    /// Lowercase hex of the digest.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl CollisionDigest for ShatteredSha1 {
    const ALGO: &'static str = "masked-SHA-1";

    fn digest(data: &[u8]) -> Self {
        let mut canon = data.to_vec();
        for &block in &SHATTERED_BLOCKS {
            let offset = block * BLOCK_SIZE;
            if offset + BLOCK_SIZE <= canon.len() {
                for (i, &mask) in SHATTERED_MASK.iter().enumerate() {
                    canon[offset + i] &= !mask;
                }
            }
        }
        Self(Sha1::digest(canon).into())
    }
}

impl fmt::Debug for ShatteredSha1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ShatteredSha1({})", self.to_hex())
    }
}

impl AsRef<[u8]> for ShatteredSha1 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
