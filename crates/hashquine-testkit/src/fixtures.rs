//! Synthetic collision fixtures.
//!
//! Real collision blocks exist only in the shipped artworks, so tests
//! build tagged stand-ins: pseudo-random instance spans whose differing
//! bits line up with [`MaskedMd5`] canonicalization. The builder pins
//! the carry bytes so both transform directions stay carry-free, and
//! keeps instances at least three blocks apart so probing the straddle
//! between two instances can never land entirely on masked bits.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use hashquine_core::{force_side, Family, Side, BLOCK_SIZE, INSTANCE_SPAN};

use crate::hash::{MaskedMd5, FAST_TAG, UNI_TAG};

/// Builds buffers holding tagged synthetic collision instances.
pub struct FixtureBuilder {
    data: Vec<u8>,
    rng: StdRng,
    placed: Vec<usize>,
}

impl FixtureBuilder {
    /// A zero-filled buffer of `blocks` blocks, with a fixed seed.
    pub fn new(blocks: usize) -> Self {
        Self::with_seed(blocks, 0x6861_7368)
    }

    /// Same, but with a caller-chosen fill seed.
    pub fn with_seed(blocks: usize, seed: u64) -> Self {
        Self {
            data: vec![0; blocks * BLOCK_SIZE],
            rng: StdRng::seed_from_u64(seed),
            placed: Vec::new(),
        }
    }

    /// Place a tagged instance of `family` at block `index`, on `side`.
    ///
    /// Panics when the instance does not fit in the buffer or comes
    /// closer than three blocks to one already placed.
    pub fn instance(mut self, index: usize, family: Family, side: Side) -> Self {
        let offset = index * BLOCK_SIZE;
        assert!(
            offset + INSTANCE_SPAN <= self.data.len(),
            "instance at block {index} does not fit the buffer"
        );
        for &other in &self.placed {
            assert!(
                index.abs_diff(other) >= 3,
                "blocks {other} and {index} are too close to probe apart"
            );
        }

        let span = &mut self.data[offset..offset + INSTANCE_SPAN];
        self.rng.fill(span);
        match family {
            Family::Fast => {
                span[..8].copy_from_slice(&FAST_TAG);
                // Adding 0x8000 at 0x2c must only set a bit and
                // subtracting it at 0x6c must only clear one.
                span[0x2d] &= 0x7f;
                span[0x6d] |= 0x80;
            }
            Family::Uni => {
                span[..8].copy_from_slice(&UNI_TAG);
                // Same for the byte-wide +-1 carries at 0x09 and 0x49.
                span[0x09] &= 0x7e;
                span[0x49] = span[0x49] & 0x7e | 0x01;
            }
        }

        // The freshly written base probes as side B; drive it where the
        // caller wants it through the engine itself.
        force_side::<MaskedMd5>(&mut self.data, family, index, side)
            .expect("a fresh fixture instance must probe as a collision");
        self.placed.push(index);
        self
    }

    /// The finished buffer.
    pub fn build(self) -> Vec<u8> {
        self.data
    }
}
