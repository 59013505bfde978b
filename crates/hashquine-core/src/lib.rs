//! # Hashquine Core
//!
//! Pure primitives for collision-block encoding: detect, force, and flip
//! hash-preserving block instances, and encode values over lists of them.
//!
//! This crate contains no I/O. Every operation is a bounded computation
//! over a caller-owned byte buffer that verifies itself by rehashing.
//!
//! ## Key Types
//!
//! - [`Family`] - The two MD5 collision constructions, FastColl and UniColl
//! - [`Side`] - Which of the two colliding contents an instance holds
//! - [`CollisionDigest`] - The hashing seam, implemented by [`Md5Digest`] and [`Sha1Digest`]
//! - [`PositionList`] - Validated, non-overlapping block indexes
//! - [`OneOfNScheme`] - Group layout and side policy for one-of-N encoding
//! - [`ScanReport`] - Blockwise discovery results
//!
//! ## Probing
//!
//! Which transform direction preserves a digest is only discoverable
//! empirically, so every primitive probes both. See [`primitive`] module.

pub mod block;
pub mod digest;
pub mod encode;
pub mod error;
pub mod family;
pub mod primitive;
pub mod scan;
pub mod shattered;
pub mod value;

pub use block::{PositionList, Side, BLOCK_SIZE, INSTANCE_SPAN};
pub use digest::{CollisionDigest, Md5Digest, Sha1Digest};
pub use encode::{
    decode_bits, decode_greedy, decode_one_of_n, encode_bits, encode_greedy, encode_one_of_n,
    OneOfNScheme, SideRule,
};
pub use error::CoreError;
pub use family::Family;
pub use primitive::{
    classify, detect_side, flip_side, force_by_size, force_side, relative_size, SizePick,
};
pub use scan::{flip_all, force_all, scan, ScanHit, ScanReport};
pub use shattered::{SHATTERED_BLOCKS, SHATTERED_HEADER_LEN, SHATTERED_HEADER_SHA1, SHATTERED_MASK};
pub use value::{bits_to_hex, hex_to_bits, hex_to_nibbles, nibbles_to_hex, normalize_hex, BitOrder};
