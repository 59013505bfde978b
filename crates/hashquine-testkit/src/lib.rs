//! # Hashquine Testkit
//!
//! Testing utilities for the hashquine engine.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Collision-aware digests**: [`MaskedMd5`] and [`ShatteredSha1`], which treat
//!   the two sides of a tagged synthetic instance as equal
//! - **Fixtures**: [`FixtureBuilder`] for planting probe-able instances in a buffer
//! - **Generators**: Proptest strategies for property-based testing
//! - **Collision vectors**: The published real-MD5 collision pair with pinned digests
//!
//! ## Fixtures
//!
//! Real collision blocks cannot be synthesized in a test, so the builder
//! plants tagged spans that the masked digests canonicalize:
//!
//! ```rust
//! use hashquine_core::{detect_side, Family, Side};
//! use hashquine_testkit::{FixtureBuilder, MaskedMd5};
//!
//! let mut data = FixtureBuilder::new(8)
//!     .instance(0, Family::Fast, Side::A)
//!     .instance(4, Family::Uni, Side::B)
//!     .build();
//!
//! let side = detect_side::<MaskedMd5>(&mut data, Family::Fast, 0).unwrap();
//! assert_eq!(side, Some(Side::A));
//! ```
//!
//! ## Property Testing
//!
//! Use the generators with proptest:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use hashquine_testkit::generators::{fixture_from_params, LayoutParams};
//!
//! proptest! {
//!     #[test]
//!     fn digest_survives_planting(params: LayoutParams) {
//!         let (data, _positions) = fixture_from_params(&params);
//!         prop_assert!(!data.is_empty());
//!     }
//! }
//! ```
//!
//! ## Collision Vectors
//!
//! The vectors pin the published FastColl pair and its digests, the one
//! place the engine can be exercised against real MD5:
//!
//! ```rust
//! use hashquine_testkit::vectors::verify_all_vectors;
//!
//! for (name, ok, digest) in verify_all_vectors() {
//!     println!("{name}: {digest} ({ok})");
//! }
//! ```

pub mod fixtures;
pub mod generators;
pub mod hash;
pub mod vectors;

pub use fixtures::FixtureBuilder;
pub use generators::{fixture_from_params, LayoutParams};
pub use hash::{MaskedMd5, ShatteredSha1, FAST_TAG, UNI_TAG};
pub use vectors::{all_vectors, vector_bytes, verify_all_vectors, CollisionVector};
