//! # Hashquine Formats
//!
//! Pinned layouts for the published hashquine artworks, and the profile
//! type to describe new ones.
//!
//! A profile is pure configuration: the block positions a container
//! reserved, the header digest that identifies the exact build, and the
//! side policy its display is wired for. The engine in `hashquine-core`
//! takes these as explicit inputs; nothing here is global state.
//!
//! ## Key Types
//!
//! - [`Profile`] - One pinned hashquine layout
//! - [`Positions`] - Arithmetic or tabled block indexes
//! - [`Strategy`] - Bits, one-of-N, or greedy encoding
//!
//! Built-ins for the shipped artworks live in [`builtin`].

pub mod builtin;
pub mod error;
pub mod profile;

pub use builtin::{builtins, find};
pub use error::FormatError;
pub use profile::{Positions, Profile, Strategy};
