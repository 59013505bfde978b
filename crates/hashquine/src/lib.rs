//! # Hashquine
//!
//! ## Overview
//!
//! Unified API for working with hashquine files: artworks that display
//! their own checksum by flipping reserved hash-colliding blocks. This
//! crate binds the pure engine from `hashquine-core` to the pinned
//! format profiles from `hashquine-formats` and adds the session layer
//! a tool actually wants: digest gates on open, value sources, and
//! encode outcomes.
//!
//! ## Key Concepts
//!
//! - **Profile**: a pinned format layout; reserved block positions,
//!   header digest, and encoding strategy for one artwork.
//! - **Session**: a profile bound to the bytes of one file. All
//!   operations happen in memory; the caller owns the I/O.
//! - **Value source**: where the encoded value comes from; an explicit
//!   hex string, fresh random digits, or the file's own MD5.
//! - **Encode outcome**: the requested value next to what actually
//!   landed in the file, which for greedy formats may be a prefix.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hashquine::{Session, SessionConfig, ValueSource};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let profile = hashquine::formats::find("gz").ok_or("unknown profile")?;
//!     let data = std::fs::read("pocorgtfo14.gz")?;
//!
//!     let mut session = Session::open(profile, data, SessionConfig::default())?;
//!     let outcome = session.encode(&ValueSource::SelfDigest)?;
//!     println!("display now reads {}", outcome.encoded);
//!
//!     std::fs::write("pocorgtfo14.gz", session.into_bytes())?;
//!     Ok(())
//! }
//! ```
//!
//! ## Re-exports
//!
//! The component crates are re-exported under short names, so dependents
//! only need `hashquine` itself: [`core`] for the engine primitives and
//! [`formats`] for profiles.

pub mod error;
pub mod session;

pub use error::{Result, SessionError};
pub use session::{EncodeOutcome, Session, SessionConfig, ValueSource};

pub use hashquine_core as core;
pub use hashquine_formats as formats;
