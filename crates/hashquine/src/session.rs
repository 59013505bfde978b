//! Session orchestration: bind a profile to file bytes and move values.
//!
//! A session is the I/O-free middle layer between a format profile and
//! the engine. Opening one verifies the profile's digest gates against
//! the actual bytes; encoding resolves a value source, normalizes it to
//! the profile's width, and drives the profile's strategy over the
//! reserved positions. The caller owns reading and writing the file.

use std::marker::PhantomData;

use rand::Rng;

use hashquine_core::{
    bits_to_hex, decode_bits, decode_greedy, decode_one_of_n, encode_bits, encode_greedy,
    encode_one_of_n, hex_to_bits, hex_to_nibbles, nibbles_to_hex, normalize_hex, CollisionDigest,
    Md5Digest, OneOfNScheme, PositionList,
};
use hashquine_formats::{Profile, Strategy};

use crate::error::{Result, SessionError};

/// Gate toggles for opening a session.
///
/// Both gates default to on. Turning them off is for working on files
/// that deliberately diverge from the pinned artwork, such as rebuilt
/// or partially corrupted copies; every per-instance operation still
/// verifies itself by rehashing.
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    /// Verify the header digest before touching the file.
    pub check_header: bool,

    /// Verify the whole-file digest pin, where the profile has one,
    /// both at open and again after every encode.
    pub check_full: bool,

    /// Override the profile's one-of-N reset flag.
    ///
    /// `None` keeps the profile's choice. Skipping the reset is only
    /// sound on a file known to sit entirely on the baseline already.
    /// The bit and greedy strategies rewrite every position and ignore
    /// this.
    pub reset: Option<bool>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            check_header: true,
            check_full: true,
            reset: None,
        }
    }
}

/// Where the value to encode comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueSource {
    /// A caller-supplied hex value, normalized to the profile's width.
    Explicit(String),

    /// Independently random hex digits.
    Random,

    /// The file's own current whole-file digest.
    SelfDigest,
}

/// What an encode run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeOutcome {
    /// The normalized value the caller asked for.
    pub requested: String,

    /// The value that actually landed in the file.
    ///
    /// Equals `requested` for the bit and one-of-N strategies. Greedy
    /// encoding may consume only a prefix, and then this prefix is the
    /// authoritative encoded value.
    pub encoded: String,
}

impl EncodeOutcome {
    /// Whether the full requested value was encoded.
    pub fn is_complete(&self) -> bool {
        self.encoded == self.requested
    }
}

/// A format profile bound to the bytes of one file.
///
/// Generic over the hashing seam so the same orchestration runs under
/// real MD5, the default, and under the masked test digests; a profile's
/// pinned hex digests are always compared against whatever `D` computes.
#[derive(Debug)]
pub struct Session<D: CollisionDigest = Md5Digest> {
    profile: Profile,
    positions: PositionList,
    config: SessionConfig,
    data: Vec<u8>,
    _digest: PhantomData<D>,
}

impl Session {
    /// Bind `profile` to `data` under real MD5.
    pub fn open(profile: Profile, data: Vec<u8>, config: SessionConfig) -> Result<Self> {
        Self::open_with(profile, data, config)
    }
}

impl<D: CollisionDigest> Session<D> {
    // ─────────────────────────────────────────────────────────────────────────
    // Opening
    // ─────────────────────────────────────────────────────────────────────────

    /// Bind `profile` to `data`, verifying the profile's digest gates.
    ///
    /// The profile is re-validated here so a session never starts from
    /// an inconsistent layout, whether it came from the builtin set or
    /// from caller-supplied JSON.
    pub fn open_with(profile: Profile, data: Vec<u8>, config: SessionConfig) -> Result<Self> {
        profile.validate()?;
        let positions = profile.position_list()?;

        if config.check_header {
            if data.len() < profile.header_len {
                return Err(SessionError::HeaderTooShort {
                    expected: profile.header_len,
                    len: data.len(),
                });
            }
            let header = D::digest(&data[..profile.header_len]).to_hex();
            if header != profile.header_md5 {
                return Err(SessionError::HeaderMismatch {
                    expected: profile.header_md5.clone(),
                    actual: header,
                });
            }
        }

        let session = Self {
            profile,
            positions,
            config,
            data,
            _digest: PhantomData,
        };
        session.verify_full_pin()?;

        tracing::debug!(
            "opened '{}' session over {} bytes with {} reserved positions",
            session.profile.name,
            session.data.len(),
            session.positions.len()
        );
        Ok(session)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// The bound profile.
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// The current file bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Digest of the current file bytes.
    pub fn digest(&self) -> D {
        D::digest(&self.data)
    }

    /// Consume the session, returning the file bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Values
    // ─────────────────────────────────────────────────────────────────────────

    /// Resolve a value source into a normalized hex value of the
    /// profile's width.
    pub fn resolve_value(&self, source: &ValueSource) -> Result<String> {
        let width = self.profile.value_len;
        let value = match source {
            ValueSource::Explicit(value) => normalize_hex(value, width)?,
            ValueSource::Random => {
                let mut rng = rand::thread_rng();
                (0..width)
                    .map(|_| char::from_digit(rng.gen_range(0..16u32), 16).unwrap_or('0'))
                    .collect()
            }
            ValueSource::SelfDigest => normalize_hex(&self.digest().to_hex(), width)?,
        };
        Ok(value)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Encoding
    // ─────────────────────────────────────────────────────────────────────────

    /// Encode a value into the reserved positions.
    ///
    /// The whole-file digest is untouched by construction; when the
    /// profile pins one, it is re-verified before returning.
    pub fn encode(&mut self, source: &ValueSource) -> Result<EncodeOutcome> {
        let requested = self.resolve_value(source)?;
        let family = self.profile.family;
        let encoded = match &self.profile.strategy {
            Strategy::Bits { one, order } => {
                let bits = hex_to_bits(&requested, *order)?;
                encode_bits::<D>(&mut self.data, family, &self.positions, &bits, *one)?;
                requested.clone()
            }
            Strategy::OneOfN(scheme) => {
                let scheme = OneOfNScheme {
                    reset: self.config.reset.unwrap_or(scheme.reset),
                    ..*scheme
                };
                let symbols: Vec<usize> = hex_to_nibbles(&requested)?
                    .into_iter()
                    .map(usize::from)
                    .collect();
                encode_one_of_n::<D>(&mut self.data, family, &self.positions, &scheme, &symbols)?;
                requested.clone()
            }
            Strategy::Greedy => {
                encode_greedy::<D>(&mut self.data, family, &self.positions, &requested)?
            }
        };
        self.verify_full_pin()?;

        tracing::debug!("encoded '{}' of requested '{}'", encoded, requested);
        Ok(EncodeOutcome { requested, encoded })
    }

    /// Read the currently encoded value back out of the file.
    ///
    /// Takes `&mut self` because side detection probes by transforming
    /// and restoring; the bytes are identical again on return.
    pub fn decode(&mut self) -> Result<String> {
        let family = self.profile.family;
        let value = match &self.profile.strategy {
            Strategy::Bits { one, order } => {
                let bits = decode_bits::<D>(&mut self.data, family, &self.positions, *one)?;
                bits_to_hex(&bits, *order)
            }
            Strategy::OneOfN(scheme) => {
                let symbols =
                    decode_one_of_n::<D>(&mut self.data, family, &self.positions, scheme)?;
                let nibbles: Vec<u8> = symbols.iter().map(|&symbol| symbol as u8).collect();
                nibbles_to_hex(&nibbles)
            }
            Strategy::Greedy => decode_greedy::<D>(&mut self.data, family, &self.positions)?,
        };
        Ok(value)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Gates
    // ─────────────────────────────────────────────────────────────────────────

    fn verify_full_pin(&self) -> Result<()> {
        if !self.config.check_full {
            return Ok(());
        }
        if let Some(expected) = &self.profile.full_md5 {
            let actual = D::digest(&self.data).to_hex();
            if &actual != expected {
                return Err(SessionError::FullDigestMismatch {
                    expected: expected.clone(),
                    actual,
                });
            }
        }
        Ok(())
    }
}
