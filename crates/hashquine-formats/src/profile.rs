//! Format profiles: everything a front end pins about one hashquine file.
//!
//! A profile is pure data. The block positions, header digest, and side
//! policies a format reserves are decided when the artwork is built and
//! never derived at run time; the profile carries them to the engine as
//! explicit configuration.

use serde::{Deserialize, Serialize};

use hashquine_core::{
    BitOrder, Family, Md5Digest, OneOfNScheme, PositionList, Side, SideRule, BLOCK_SIZE,
};

use crate::error::FormatError;

/// How a profile lays out its reserved collision blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Positions {
    /// Evenly spaced block indexes: `start + step * i` for `i < count`.
    Arithmetic {
        start: usize,
        step: usize,
        count: usize,
    },
    /// An explicit table of block indexes.
    Table(Vec<usize>),
}

impl Positions {
    /// Number of positions described.
    pub fn len(&self) -> usize {
        match self {
            Positions::Arithmetic { count, .. } => *count,
            Positions::Table(indexes) => indexes.len(),
        }
    }

    /// Whether no positions are described.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Expand into a validated position list.
    pub fn to_list(&self) -> Result<PositionList, FormatError> {
        let indexes = match self {
            Positions::Arithmetic { start, step, count } => {
                let mut indexes = Vec::with_capacity(*count);
                for i in 0..*count {
                    let index = step
                        .checked_mul(i)
                        .and_then(|offset| start.checked_add(offset))
                        .ok_or(FormatError::PositionOverflow {
                            start: *start,
                            step: *step,
                            count: *count,
                        })?;
                    indexes.push(index);
                }
                indexes
            }
            Positions::Table(indexes) => indexes.clone(),
        };
        Ok(PositionList::new(indexes)?)
    }

    /// The highest block index described, if any.
    pub fn last(&self) -> Option<usize> {
        match self {
            Positions::Arithmetic { count: 0, .. } => None,
            Positions::Arithmetic { start, step, count } => Some(start + step * (count - 1)),
            Positions::Table(indexes) => indexes.last().copied(),
        }
    }
}

/// Which encoding strategy a profile drives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// One bit per instance.
    Bits {
        /// The side that encodes a set bit.
        one: Side,
        /// Which end of the value position 0 carries.
        order: BitOrder,
    },
    /// One selected instance per group of N.
    OneOfN(OneOfNScheme),
    /// Greedy streaming match over the repeating hex cycle.
    Greedy,
}

/// A pinned hashquine layout: positions, digests, and encoding policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Short name, used to look the profile up.
    pub name: String,

    /// One-line description of the artwork and its mechanism.
    pub summary: String,

    /// Collision family every reserved instance belongs to.
    pub family: Family,

    /// Length of the fixed prefix covering all collision blocks.
    pub header_len: usize,

    /// MD5 of the fixed prefix, the gate for "is this the right file".
    pub header_md5: String,

    /// MD5 of the whole file, pinned when the format is a true hashquine
    /// whose full digest never changes across encodings.
    pub full_md5: Option<String>,

    /// The reserved block positions, in encoding order.
    pub positions: Positions,

    /// The strategy the display is wired for.
    pub strategy: Strategy,

    /// Number of hex digits one encoding carries.
    pub value_len: usize,
}

impl Profile {
    /// Parse a profile from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self, FormatError> {
        let profile: Profile = serde_json::from_str(json)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, FormatError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Expand the reserved positions into a validated list.
    pub fn position_list(&self) -> Result<PositionList, FormatError> {
        self.positions.to_list()
    }

    /// Check internal consistency.
    ///
    /// A valid profile has well-formed digests, a block-aligned header
    /// that covers every reserved instance, and a strategy whose shape
    /// agrees with the position count and value length.
    pub fn validate(&self) -> Result<(), FormatError> {
        if self.name.is_empty() {
            return self.invalid("profile name is empty");
        }
        if Md5Digest::from_hex(&self.header_md5).is_err() {
            return self.invalid("header digest is not a 32-digit hex MD5");
        }
        if let Some(full) = &self.full_md5 {
            if Md5Digest::from_hex(full).is_err() {
                return self.invalid("full-file digest is not a 32-digit hex MD5");
            }
        }
        if self.header_len == 0 || self.header_len % BLOCK_SIZE != 0 {
            return self.invalid("header length is not a positive multiple of the block size");
        }
        if self.positions.is_empty() {
            return self.invalid("no positions are reserved");
        }
        self.position_list()?;
        if let Some(last) = self.positions.last() {
            let covered = last
                .checked_add(2)
                .and_then(|blocks| blocks.checked_mul(BLOCK_SIZE));
            match covered {
                Some(end) if end <= self.header_len => {}
                _ => return self.invalid("positions extend past the pinned header"),
            }
        }

        match &self.strategy {
            Strategy::Bits { .. } => {
                if self.positions.len() != self.value_len * 4 {
                    return self.invalid("bit strategy needs four positions per hex digit");
                }
            }
            Strategy::OneOfN(scheme) => {
                if scheme.group == 0 || self.positions.len() % scheme.group != 0 {
                    return self.invalid("positions do not divide into one-of-N groups");
                }
                if self.positions.len() / scheme.group != self.value_len {
                    return self.invalid("one-of-N group count disagrees with the value length");
                }
                for rule in [scheme.baseline, scheme.selected] {
                    if let SideRule::BySize { diff_offset, .. } = rule {
                        if !self.family.diff_offsets().contains(&diff_offset) {
                            return self.invalid("by-size rule compares a non-differing byte");
                        }
                    }
                }
            }
            // Greedy truncates by design, so any capacity is consistent.
            Strategy::Greedy => {}
        }
        Ok(())
    }

    fn invalid(&self, reason: &str) -> Result<(), FormatError> {
        Err(FormatError::InvalidProfile {
            name: self.name.clone(),
            reason: reason.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    // Explicit import so `Strategy` means the enum, not proptest's trait
    // pulled in by the prelude glob.
    use super::Strategy;
    use hashquine_core::SizePick;
    use proptest::prelude::*;

    fn bit_profile() -> Profile {
        Profile {
            name: "test-bits".to_string(),
            summary: "hand-built bit profile".to_string(),
            family: Family::Uni,
            header_len: (1 + 7 * 15 + 2) * BLOCK_SIZE,
            header_md5: "d41d8cd98f00b204e9800998ecf8427e".to_string(),
            full_md5: None,
            positions: Positions::Arithmetic {
                start: 1,
                step: 7,
                count: 16,
            },
            strategy: Strategy::Bits {
                one: Side::B,
                order: BitOrder::MsbFirst,
            },
            value_len: 4,
        }
    }

    #[test]
    fn test_valid_profile_passes() {
        bit_profile().validate().unwrap();
    }

    #[test]
    fn test_positions_arithmetic_expansion() {
        let positions = Positions::Arithmetic {
            start: 9,
            step: 5,
            count: 4,
        };
        assert_eq!(positions.len(), 4);
        assert_eq!(positions.last(), Some(24));
        let list = positions.to_list().unwrap();
        assert_eq!(list.as_slice(), &[9, 14, 19, 24]);
    }

    #[test]
    fn test_positions_overflow_is_reported() {
        let positions = Positions::Arithmetic {
            start: usize::MAX - 1,
            step: 7,
            count: 3,
        };
        assert!(matches!(
            positions.to_list().unwrap_err(),
            FormatError::PositionOverflow { .. }
        ));
    }

    #[test]
    fn test_validate_rejects_unaligned_header() {
        let mut profile = bit_profile();
        profile.header_len += 1;
        assert!(matches!(
            profile.validate().unwrap_err(),
            FormatError::InvalidProfile { .. }
        ));
    }

    #[test]
    fn test_validate_rejects_malformed_digest() {
        let mut profile = bit_profile();
        profile.header_md5 = "not hex".to_string();
        assert!(profile.validate().is_err());

        let mut profile = bit_profile();
        profile.full_md5 = Some("d41d8cd9".to_string());
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_header_shorter_than_positions() {
        let mut profile = bit_profile();
        profile.header_len -= BLOCK_SIZE;
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bit_count_mismatch() {
        let mut profile = bit_profile();
        profile.value_len = 8;
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_foreign_diff_offset() {
        let mut profile = bit_profile();
        // 0x7b differs for FastColl, not for this profile's UniColl.
        profile.strategy = Strategy::OneOfN(OneOfNScheme {
            group: 4,
            baseline: SideRule::BySize {
                diff_offset: 0x7b,
                pick: SizePick::Smaller,
            },
            selected: SideRule::BySize {
                diff_offset: 0x7b,
                pick: SizePick::Larger,
            },
            reset: true,
        });
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_validate_checks_one_of_n_shape() {
        let mut profile = bit_profile();
        profile.strategy = Strategy::OneOfN(OneOfNScheme {
            group: 16,
            baseline: SideRule::Explicit(Side::A),
            selected: SideRule::Explicit(Side::B),
            reset: true,
        });
        assert!(
            profile.validate().is_err(),
            "one group of 16 disagrees with value_len 4"
        );
        profile.value_len = 1;
        profile.validate().unwrap();
    }

    #[test]
    fn test_json_round_trip() {
        let profile = bit_profile();
        let json = profile.to_json().unwrap();
        let back = Profile::from_json(&json).unwrap();
        assert_eq!(back, profile);
    }

    #[test]
    fn test_from_json_validates() {
        let mut profile = bit_profile();
        profile.value_len = 9;
        let json = profile.to_json().unwrap();
        assert!(matches!(
            Profile::from_json(&json).unwrap_err(),
            FormatError::InvalidProfile { .. }
        ));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            Profile::from_json("{not json").unwrap_err(),
            FormatError::Malformed(_)
        ));
    }

    proptest! {
        #[test]
        fn prop_arithmetic_expansion_laws(
            start in 0usize..512,
            step in 2usize..16,
            count in 1usize..64,
        ) {
            let positions = Positions::Arithmetic { start, step, count };
            prop_assert_eq!(positions.len(), count);

            let list = positions.to_list().unwrap();
            prop_assert_eq!(list.len(), count);
            let slice = list.as_slice();
            prop_assert_eq!(slice[0], start);
            for pair in slice.windows(2) {
                prop_assert_eq!(pair[1] - pair[0], step);
            }
            prop_assert_eq!(positions.last(), slice.last().copied());
        }

        #[test]
        fn prop_validate_tracks_header_coverage(
            start in 0usize..64,
            step in 2usize..9,
            value_len in 1usize..9,
        ) {
            let positions = Positions::Arithmetic {
                start,
                step,
                count: value_len * 4,
            };
            let last = positions.last().unwrap();
            let mut profile = Profile {
                name: "generated-bits".to_string(),
                summary: "generated bit layout".to_string(),
                family: Family::Uni,
                header_len: (last + 2) * BLOCK_SIZE,
                header_md5: "d41d8cd98f00b204e9800998ecf8427e".to_string(),
                full_md5: None,
                positions,
                strategy: Strategy::Bits {
                    one: Side::B,
                    order: BitOrder::MsbFirst,
                },
                value_len,
            };
            prop_assert!(profile.validate().is_ok());

            // One block short and the last instance pokes past the header.
            profile.header_len -= BLOCK_SIZE;
            prop_assert!(profile.validate().is_err());
        }
    }
}
