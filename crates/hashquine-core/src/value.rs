//! Hex value handling: normalization, nibbles, and bit expansion.
//!
//! Encoded values are big-endian hex integers. Normalization fixes the
//! width so a short value grows leading zeros and an oversized one keeps
//! its most significant digits, matching the left-to-right encode order.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Bit order when a hex value is expanded to one bit per position.
///
/// The order applies to the whole value, not per nibble: `LsbFirst` is the
/// exact reversal of `MsbFirst`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BitOrder {
    /// Most significant bit of the value first.
    MsbFirst,
    /// Least significant bit of the value first.
    LsbFirst,
}

/// Normalize a hex value to exactly `width` lowercase digits.
///
/// Accepts an optional `0x` prefix and mixed case. Leading zeros are
/// dropped, then the digits are left-padded back to `width`; a value with
/// more than `width` significant digits keeps the most significant ones.
pub fn normalize_hex(value: &str, width: usize) -> Result<String, CoreError> {
    let invalid = || CoreError::InvalidHex {
        value: value.to_string(),
    };

    let digits = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value);
    if digits.is_empty() {
        return Err(invalid());
    }

    let mut lowered = String::with_capacity(digits.len());
    for c in digits.chars() {
        if !c.is_ascii_hexdigit() {
            return Err(invalid());
        }
        lowered.push(c.to_ascii_lowercase());
    }

    let significant = lowered.trim_start_matches('0');
    let mut out = String::with_capacity(width);
    if significant.len() >= width {
        out.push_str(&significant[..width]);
    } else {
        for _ in 0..width - significant.len() {
            out.push('0');
        }
        out.push_str(significant);
    }
    Ok(out)
}

/// Split a hex string into nibble values.
pub fn hex_to_nibbles(value: &str) -> Result<Vec<u8>, CoreError> {
    value
        .chars()
        .map(|c| {
            c.to_digit(16)
                .map(|d| d as u8)
                .ok_or_else(|| CoreError::InvalidHex {
                    value: value.to_string(),
                })
        })
        .collect()
}

/// Join nibble values into a lowercase hex string.
pub fn nibbles_to_hex(nibbles: &[u8]) -> String {
    nibbles
        .iter()
        .map(|n| char::from_digit(u32::from(n & 0x0f), 16).unwrap_or('0'))
        .collect()
}

/// Expand a hex value to one bit per position.
pub fn hex_to_bits(value: &str, order: BitOrder) -> Result<Vec<bool>, CoreError> {
    let nibbles = hex_to_nibbles(value)?;
    let mut bits = Vec::with_capacity(nibbles.len() * 4);
    for nibble in nibbles {
        for shift in (0..4).rev() {
            bits.push(nibble >> shift & 1 == 1);
        }
    }
    if order == BitOrder::LsbFirst {
        bits.reverse();
    }
    Ok(bits)
}

/// Collapse bits back into a lowercase hex string. Inverse of
/// [`hex_to_bits`]; a bit count that is not a multiple of four is
/// left-padded with zero bits first.
pub fn bits_to_hex(bits: &[bool], order: BitOrder) -> String {
    let mut msb: Vec<bool> = bits.to_vec();
    if order == BitOrder::LsbFirst {
        msb.reverse();
    }
    let pad = (4 - msb.len() % 4) % 4;
    let mut nibbles = Vec::with_capacity((msb.len() + pad) / 4);
    let mut nibble = 0u8;
    let mut filled = pad;
    for bit in msb {
        nibble = nibble << 1 | u8::from(bit);
        filled += 1;
        if filled == 4 {
            nibbles.push(nibble);
            nibble = 0;
            filled = 0;
        }
    }
    nibbles_to_hex(&nibbles)
}
