//! Single-instance operations: detect, classify, force, flip.
//!
//! Which transform direction preserves the digest is a property of the
//! bytes already present and is only discoverable empirically, so every
//! operation here probes: apply a direction, rehash the whole buffer,
//! restore, and keep whichever direction survived. The two-direction
//! probe is the algorithm, not error recovery.

use serde::{Deserialize, Serialize};

use crate::block::{Side, BLOCK_SIZE, INSTANCE_SPAN};
use crate::digest::CollisionDigest;
use crate::error::CoreError;
use crate::family::{Direction, Family};

/// How a by-size policy picks between the two sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizePick {
    /// Keep the side whose differing byte is numerically smaller.
    Smaller,
    /// Keep the side whose differing byte is numerically larger.
    Larger,
}

/// Outcome of a successful probe: the side found and how to leave it.
#[derive(Debug, Clone, Copy)]
struct Probe {
    side: Side,
    to_partner: Direction,
}

/// Byte offset of the block at `index`, bounds-checked for a full instance.
fn check_span(data: &[u8], index: usize) -> Result<usize, CoreError> {
    let out_of_bounds = CoreError::OutOfBounds {
        index,
        len: data.len(),
    };
    let offset = match index.checked_mul(BLOCK_SIZE) {
        Some(offset) => offset,
        None => return Err(out_of_bounds),
    };
    match offset.checked_add(INSTANCE_SPAN) {
        Some(end) if end <= data.len() => Ok(offset),
        _ => Err(out_of_bounds),
    }
}

/// Try both transform directions at `index`, restoring the buffer after each.
///
/// Returns `None` when neither direction preserves the digest. The buffer
/// is byte-identical on return either way.
fn probe<D: CollisionDigest>(
    data: &mut [u8],
    family: Family,
    index: usize,
) -> Result<Option<Probe>, CoreError> {
    let offset = check_span(data, index)?;
    let reference = D::digest(data);

    for direction in [Direction::Forward, Direction::Backward] {
        family.apply(data, offset, direction);
        let preserved = D::digest(data) == reference;
        family.apply(data, offset, direction.opposite());
        if preserved {
            // Forward moves B to A, so a forward-preserving instance is on B.
            let side = match direction {
                Direction::Forward => Side::B,
                Direction::Backward => Side::A,
            };
            return Ok(Some(Probe {
                side,
                to_partner: direction,
            }));
        }
    }
    Ok(None)
}

fn require_probe<D: CollisionDigest>(
    data: &mut [u8],
    family: Family,
    index: usize,
) -> Result<Probe, CoreError> {
    probe::<D>(data, family, index)?.ok_or(CoreError::DigestNotPreserved {
        algo: D::ALGO,
        family,
        index,
    })
}

/// Detect which side the instance at `index` is on.
///
/// Returns `Ok(None)` when neither transform preserves the digest, i.e.
/// there is no instance of this family at `index`. Probing mutates the
/// buffer in place and restores it, which is why the receiver is `&mut`
/// even though the net effect is read-only.
pub fn detect_side<D: CollisionDigest>(
    data: &mut [u8],
    family: Family,
    index: usize,
) -> Result<Option<Side>, CoreError> {
    Ok(probe::<D>(data, family, index)?.map(|p| p.side))
}

/// Identify which family, if any, has an instance at `index`.
///
/// FastColl is tried before UniColl.
pub fn classify<D: CollisionDigest>(
    data: &mut [u8],
    index: usize,
) -> Result<Option<(Family, Side)>, CoreError> {
    for family in [Family::Fast, Family::Uni] {
        if let Some(side) = detect_side::<D>(data, family, index)? {
            return Ok(Some((family, side)));
        }
    }
    Ok(None)
}

/// Put the instance at `index` on `side`, transforming it if needed.
///
/// Returns the side the instance was on before the call.
pub fn force_side<D: CollisionDigest>(
    data: &mut [u8],
    family: Family,
    index: usize,
    side: Side,
) -> Result<Side, CoreError> {
    let found = require_probe::<D>(data, family, index)?;
    if found.side != side {
        let offset = check_span(data, index)?;
        family.apply(data, offset, found.to_partner);
    }
    Ok(found.side)
}

/// Transform the instance at `index` to its partner side.
///
/// Returns the side the instance is on after the flip.
pub fn flip_side<D: CollisionDigest>(
    data: &mut [u8],
    family: Family,
    index: usize,
) -> Result<Side, CoreError> {
    let found = require_probe::<D>(data, family, index)?;
    let offset = check_span(data, index)?;
    family.apply(data, offset, found.to_partner);
    Ok(found.side.opposite())
}

/// Force the instance at `index` onto the side picked by comparing the
/// byte at `diff_offset` across the two sides.
///
/// `diff_offset` is instance-relative and must be one of the family's
/// [`diff_offsets`](Family::diff_offsets). Returns the side kept.
pub fn force_by_size<D: CollisionDigest>(
    data: &mut [u8],
    family: Family,
    index: usize,
    diff_offset: usize,
    pick: SizePick,
) -> Result<Side, CoreError> {
    check_diff_offset(family, diff_offset)?;
    let found = require_probe::<D>(data, family, index)?;
    let offset = check_span(data, index)?;

    let current = data[offset + diff_offset];
    family.apply(data, offset, found.to_partner);
    let partner = data[offset + diff_offset];

    let keep_partner = match pick {
        SizePick::Smaller => partner < current,
        SizePick::Larger => partner > current,
    };
    if keep_partner {
        Ok(found.side.opposite())
    } else {
        family.apply(data, offset, found.to_partner.opposite());
        Ok(found.side)
    }
}

/// Report whether the instance at `index` currently sits on the side whose
/// byte at `diff_offset` is the smaller or the larger of the pair.
///
/// This is the read-only counterpart of [`force_by_size`]; the buffer is
/// unchanged on return.
pub fn relative_size<D: CollisionDigest>(
    data: &mut [u8],
    family: Family,
    index: usize,
    diff_offset: usize,
) -> Result<SizePick, CoreError> {
    check_diff_offset(family, diff_offset)?;
    let found = require_probe::<D>(data, family, index)?;
    let offset = check_span(data, index)?;

    let current = data[offset + diff_offset];
    family.apply(data, offset, found.to_partner);
    let partner = data[offset + diff_offset];
    family.apply(data, offset, found.to_partner.opposite());

    // The differing byte always differs between sides, so this is total.
    if current < partner {
        Ok(SizePick::Smaller)
    } else {
        Ok(SizePick::Larger)
    }
}

fn check_diff_offset(family: Family, diff_offset: usize) -> Result<(), CoreError> {
    if family.diff_offsets().contains(&diff_offset) {
        Ok(())
    } else {
        Err(CoreError::UnknownDiffOffset {
            family,
            offset: diff_offset,
        })
    }
}
