//! Blockwise discovery of collision instances.
//!
//! Scanning has no encoding semantics: it sweeps every block index a full
//! instance fits at, classifies each, and reports what it found. The bulk
//! operations then act uniformly on the report, which is the blunt
//! instrument for diagnosing an unknown file or resetting a known one.

use crate::block::{Side, BLOCK_SIZE, INSTANCE_SPAN};
use crate::digest::CollisionDigest;
use crate::error::CoreError;
use crate::family::Family;
use crate::primitive::{classify, flip_side, force_side};

/// One discovered collision instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanHit {
    /// Block index the instance starts at.
    pub index: usize,
    /// Which family matched.
    pub family: Family,
    /// The side currently present.
    pub side: Side,
}

/// Everything a sweep found, in block order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScanReport {
    /// Discovered instances, ordered by block index.
    pub hits: Vec<ScanHit>,
}

impl ScanReport {
    /// Number of discovered instances.
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    /// Whether the sweep found nothing.
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// Number of hits belonging to `family`.
    pub fn count_of(&self, family: Family) -> usize {
        self.hits.iter().filter(|hit| hit.family == family).count()
    }

    /// Header length a format would pin for this layout: everything up to
    /// and including the last discovered instance.
    ///
    /// `None` when the sweep found nothing.
    pub fn suggested_header_len(&self) -> Option<usize> {
        self.hits
            .last()
            .map(|hit| (hit.index + 2) * BLOCK_SIZE)
    }
}

/// Sweep every block index at which a full instance fits.
///
/// Indexes are classified FastColl first, then UniColl, and instances are
/// reported at every index they are recognized at, overlapping or not;
/// interpreting the layout is the caller's business.
pub fn scan<D: CollisionDigest>(data: &mut [u8]) -> Result<ScanReport, CoreError> {
    let mut report = ScanReport::default();
    if data.len() < INSTANCE_SPAN {
        return Ok(report);
    }
    let last = (data.len() - INSTANCE_SPAN) / BLOCK_SIZE;
    for index in 0..=last {
        if let Some((family, side)) = classify::<D>(data, index)? {
            report.hits.push(ScanHit {
                index,
                family,
                side,
            });
        }
    }
    Ok(report)
}

/// Force every instance in `report` to `side`.
///
/// Returns how many instances actually changed side. Fails if the report
/// is stale, i.e. a recorded instance no longer probes as one.
pub fn force_all<D: CollisionDigest>(
    data: &mut [u8],
    report: &ScanReport,
    side: Side,
) -> Result<usize, CoreError> {
    let mut changed = 0;
    for hit in &report.hits {
        let before = force_side::<D>(data, hit.family, hit.index, side)?;
        if before != side {
            changed += 1;
        }
    }
    Ok(changed)
}

/// Flip every instance in `report` to its partner side.
///
/// Returns the number of instances flipped.
pub fn flip_all<D: CollisionDigest>(
    data: &mut [u8],
    report: &ScanReport,
) -> Result<usize, CoreError> {
    for hit in &report.hits {
        flip_side::<D>(data, hit.family, hit.index)?;
    }
    Ok(report.hits.len())
}
