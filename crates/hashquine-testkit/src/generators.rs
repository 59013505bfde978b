//! Proptest generators for property-based testing.

use proptest::prelude::*;

use hashquine_core::{BitOrder, Family, PositionList, Side, SizePick};

use crate::fixtures::FixtureBuilder;

const HEX: &[u8; 16] = b"0123456789abcdef";

/// Generate a collision family.
pub fn family() -> impl Strategy<Value = Family> {
    prop_oneof![Just(Family::Fast), Just(Family::Uni)]
}

/// Generate a side.
pub fn side() -> impl Strategy<Value = Side> {
    prop_oneof![Just(Side::A), Just(Side::B)]
}

/// Generate a bit order.
pub fn bit_order() -> impl Strategy<Value = BitOrder> {
    prop_oneof![Just(BitOrder::MsbFirst), Just(BitOrder::LsbFirst)]
}

/// Generate a size pick.
pub fn size_pick() -> impl Strategy<Value = SizePick> {
    prop_oneof![Just(SizePick::Smaller), Just(SizePick::Larger)]
}

/// Generate a lowercase hex value of exactly `len` digits.
pub fn hex_value(len: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(0u8..16, len)
        .prop_map(|nibbles| nibbles.iter().map(|&n| HEX[usize::from(n)] as char).collect())
}

/// Parameters for planting a probe-able fixture.
///
/// Positions are spaced at least three blocks apart, the distance that
/// keeps straddling probes from landing on a neighbour.
#[derive(Debug, Clone)]
pub struct LayoutParams {
    pub family: Family,
    pub seed: u64,
    pub positions: Vec<usize>,
    pub sides: Vec<Side>,
}

impl Arbitrary for LayoutParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            family(),
            any::<u64>(), // fill seed
            0usize..4,    // first block
            3usize..8,    // spacing
            prop::collection::vec(side(), 1..=6),
        )
            .prop_map(|(family, seed, start, step, sides)| {
                let positions = (0..sides.len()).map(|i| start + i * step).collect();
                LayoutParams {
                    family,
                    seed,
                    positions,
                    sides,
                }
            })
            .boxed()
    }
}

/// Build the fixture a [`LayoutParams`] describes.
///
/// Returns the buffer, one trailing spare block included, and the
/// position list of the planted instances.
pub fn fixture_from_params(params: &LayoutParams) -> (Vec<u8>, PositionList) {
    let last = params.positions.last().copied().unwrap_or(0);
    let mut builder = FixtureBuilder::with_seed(last + 3, params.seed);
    for (&index, &side) in params.positions.iter().zip(&params.sides) {
        builder = builder.instance(index, params.family, side);
    }
    let positions = PositionList::new(params.positions.clone())
        .expect("spaced fixture positions never overlap");
    (builder.build(), positions)
}
