//! Slot assignment and copy routing, computed once per synthesis run.
//!
//! The plan is pure bookkeeping over mask arithmetic. Keeping it separate
//! from the pixel pass means the routing can be checked exhaustively in
//! tests without touching an image.

use std::collections::HashMap;

use blobtile_core::{NeighborMask, Quadrant, SliceShape, VALID_VARIANT_COUNT};

/// A source block: one quadrant of one strip tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SliceKey {
    pub shape: SliceShape,
    pub quadrant: Quadrant,
}

/// One destination for a source block: the same quadrant of an atlas slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuadrantPlacement {
    pub slot: u32,
    pub quadrant: Quadrant,
}

/// A variant's place in the atlas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantPlacement {
    pub mask: NeighborMask,
    pub slot: u32,
}

/// Complete routing for one synthesis run.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisPlan {
    /// Variants in slot order; index equals slot.
    pub variants: Vec<VariantPlacement>,
    /// Destinations grouped by the source block they pull from, so each of
    /// the 20 blocks is cropped once and pasted many times.
    pub routes: HashMap<SliceKey, Vec<QuadrantPlacement>>,
}

impl SynthesisPlan {
    /// Assign every valid mask an atlas slot in ascending mask order and
    /// classify all four quadrants of every variant.
    pub fn build() -> SynthesisPlan {
        let mut variants = Vec::with_capacity(VALID_VARIANT_COUNT);
        let mut routes: HashMap<SliceKey, Vec<QuadrantPlacement>> = HashMap::new();

        for (slot, mask) in NeighborMask::valid_masks().enumerate() {
            let slot = slot as u32;
            variants.push(VariantPlacement { mask, slot });
            for quadrant in Quadrant::ALL {
                let key = SliceKey {
                    shape: quadrant.shape_in(mask),
                    quadrant,
                };
                routes
                    .entry(key)
                    .or_default()
                    .push(QuadrantPlacement { slot, quadrant });
            }
        }

        SynthesisPlan { variants, routes }
    }
}
