//! 8-bit neighbor masks for blob auto-tiling.
//!
//! Each of the eight cells surrounding a grid position maps to one bit:
//!
//! ```text
//! NW (32)   N (64)   NE (128)
//!  W (8)      *       E (16)
//! SW (1)    S (2)    SE (4)
//! ```
//!
//! The mask value doubles as the variant identity: sprites are named after
//! the decimal mask they render, so the layout above is a persistence
//! contract, not an implementation detail.
//!
//! A corner bit only ever appears together with both of its adjacent edge
//! bits. A lone corner neighbor touches the center tile at a single point
//! and cannot change its silhouette, so masks that set one are never
//! produced and never looked up. Of the 256 raw values, 47 survive this
//! rule.

use serde::{Deserialize, Serialize};

/// Bit assignments for the eight surrounding cells.
pub mod neighbors {
    pub const SW: u8 = 0b0000_0001; // South-west corner
    pub const S: u8 = 0b0000_0010; // South edge
    pub const SE: u8 = 0b0000_0100; // South-east corner
    pub const W: u8 = 0b0000_1000; // West edge
    pub const E: u8 = 0b0001_0000; // East edge
    pub const NW: u8 = 0b0010_0000; // North-west corner
    pub const N: u8 = 0b0100_0000; // North edge
    pub const NE: u8 = 0b1000_0000; // North-east corner
}

/// Number of masks that satisfy the corner rule, and therefore the number
/// of tile variants in a complete blob tileset.
pub const VALID_VARIANT_COUNT: usize = 47;

/// The four diagonal neighbor positions.
///
/// Each diagonal knows its own corner bit and the two edge bits that must
/// accompany it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Diagonal {
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

impl Diagonal {
    pub const ALL: [Diagonal; 4] = [
        Diagonal::NorthWest,
        Diagonal::NorthEast,
        Diagonal::SouthWest,
        Diagonal::SouthEast,
    ];

    /// The corner bit this diagonal sets in a mask.
    pub const fn corner_bit(self) -> u8 {
        match self {
            Diagonal::NorthWest => neighbors::NW,
            Diagonal::NorthEast => neighbors::NE,
            Diagonal::SouthWest => neighbors::SW,
            Diagonal::SouthEast => neighbors::SE,
        }
    }

    /// The two edge bits that must both be present for the corner to count.
    pub const fn edge_bits(self) -> u8 {
        match self {
            Diagonal::NorthWest => neighbors::N | neighbors::W,
            Diagonal::NorthEast => neighbors::N | neighbors::E,
            Diagonal::SouthWest => neighbors::S | neighbors::W,
            Diagonal::SouthEast => neighbors::S | neighbors::E,
        }
    }

    /// Grid offset of the diagonal cell, with y growing northward.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Diagonal::NorthWest => (-1, 1),
            Diagonal::NorthEast => (1, 1),
            Diagonal::SouthWest => (-1, -1),
            Diagonal::SouthEast => (1, -1),
        }
    }
}

/// Bitmask describing which of the eight surrounding cells hold the same
/// tile kind as the center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NeighborMask(pub u8);

impl NeighborMask {
    /// No same-kind neighbors at all.
    pub const EMPTY: NeighborMask = NeighborMask(0);

    /// All eight surrounding cells are the same kind.
    pub const FULL: NeighborMask = NeighborMask(0b1111_1111);

    /// The raw bit value. Doubles as the variant's sprite number.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether every bit in `bits` is set.
    pub const fn contains(self, bits: u8) -> bool {
        self.0 & bits == bits
    }

    /// Build a mask from the four edge neighbors. Corners start unset; add
    /// them afterwards with [`NeighborMask::with_corners`].
    pub fn from_cardinals(north: bool, south: bool, west: bool, east: bool) -> NeighborMask {
        let mut mask = 0u8;
        if north {
            mask |= neighbors::N;
        }
        if south {
            mask |= neighbors::S;
        }
        if west {
            mask |= neighbors::W;
        }
        if east {
            mask |= neighbors::E;
        }
        NeighborMask(mask)
    }

    /// Add corner bits for diagonals where `probe` reports a same-kind
    /// neighbor, but only where both adjacent edge bits are already set.
    ///
    /// Gating on the edges means a diagonal is probed at most once and the
    /// result never depends on the order diagonals are visited in.
    pub fn with_corners<F>(mut self, mut probe: F) -> NeighborMask
    where
        F: FnMut(Diagonal) -> bool,
    {
        for diagonal in Diagonal::ALL {
            if self.contains(diagonal.edge_bits()) && probe(diagonal) {
                self.0 |= diagonal.corner_bit();
            }
        }
        self
    }

    /// Whether every set corner bit is backed by both of its edge bits.
    ///
    /// Masks produced by [`compute_mask`] always pass; arbitrary bytes read
    /// from persisted data may not.
    pub fn is_valid(self) -> bool {
        for diagonal in Diagonal::ALL {
            if self.0 & diagonal.corner_bit() != 0 && !self.contains(diagonal.edge_bits()) {
                return false;
            }
        }
        true
    }

    /// All valid masks in ascending numeric order.
    ///
    /// Yields exactly [`VALID_VARIANT_COUNT`] values; the position of a mask
    /// in this sequence is its atlas slot.
    pub fn valid_masks() -> impl Iterator<Item = NeighborMask> {
        (0..=u8::MAX).map(NeighborMask).filter(|mask| mask.is_valid())
    }
}

impl std::fmt::Display for NeighborMask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<NeighborMask> for u8 {
    fn from(mask: NeighborMask) -> u8 {
        mask.0
    }
}

/// Compute the neighbor mask for the cell at `(x, y)`.
///
/// `same_kind` reports whether a grid position holds the same tile kind as
/// the cell being computed. The four edges are checked first; diagonals are
/// only probed where both of their edges matched, so out-of-bounds or
/// expensive diagonal queries are skipped whenever an edge already rules the
/// corner out.
pub fn compute_mask<F>(x: i32, y: i32, same_kind: F) -> NeighborMask
where
    F: Fn(i32, i32) -> bool,
{
    let edges = NeighborMask::from_cardinals(
        same_kind(x, y + 1),
        same_kind(x, y - 1),
        same_kind(x - 1, y),
        same_kind(x + 1, y),
    );
    edges.with_corners(|diagonal| {
        let (dx, dy) = diagonal.offset();
        same_kind(x + dx, y + dy)
    })
}
