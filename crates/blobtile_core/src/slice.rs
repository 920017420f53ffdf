//! Quadrant slicing: how a tile variant decomposes into four half-size
//! blocks, and which source tile each block is cut from.
//!
//! Every variant of a blob tile is assembled from four quadrant blocks.
//! A quadrant's appearance depends only on three bits of the neighbor
//! mask: the edge neighbor above or below it, the edge neighbor beside
//! it, and the corner between them. Classifying those three bits picks
//! one of the five source tiles.

use serde::{Deserialize, Serialize};

use crate::mask::{neighbors, NeighborMask};

/// One quarter of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quadrant {
    BottomLeft,
    BottomRight,
    TopLeft,
    TopRight,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
        Quadrant::TopLeft,
        Quadrant::TopRight,
    ];

    /// The edge neighbor directly above or below this quadrant.
    pub const fn vertical_edge_bit(self) -> u8 {
        match self {
            Quadrant::BottomLeft | Quadrant::BottomRight => neighbors::S,
            Quadrant::TopLeft | Quadrant::TopRight => neighbors::N,
        }
    }

    /// The edge neighbor directly beside this quadrant.
    pub const fn horizontal_edge_bit(self) -> u8 {
        match self {
            Quadrant::BottomLeft | Quadrant::TopLeft => neighbors::W,
            Quadrant::BottomRight | Quadrant::TopRight => neighbors::E,
        }
    }

    /// The corner neighbor touching this quadrant.
    pub const fn corner_bit(self) -> u8 {
        match self {
            Quadrant::BottomLeft => neighbors::SW,
            Quadrant::BottomRight => neighbors::SE,
            Quadrant::TopLeft => neighbors::NW,
            Quadrant::TopRight => neighbors::NE,
        }
    }

    /// Pixel offset of this quadrant inside a tile, for images whose y axis
    /// grows downward. `half` is half the tile size in pixels.
    pub const fn pixel_offset(self, half: u32) -> (u32, u32) {
        match self {
            Quadrant::TopLeft => (0, 0),
            Quadrant::TopRight => (half, 0),
            Quadrant::BottomLeft => (0, half),
            Quadrant::BottomRight => (half, half),
        }
    }

    /// Classify this quadrant under `mask`: which source tile supplies its
    /// pixels.
    pub fn shape_in(self, mask: NeighborMask) -> SliceShape {
        SliceShape::classify(
            mask.contains(self.vertical_edge_bit()),
            mask.contains(self.horizontal_edge_bit()),
            mask.contains(self.corner_bit()),
        )
    }
}

/// The five quadrant appearances, one per tile in the source strip.
///
/// The discriminant is the horizontal index of the matching tile in the
/// strip, so a shape converts directly into a pixel column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum SliceShape {
    /// Neither adjacent edge present: the silhouette turns an outer corner.
    Convex = 0,
    /// Only the vertical edge present: the outline runs up-down.
    VerticalEdge = 1,
    /// Only the horizontal edge present: the outline runs left-right.
    HorizontalEdge = 2,
    /// Both edges but no corner: an inner corner notch.
    Concave = 3,
    /// Both edges and the corner: fully surrounded fill.
    Interior = 4,
}

impl SliceShape {
    pub const COUNT: usize = 5;

    /// Pick a shape from the quadrant's three neighbor bits.
    ///
    /// The corner bit wins outright; it can only be set when both edges are
    /// too, so the remaining arms only see corner-free combinations.
    pub fn classify(vertical: bool, horizontal: bool, corner: bool) -> SliceShape {
        if corner {
            SliceShape::Interior
        } else if vertical && horizontal {
            SliceShape::Concave
        } else if horizontal {
            SliceShape::HorizontalEdge
        } else if vertical {
            SliceShape::VerticalEdge
        } else {
            SliceShape::Convex
        }
    }

    /// Index of the source strip tile this shape is cut from.
    pub const fn source_tile(self) -> u32 {
        self as u32
    }
}
