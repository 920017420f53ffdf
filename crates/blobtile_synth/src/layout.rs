//! Pixel geometry of the source strip and the output atlas.

use blobtile_core::{Quadrant, SliceShape, SpriteRect};
use thiserror::Error;

/// Number of tiles in a source strip, one per [`SliceShape`].
pub const SOURCE_TILE_COUNT: u32 = SliceShape::COUNT as u32;

/// Tiles per atlas row. A 7x7 slot grid is the smallest square that holds
/// all 47 variants.
pub const ATLAS_COLUMNS: u32 = 7;

/// Errors produced while synthesizing a tileset from a source strip.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SynthesisError {
    #[error(
        "Invalid source dimensions {width}x{height}: expected a strip of five square tiles \
         with an even tile size"
    )]
    InvalidSourceDimensions { width: u32, height: u32 },
}

/// Validated dimensions of a five-tile source strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripGeometry {
    /// Edge length of one tile; equals the strip height.
    pub tile_size: u32,
}

impl StripGeometry {
    /// Derive the tile size from a strip image's dimensions.
    ///
    /// The strip must be exactly five square tiles laid out horizontally,
    /// and the tile size must be even so tiles split cleanly into quadrant
    /// blocks.
    pub fn from_image_dims(width: u32, height: u32) -> Result<StripGeometry, SynthesisError> {
        if height == 0 || height % 2 != 0 || width != height * SOURCE_TILE_COUNT {
            return Err(SynthesisError::InvalidSourceDimensions { width, height });
        }
        Ok(StripGeometry { tile_size: height })
    }

    /// Edge length of one quadrant block.
    pub fn half(self) -> u32 {
        self.tile_size / 2
    }

    /// Pixel origin of `quadrant`'s block inside source tile `shape`.
    pub fn source_origin(self, shape: SliceShape, quadrant: Quadrant) -> (u32, u32) {
        let (qx, qy) = quadrant.pixel_offset(self.half());
        (shape.source_tile() * self.tile_size + qx, qy)
    }
}

/// Slot grid of the output atlas.
///
/// Slots are numbered row-major from the top-left and assigned to variants
/// in ascending mask order. The atlas is a power-of-two square so engines
/// with strict texture requirements can use it unmodified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtlasLayout {
    pub tile_size: u32,
    /// Atlas edge length in pixels.
    pub size: u32,
}

impl AtlasLayout {
    /// Smallest power-of-two square that fits the 7x7 slot grid at
    /// `tile_size`.
    pub fn for_tile_size(tile_size: u32) -> AtlasLayout {
        AtlasLayout {
            tile_size,
            size: (tile_size * ATLAS_COLUMNS).next_power_of_two(),
        }
    }

    /// Pixel origin of an atlas slot.
    pub fn slot_origin(self, slot: u32) -> (u32, u32) {
        (
            (slot % ATLAS_COLUMNS) * self.tile_size,
            (slot / ATLAS_COLUMNS) * self.tile_size,
        )
    }

    /// Full pixel rectangle of an atlas slot.
    pub fn slot_rect(self, slot: u32) -> SpriteRect {
        let (x, y) = self.slot_origin(slot);
        SpriteRect::new(x, y, self.tile_size, self.tile_size)
    }
}
