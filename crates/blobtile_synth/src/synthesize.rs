//! The pixel pass: crop quadrant blocks out of the source strip and paste
//! them into every atlas slot that needs them, then describe the result in
//! a manifest.

use image::{imageops, RgbaImage};
use log::info;

use blobtile_core::{variant_sprite_name, SpriteRegion, TilesetManifest};

use crate::layout::{AtlasLayout, StripGeometry, SynthesisError};
use crate::plan::SynthesisPlan;

/// A generated atlas plus the manifest that addresses it.
#[derive(Debug, Clone)]
pub struct SynthesizedTileset {
    pub atlas: RgbaImage,
    pub manifest: TilesetManifest,
}

impl SynthesizedTileset {
    /// Expand a five-tile source strip into the full 47-variant atlas.
    ///
    /// The strip must hold the convex, vertical-edge, horizontal-edge,
    /// concave and interior tiles left to right, each a square of even
    /// edge length. Output pixels are a pure function of the input: the
    /// same strip always produces a byte-identical atlas.
    pub fn from_strip(
        name: &str,
        source: &RgbaImage,
    ) -> Result<SynthesizedTileset, SynthesisError> {
        let geometry = StripGeometry::from_image_dims(source.width(), source.height())?;
        let layout = AtlasLayout::for_tile_size(geometry.tile_size);
        let plan = SynthesisPlan::build();
        let half = geometry.half();

        // Slots not covered by a route keep their zeroed (transparent)
        // pixels, including the unused tail of the 7x7 grid.
        let mut atlas = RgbaImage::new(layout.size, layout.size);
        for (key, placements) in &plan.routes {
            let (source_x, source_y) = geometry.source_origin(key.shape, key.quadrant);
            let block = imageops::crop_imm(source, source_x, source_y, half, half).to_image();
            for placement in placements {
                let (slot_x, slot_y) = layout.slot_origin(placement.slot);
                let (quadrant_x, quadrant_y) = placement.quadrant.pixel_offset(half);
                imageops::replace(
                    &mut atlas,
                    &block,
                    (slot_x + quadrant_x) as i64,
                    (slot_y + quadrant_y) as i64,
                );
            }
        }

        let mut manifest =
            TilesetManifest::new(name.to_string(), geometry.tile_size, layout.size, layout.size);
        for variant in &plan.variants {
            manifest.sprites.push(SpriteRegion {
                name: variant_sprite_name(variant.mask),
                rect: layout.slot_rect(variant.slot),
                pivot: [0.5, 0.5],
                pixels_per_unit: geometry.tile_size,
            });
        }

        info!(
            "Synthesized tileset '{}': {} variants, {}x{} atlas",
            name,
            manifest.sprites.len(),
            layout.size,
            layout.size
        );

        Ok(SynthesizedTileset { atlas, manifest })
    }
}
