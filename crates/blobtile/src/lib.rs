//! Blob auto-tiling toolkit.
//!
//! Expands a five-tile source strip into the full 47-variant blob tileset
//! offline, then selects the right variant for every map cell at runtime
//! from its eight neighbors.
//!
//! The work is split across three crates, re-exported here:
//!
//! - `blobtile_core`: neighbor masks, quadrant slices, manifests
//! - `blobtile_synth`: atlas synthesis (behind the `synth` feature, on by
//!   default)
//! - `blobtile_runtime`: grid queries and sprite resolution
//!
//! # Example
//!
//! ```rust,ignore
//! use blobtile::prelude::*;
//!
//! // Offline: expand the strip and persist atlas + manifest.
//! let strip = image::open("grass_strip.png")?.to_rgba8();
//! let tileset = SynthesizedTileset::from_strip("grass", &strip)?;
//!
//! // Runtime: install the manifest and select variants per cell.
//! let table = SharedVariantTable::empty();
//! table.install(VariantTable::from_manifest(&tileset.manifest)?);
//! let grass = AutoTile::new("grass".to_string(), table);
//! let sprite = grass.sprite(&map, x, y)?;
//! ```

pub use blobtile_core;
pub use blobtile_runtime;
#[cfg(feature = "synth")]
pub use blobtile_synth;

pub use blobtile_core::{
    compute_mask, neighbors, parse_variant_sprite_name, variant_sprite_name, Diagonal,
    ManifestError, NeighborMask, Quadrant, SliceShape, SpriteRect, SpriteRegion, TilesetManifest,
    VALID_VARIANT_COUNT,
};
pub use blobtile_runtime::{
    AutoTile, RefreshSink, SharedVariantTable, TileGrid, TileKindId, VariantTable,
    VariantTableError,
};
#[cfg(feature = "synth")]
pub use blobtile_synth::{SynthesisError, SynthesizedTileset};

/// Common imports for working with blob tilesets.
pub mod prelude {
    pub use blobtile_core::{NeighborMask, Quadrant, SliceShape, SpriteRegion, TilesetManifest};
    pub use blobtile_runtime::{
        AutoTile, RefreshSink, SharedVariantTable, TileGrid, TileKindId, VariantTable,
    };
    #[cfg(feature = "synth")]
    pub use blobtile_synth::{SynthesisError, SynthesizedTileset};
}
