//! Offline tileset synthesis for blob auto-tiling.
//!
//! Artists draw five tiles; terrain needs 47. This crate recombines the
//! quadrant blocks of a five-tile source strip into an atlas holding every
//! valid variant, plus a [`blobtile_core::TilesetManifest`] describing it.
//!
//! The strip layout, left to right:
//!
//! ```text
//! | convex | vertical edge | horizontal edge | concave | interior |
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use blobtile_synth::SynthesizedTileset;
//!
//! let strip = image::open("grass_strip.png")?.to_rgba8();
//! let tileset = SynthesizedTileset::from_strip("grass", &strip)?;
//! tileset.atlas.save("grass.png")?;
//! ```

pub mod layout;
pub mod plan;
pub mod synthesize;

pub use layout::{AtlasLayout, StripGeometry, SynthesisError, ATLAS_COLUMNS, SOURCE_TILE_COUNT};
pub use plan::{QuadrantPlacement, SliceKey, SynthesisPlan, VariantPlacement};
pub use synthesize::SynthesizedTileset;

pub use blobtile_core;
