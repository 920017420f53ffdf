//! Core data structures for blob auto-tiling.
//!
//! A blob tileset renders a terrain kind with 47 tile variants, one per
//! valid combination of same-kind neighbors. This crate defines the shared
//! vocabulary the synthesis and runtime crates build on:
//!
//! - [`NeighborMask`]: the 8-bit neighbor encoding and its validity rule
//! - [`Quadrant`] / [`SliceShape`]: how variants decompose into quarter
//!   blocks cut from a five-tile source strip
//! - [`TilesetManifest`]: the serialized atlas description, including the
//!   `Sprite <mask>` naming contract

pub mod manifest;
pub mod mask;
pub mod slice;

pub use manifest::{
    parse_variant_sprite_name, variant_sprite_name, ManifestError, SpriteRect, SpriteRegion,
    TilesetManifest, SPRITE_NAME_PREFIX,
};
pub use mask::{compute_mask, neighbors, Diagonal, NeighborMask, VALID_VARIANT_COUNT};
pub use slice::{Quadrant, SliceShape};
