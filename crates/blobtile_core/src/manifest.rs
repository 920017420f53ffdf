//! Serialized description of a synthesized tileset: the atlas dimensions
//! plus one named sprite region per variant.
//!
//! Sprite names carry the variant identity. A region called `Sprite 90`
//! renders neighbor mask 90, and nothing else in the manifest encodes that
//! mapping, so the name format is load-bearing across save files.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::mask::{NeighborMask, VALID_VARIANT_COUNT};

/// Prefix shared by every variant sprite name.
pub const SPRITE_NAME_PREFIX: &str = "Sprite ";

/// Canonical sprite name for a variant: the prefix plus the decimal mask.
pub fn variant_sprite_name(mask: NeighborMask) -> String {
    format!("{}{}", SPRITE_NAME_PREFIX, mask.bits())
}

/// Recover the mask a sprite name encodes, or `None` if the name does not
/// follow the canonical format.
pub fn parse_variant_sprite_name(name: &str) -> Option<NeighborMask> {
    name.strip_prefix(SPRITE_NAME_PREFIX)?
        .parse::<u8>()
        .ok()
        .map(NeighborMask)
}

/// Pixel rectangle within an atlas. Origin is the atlas top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl SpriteRect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> SpriteRect {
        SpriteRect {
            x,
            y,
            width,
            height,
        }
    }

    /// One past the right-most pixel column.
    ///
    /// Widened to `u64`: `x + width` can exceed `u32::MAX` in a hand-edited
    /// manifest, and bounds checks must reject such rects, not wrap.
    pub fn right(&self) -> u64 {
        u64::from(self.x) + u64::from(self.width)
    }

    /// One past the bottom-most pixel row, widened like [`SpriteRect::right`].
    pub fn bottom(&self) -> u64 {
        u64::from(self.y) + u64::from(self.height)
    }
}

/// A named, renderable region of the atlas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteRegion {
    /// Variant identity, formatted by [`variant_sprite_name`].
    pub name: String,
    pub rect: SpriteRect,
    /// Anchor point normalized to the rect, `[0.5, 0.5]` being the center.
    pub pivot: [f32; 2],
    /// World-unit scale; one tile spans one unit when this equals the tile
    /// size.
    pub pixels_per_unit: u32,
}

/// Everything a consumer needs to slice and address a synthesized atlas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TilesetManifest {
    pub id: Uuid,
    pub name: String,
    /// Edge length of one tile in pixels.
    pub tile_size: u32,
    pub atlas_width: u32,
    pub atlas_height: u32,
    #[serde(default)]
    pub sprites: Vec<SpriteRegion>,
}

/// Validation failures for a [`TilesetManifest`].
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Expected {expected} sprites, found {found}")]
    SpriteCountMismatch { expected: usize, found: usize },
    #[error("Sprite name '{name}' does not encode a mask value")]
    MalformedSpriteName { name: String },
    #[error("Mask {mask} sets a corner without both of its edges")]
    InvalidMask { mask: NeighborMask },
    #[error("More than one sprite encodes mask {mask}")]
    DuplicateMask { mask: NeighborMask },
    #[error("Sprite '{name}' overflows the {atlas_width}x{atlas_height} atlas")]
    RectOutOfBounds {
        name: String,
        atlas_width: u32,
        atlas_height: u32,
    },
}

impl TilesetManifest {
    pub fn new(
        name: String,
        tile_size: u32,
        atlas_width: u32,
        atlas_height: u32,
    ) -> TilesetManifest {
        TilesetManifest {
            id: Uuid::new_v4(),
            name,
            tile_size,
            atlas_width,
            atlas_height,
            sprites: Vec::new(),
        }
    }

    /// Check that the manifest describes a complete, well-formed tileset:
    /// one sprite per valid mask, every name decodable, every rect inside
    /// the atlas.
    pub fn validate(&self) -> Result<(), ManifestError> {
        if self.sprites.len() != VALID_VARIANT_COUNT {
            return Err(ManifestError::SpriteCountMismatch {
                expected: VALID_VARIANT_COUNT,
                found: self.sprites.len(),
            });
        }

        let mut seen = HashSet::new();
        for sprite in &self.sprites {
            let mask = parse_variant_sprite_name(&sprite.name).ok_or_else(|| {
                ManifestError::MalformedSpriteName {
                    name: sprite.name.clone(),
                }
            })?;
            if !mask.is_valid() {
                return Err(ManifestError::InvalidMask { mask });
            }
            if !seen.insert(mask) {
                return Err(ManifestError::DuplicateMask { mask });
            }
            if sprite.rect.right() > u64::from(self.atlas_width)
                || sprite.rect.bottom() > u64::from(self.atlas_height)
            {
                return Err(ManifestError::RectOutOfBounds {
                    name: sprite.name.clone(),
                    atlas_width: self.atlas_width,
                    atlas_height: self.atlas_height,
                });
            }
        }

        // 47 decoded masks, all valid, all distinct: exactly the valid set.
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_manifest() -> TilesetManifest {
        let mut manifest = TilesetManifest::new("grass".to_string(), 16, 128, 128);
        for (slot, mask) in NeighborMask::valid_masks().enumerate() {
            let slot = slot as u32;
            manifest.sprites.push(SpriteRegion {
                name: variant_sprite_name(mask),
                rect: SpriteRect::new((slot % 7) * 16, (slot / 7) * 16, 16, 16),
                pivot: [0.5, 0.5],
                pixels_per_unit: 16,
            });
        }
        manifest
    }

    #[test]
    fn test_sprite_names_round_trip_for_every_valid_mask() {
        for mask in NeighborMask::valid_masks() {
            let name = variant_sprite_name(mask);
            assert_eq!(parse_variant_sprite_name(&name), Some(mask));
        }
        assert_eq!(variant_sprite_name(NeighborMask(90)), "Sprite 90");
    }

    #[test]
    fn test_parse_rejects_malformed_names() {
        assert_eq!(parse_variant_sprite_name("Sprite"), None);
        assert_eq!(parse_variant_sprite_name("Sprite "), None);
        assert_eq!(parse_variant_sprite_name("sprite 90"), None);
        assert_eq!(parse_variant_sprite_name("Sprite x"), None);
        assert_eq!(parse_variant_sprite_name("Sprite 256"), None);
        assert_eq!(parse_variant_sprite_name("Sprite -1"), None);
        assert_eq!(parse_variant_sprite_name("Sprite 90 extra"), None);
    }

    #[test]
    fn test_validate_accepts_complete_manifest() {
        assert!(complete_manifest().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_wrong_sprite_count() {
        let mut manifest = complete_manifest();
        manifest.sprites.pop();
        assert!(matches!(
            manifest.validate(),
            Err(ManifestError::SpriteCountMismatch {
                expected: 47,
                found: 46
            })
        ));
    }

    #[test]
    fn test_validate_rejects_undecodable_name() {
        let mut manifest = complete_manifest();
        manifest.sprites[3].name = "Tile 10".to_string();
        assert!(matches!(
            manifest.validate(),
            Err(ManifestError::MalformedSpriteName { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_corner_without_edges() {
        let mut manifest = complete_manifest();
        // Mask 1 is a lone south-west corner.
        manifest.sprites[3].name = "Sprite 1".to_string();
        assert!(matches!(
            manifest.validate(),
            Err(ManifestError::InvalidMask { mask: NeighborMask(1) })
        ));
    }

    #[test]
    fn test_validate_rejects_duplicate_masks() {
        let mut manifest = complete_manifest();
        manifest.sprites[3].name = manifest.sprites[4].name.clone();
        assert!(matches!(
            manifest.validate(),
            Err(ManifestError::DuplicateMask { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_rect_outside_atlas() {
        let mut manifest = complete_manifest();
        manifest.sprites[10].rect.x = 120;
        assert!(matches!(
            manifest.validate(),
            Err(ManifestError::RectOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_rect_extents_do_not_wrap() {
        let rect = SpriteRect::new(u32::MAX - 8, u32::MAX - 4, 16, 16);
        assert_eq!(rect.right(), u64::from(u32::MAX) + 8);
        assert_eq!(rect.bottom(), u64::from(u32::MAX) + 12);
    }

    #[test]
    fn test_validate_rejects_rects_with_overflowing_extents() {
        // Near-maximum fields must surface as errors, not wrap past the
        // atlas bounds.
        let mut manifest = complete_manifest();
        manifest.sprites[10].rect.x = u32::MAX - 8;
        manifest.sprites[10].rect.width = 16;
        assert!(matches!(
            manifest.validate(),
            Err(ManifestError::RectOutOfBounds { .. })
        ));

        let mut manifest = complete_manifest();
        manifest.sprites[10].rect.y = u32::MAX;
        manifest.sprites[10].rect.height = u32::MAX;
        assert!(matches!(
            manifest.validate(),
            Err(ManifestError::RectOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_manifest_survives_json_round_trip() {
        let manifest = complete_manifest();
        let json = serde_json::to_string_pretty(&manifest).unwrap();
        let restored: TilesetManifest = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, manifest);
        assert!(restored.validate().is_ok());
    }
}
