//! Variant selection: read the neighborhood, compute the mask, resolve the
//! sprite.
//!
//! The selector owns no map data. It sees the world through the
//! [`TileGrid`] trait and hands recompute requests back through
//! [`RefreshSink`], so any storage with cell lookup can drive it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use blobtile_core::{compute_mask, NeighborMask, SpriteRegion};

use crate::table::{SharedVariantTable, VariantTableError};

/// Identity of an auto-tile kind. Two cells connect visually exactly when
/// their kinds compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileKindId(pub Uuid);

impl TileKindId {
    pub fn new() -> TileKindId {
        TileKindId(Uuid::new_v4())
    }
}

impl Default for TileKindId {
    fn default() -> TileKindId {
        TileKindId::new()
    }
}

/// Read access to the host's tile storage.
///
/// Implementations decide what lies outside their bounds; returning `None`
/// there makes terrain draw a silhouette edge along the map border.
pub trait TileGrid {
    /// The auto-tile kind occupying `(x, y)`, or `None` for empty cells and
    /// cells holding non-auto content.
    fn occupant(&self, x: i32, y: i32) -> Option<TileKindId>;
}

/// Receives recompute requests when an edit dirties nearby cells.
pub trait RefreshSink {
    /// Ask the host to re-select the variant rendered at `(x, y)`.
    fn request_recompute(&mut self, x: i32, y: i32);
}

/// One auto-tile kind bound to its variant table.
#[derive(Debug, Clone)]
pub struct AutoTile {
    pub id: TileKindId,
    pub name: String,
    table: SharedVariantTable,
}

impl AutoTile {
    pub fn new(name: String, table: SharedVariantTable) -> AutoTile {
        AutoTile {
            id: TileKindId::new(),
            name,
            table,
        }
    }

    /// The variant table handle this kind resolves sprites against.
    pub fn table(&self) -> &SharedVariantTable {
        &self.table
    }

    fn is_same_kind(&self, grid: &impl TileGrid, x: i32, y: i32) -> bool {
        grid.occupant(x, y) == Some(self.id)
    }

    /// Compute the neighbor mask for the cell at `(x, y)`.
    ///
    /// The mask is the variant identity: callers index their resources by
    /// it directly. The result is always valid, corners that lack an edge
    /// are never set.
    pub fn select_variant(&self, grid: &impl TileGrid, x: i32, y: i32) -> NeighborMask {
        compute_mask(x, y, |nx, ny| self.is_same_kind(grid, nx, ny))
    }

    /// Select the variant at `(x, y)` and resolve it to a sprite.
    ///
    /// Fails with [`VariantTableError::UnknownVariant`] when no tileset has
    /// been installed yet or the installed one is incomplete; the cell
    /// simply keeps its previous appearance until a complete table lands.
    pub fn sprite(
        &self,
        grid: &impl TileGrid,
        x: i32,
        y: i32,
    ) -> Result<SpriteRegion, VariantTableError> {
        let mask = self.select_variant(grid, x, y);
        let table = self.table.load();
        table.lookup(mask).map(|sprite| sprite.clone())
    }

    /// After an edit at `(x, y)`, request a recompute for every same-kind
    /// cell in the 3x3 block around it, the edited cell included.
    ///
    /// An edit can only change masks within that block, so this is the
    /// complete dirty set.
    pub fn refresh_neighborhood(
        &self,
        grid: &impl TileGrid,
        sink: &mut impl RefreshSink,
        x: i32,
        y: i32,
    ) {
        for dy in -1..=1 {
            for dx in -1..=1 {
                if self.is_same_kind(grid, x + dx, y + dy) {
                    sink.request_recompute(x + dx, y + dy);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::VariantTable;
    use blobtile_core::{neighbors, variant_sprite_name, SpriteRect};
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};
    use std::collections::HashSet;

    struct MapGrid {
        kind: TileKindId,
        cells: HashSet<(i32, i32)>,
    }

    impl MapGrid {
        fn new(kind: TileKindId, cells: &[(i32, i32)]) -> MapGrid {
            MapGrid {
                kind,
                cells: cells.iter().copied().collect(),
            }
        }
    }

    impl TileGrid for MapGrid {
        fn occupant(&self, x: i32, y: i32) -> Option<TileKindId> {
            self.cells.contains(&(x, y)).then_some(self.kind)
        }
    }

    struct RecordingSink {
        requests: Vec<(i32, i32)>,
    }

    impl RefreshSink for RecordingSink {
        fn request_recompute(&mut self, x: i32, y: i32) {
            self.requests.push((x, y));
        }
    }

    fn sample_tile() -> AutoTile {
        AutoTile::new("Grass".to_string(), SharedVariantTable::empty())
    }

    #[test]
    fn isolated_cell_selects_the_empty_variant() {
        let tile = sample_tile();
        let grid = MapGrid::new(tile.id, &[(0, 0)]);
        assert_eq!(tile.select_variant(&grid, 0, 0), NeighborMask::EMPTY);
    }

    #[test]
    fn cardinal_cross_selects_edges_without_corners() {
        let tile = sample_tile();
        let grid = MapGrid::new(tile.id, &[(0, 0), (0, 1), (0, -1), (-1, 0), (1, 0)]);
        assert_eq!(tile.select_variant(&grid, 0, 0).bits(), 90);
    }

    #[test]
    fn full_block_selects_the_full_variant() {
        let tile = sample_tile();
        let mut cells = Vec::new();
        for y in -1..=1 {
            for x in -1..=1 {
                cells.push((x, y));
            }
        }
        let grid = MapGrid::new(tile.id, &cells);
        assert_eq!(tile.select_variant(&grid, 0, 0), NeighborMask::FULL);
    }

    #[test]
    fn diagonal_without_supporting_edges_is_invisible() {
        let tile = sample_tile();
        // West neighbor and an occupied north-west cell, but no north
        // neighbor: the corner must not register.
        let grid = MapGrid::new(tile.id, &[(0, 0), (-1, 0), (-1, 1)]);
        assert_eq!(tile.select_variant(&grid, 0, 0).bits(), neighbors::W);
    }

    #[test]
    fn other_kinds_do_not_connect() {
        let grass = sample_tile();
        let water = sample_tile();
        struct TwoKinds {
            grass: TileKindId,
            water: TileKindId,
        }
        impl TileGrid for TwoKinds {
            fn occupant(&self, x: i32, y: i32) -> Option<TileKindId> {
                match (x, y) {
                    (0, 0) => Some(self.grass),
                    (1, 0) => Some(self.water),
                    (-1, 0) => Some(self.grass),
                    _ => None,
                }
            }
        }
        let grid = TwoKinds {
            grass: grass.id,
            water: water.id,
        };
        assert_eq!(grass.select_variant(&grid, 0, 0).bits(), neighbors::W);
    }

    #[test]
    fn random_grids_only_select_valid_variants() {
        let tile = sample_tile();
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..100 {
            let mut cells = Vec::new();
            for y in 0..8 {
                for x in 0..8 {
                    if rng.gen_bool(0.6) {
                        cells.push((x, y));
                    }
                }
            }
            let grid = MapGrid::new(tile.id, &cells);
            for &(x, y) in &cells {
                let mask = tile.select_variant(&grid, x, y);
                assert!(mask.is_valid(), "cell ({}, {}) selected invalid mask {}", x, y, mask);
            }
        }
    }

    #[test]
    fn sprite_resolution_fails_softly_before_a_tileset_is_installed() {
        let tile = sample_tile();
        let grid = MapGrid::new(tile.id, &[(0, 0)]);
        assert!(matches!(
            tile.sprite(&grid, 0, 0),
            Err(VariantTableError::UnknownVariant {
                mask: NeighborMask(0)
            })
        ));
    }

    #[test]
    fn sprite_resolution_uses_the_installed_table() {
        let tile = sample_tile();
        let grid = MapGrid::new(tile.id, &[(0, 0), (1, 0)]);

        let sprites = NeighborMask::valid_masks().map(|mask| SpriteRegion {
            name: variant_sprite_name(mask),
            rect: SpriteRect::new(mask.bits() as u32, 0, 16, 16),
            pivot: [0.5, 0.5],
            pixels_per_unit: 16,
        });
        tile.table()
            .install(VariantTable::from_sprites(sprites).unwrap());

        let sprite = tile.sprite(&grid, 0, 0).unwrap();
        assert_eq!(sprite.name, variant_sprite_name(NeighborMask(neighbors::E)));
        assert_eq!(sprite.rect.x, neighbors::E as u32);
    }

    #[test]
    fn refresh_covers_same_kind_cells_in_the_block() {
        let tile = sample_tile();
        // Same-kind cells inside and outside the 3x3 around (0, 0), plus
        // the center itself.
        let grid = MapGrid::new(tile.id, &[(0, 0), (1, 1), (-1, 0), (2, 2), (5, 5)]);
        let mut sink = RecordingSink { requests: Vec::new() };
        tile.refresh_neighborhood(&grid, &mut sink, 0, 0);

        sink.requests.sort_unstable();
        assert_eq!(sink.requests, vec![(-1, 0), (0, 0), (1, 1)]);
    }

    #[test]
    fn refresh_skips_foreign_and_empty_cells() {
        let tile = sample_tile();
        let other = sample_tile();
        struct Mixed {
            mine: TileKindId,
            other: TileKindId,
        }
        impl TileGrid for Mixed {
            fn occupant(&self, x: i32, y: i32) -> Option<TileKindId> {
                match (x, y) {
                    (0, 0) => Some(self.mine),
                    (1, 0) => Some(self.other),
                    _ => None,
                }
            }
        }
        let grid = Mixed {
            mine: tile.id,
            other: other.id,
        };
        let mut sink = RecordingSink { requests: Vec::new() };
        tile.refresh_neighborhood(&grid, &mut sink, 0, 0);
        assert_eq!(sink.requests, vec![(0, 0)]);
    }
}
