//! Mask-to-sprite lookup tables and the shared handle that swaps them.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use log::debug;
use thiserror::Error;

use blobtile_core::{parse_variant_sprite_name, NeighborMask, SpriteRegion, TilesetManifest};

/// Errors from building or querying a [`VariantTable`].
#[derive(Debug, Error)]
pub enum VariantTableError {
    #[error("Sprite name '{name}' does not encode a mask value")]
    MalformedVariantName { name: String },
    #[error("More than one sprite encodes mask {mask}")]
    DuplicateVariant { mask: NeighborMask },
    #[error("No sprite registered for mask {mask}")]
    UnknownVariant { mask: NeighborMask },
}

/// Immutable mapping from neighbor masks to atlas sprites.
///
/// Built once from a manifest and then only read. Replacing a tileset means
/// building a new table, never mutating a live one.
#[derive(Debug, Clone, Default)]
pub struct VariantTable {
    sprites: HashMap<NeighborMask, SpriteRegion>,
}

impl VariantTable {
    /// A table with no sprites. Every lookup fails until a real table is
    /// installed; useful as the pre-synthesis placeholder.
    pub fn empty() -> VariantTable {
        VariantTable::default()
    }

    /// Index a manifest's sprites by the mask their name encodes.
    pub fn from_manifest(manifest: &TilesetManifest) -> Result<VariantTable, VariantTableError> {
        VariantTable::from_sprites(manifest.sprites.iter().cloned())
    }

    /// Index arbitrary sprites by the mask their name encodes.
    pub fn from_sprites<I>(sprites: I) -> Result<VariantTable, VariantTableError>
    where
        I: IntoIterator<Item = SpriteRegion>,
    {
        let mut table = HashMap::new();
        for sprite in sprites {
            let mask = parse_variant_sprite_name(&sprite.name).ok_or_else(|| {
                VariantTableError::MalformedVariantName {
                    name: sprite.name.clone(),
                }
            })?;
            if table.insert(mask, sprite).is_some() {
                return Err(VariantTableError::DuplicateVariant { mask });
            }
        }
        Ok(VariantTable { sprites: table })
    }

    /// The sprite rendering `mask`, or [`VariantTableError::UnknownVariant`]
    /// if the mask has no entry.
    pub fn lookup(&self, mask: NeighborMask) -> Result<&SpriteRegion, VariantTableError> {
        self.sprites
            .get(&mask)
            .ok_or(VariantTableError::UnknownVariant { mask })
    }

    pub fn contains(&self, mask: NeighborMask) -> bool {
        self.sprites.contains_key(&mask)
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}

/// Cloneable handle to the currently installed [`VariantTable`].
///
/// Selection runs on whatever table a caller snapshots with
/// [`SharedVariantTable::load`]; installing a replacement swaps the whole
/// table behind the handle without disturbing snapshots already taken.
#[derive(Debug, Clone)]
pub struct SharedVariantTable {
    inner: Arc<RwLock<Arc<VariantTable>>>,
}

impl SharedVariantTable {
    /// A handle starting from the empty table.
    pub fn empty() -> SharedVariantTable {
        SharedVariantTable::from_table(VariantTable::empty())
    }

    pub fn from_table(table: VariantTable) -> SharedVariantTable {
        SharedVariantTable {
            inner: Arc::new(RwLock::new(Arc::new(table))),
        }
    }

    /// Snapshot the installed table. The snapshot stays coherent even if a
    /// replacement is installed while it is in use.
    pub fn load(&self) -> Arc<VariantTable> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the installed table wholesale.
    pub fn install(&self, table: VariantTable) {
        debug!("Installing variant table with {} sprites", table.len());
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::new(table);
    }
}

impl Default for SharedVariantTable {
    fn default() -> SharedVariantTable {
        SharedVariantTable::empty()
    }
}
