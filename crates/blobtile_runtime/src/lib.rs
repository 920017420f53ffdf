//! Query-time variant selection for blob auto-tiling.
//!
//! Given read access to the host's tile storage, [`AutoTile`] computes the
//! neighbor mask for a cell, resolves it to a sprite through the installed
//! [`VariantTable`], and reports which cells an edit dirties.
//!
//! Map storage stays on the host side: implement [`TileGrid`] over whatever
//! structure holds the cells and [`RefreshSink`] over whatever schedules
//! redraws.

pub mod selector;
pub mod table;

pub use selector::{AutoTile, RefreshSink, TileGrid, TileKindId};
pub use table::{SharedVariantTable, VariantTable, VariantTableError};

pub use blobtile_core;
