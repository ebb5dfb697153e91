//! Region flag catalog - flag icons for the world regions.
//!
//! Maps the region codes reported by the world directory to flag icons and
//! owns the one-time installation of those icons into the host's shared
//! icon table.

mod region_mapping;
mod sprite_data;

pub use region_mapping::region_for_code;
pub use sprite_data::flag_image;

use tracing::info;

use crate::host::IconTable;

/// World regions that have a dedicated flag icon, plus a globe fallback.
///
/// Discriminants double as the entry's position within the catalog: an
/// entry installs at `base + (region as usize)`. The ordering is part of
/// the crate's contract and must not change within a process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorldRegion {
    UnitedStates = 0,
    UnitedKingdom = 1,
    Australia = 2,
    Germany = 3,
    /// Fallback for region codes without a dedicated flag.
    Unknown = 4,
}

impl WorldRegion {
    /// Catalog order, leftmost entry installs first.
    pub const ALL: [WorldRegion; 5] = [
        WorldRegion::UnitedStates,
        WorldRegion::UnitedKingdom,
        WorldRegion::Australia,
        WorldRegion::Germany,
        WorldRegion::Unknown,
    ];
}

/// Immutable table of region flag icons and the offset at which they were
/// installed into the host icon table.
///
/// The base offset starts unset and is recorded exactly once per session by
/// [`RegionFlagCatalog::install_into`]; only a process restart resets it.
pub struct RegionFlagCatalog {
    base: Option<usize>,
}

impl RegionFlagCatalog {
    pub fn new() -> Self {
        Self { base: None }
    }

    /// Number of icons the catalog contributes to the host table.
    pub fn icon_count(&self) -> usize {
        WorldRegion::ALL.len()
    }

    /// Position of the region's entry within the catalog for a raw region
    /// code. Codes without a dedicated flag resolve to the globe entry.
    pub fn offset_of(&self, region_code: i32) -> usize {
        region_for_code(region_code) as usize
    }

    /// Base index of the catalog's icons in the host table, if installed.
    pub fn base(&self) -> Option<usize> {
        self.base
    }

    /// Append the catalog's icon images to the host icon table and record
    /// where they landed. Safe to call on every session start: once a base
    /// offset is recorded, later calls return it without touching the table.
    pub fn install_into(&mut self, table: &mut dyn IconTable) -> usize {
        if let Some(base) = self.base {
            return base;
        }

        let base = table.icon_count();
        let images: Vec<&'static [u8]> = WorldRegion::ALL
            .iter()
            .map(|region| flag_image(*region))
            .collect();
        table.append(&images);
        self.base = Some(base);

        info!(base, count = images.len(), "installed region flag icons");
        base
    }
}

impl Default for RegionFlagCatalog {
    fn default() -> Self {
        Self::new()
    }
}
