//! SVG flag data embedded at compile time.
//!
//! The host owns decoding and registration; this module only hands out the
//! raw bytes in catalog order.

use super::WorldRegion;

const FLAG_US: &[u8] = include_bytes!("../../assets/icons/flags/us.svg");
const FLAG_GB: &[u8] = include_bytes!("../../assets/icons/flags/gb.svg");
const FLAG_AU: &[u8] = include_bytes!("../../assets/icons/flags/au.svg");
const FLAG_DE: &[u8] = include_bytes!("../../assets/icons/flags/de.svg");

// Fallback for regions without a dedicated flag
const FLAG_GLOBE: &[u8] = include_bytes!("../../assets/icons/flags/globe.svg");

/// Get the embedded flag image for a catalog entry.
pub fn flag_image(region: WorldRegion) -> &'static [u8] {
    match region {
        WorldRegion::UnitedStates => FLAG_US,
        WorldRegion::UnitedKingdom => FLAG_GB,
        WorldRegion::Australia => FLAG_AU,
        WorldRegion::Germany => FLAG_DE,
        WorldRegion::Unknown => FLAG_GLOBE,
    }
}
