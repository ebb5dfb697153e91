//! Region code to flag mapping.
//!
//! Maps the small integer region codes reported by the world directory
//! (0 = US, 1 = GB, 3 = AU, 7 = DE) to catalog entries.

use super::WorldRegion;

/// Map a raw region code to its flag entry.
///
/// Returns [`WorldRegion::Unknown`] for codes without a dedicated flag
/// (shows the globe fallback icon).
pub fn region_for_code(code: i32) -> WorldRegion {
    match code {
        0 => WorldRegion::UnitedStates,
        1 => WorldRegion::UnitedKingdom,
        3 => WorldRegion::Australia,
        7 => WorldRegion::Germany,
        _ => WorldRegion::Unknown,
    }
}
