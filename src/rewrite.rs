//! The label rewrite engine.
//!
//! Swaps a panel's plain world labels for icon-tagged ones and back,
//! walking the world-bearing slots at the profile's start/stride positions.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, error};

use crate::flags::RegionFlagCatalog;
use crate::host::{PanelLabels, WorldLookup};
use crate::panels::{PanelProfile, STRIDE};

// Color markup the client embeds in list labels, e.g. "<col=9f9f9f>".
static STYLE_TAGS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?col(=[0-9a-z]{6})*>").unwrap());

// An annotated slot: world digits, optional space, exactly one icon reference.
static ANNOTATED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d+)\s?<img=\d+>$").unwrap());

/// Remove color markup from a label, leaving visible characters and icon
/// markup untouched.
pub fn strip_style_tags(text: &str) -> Cow<'_, str> {
    STYLE_TAGS.replace_all(text, "")
}

/// Replace every recognized plain world label in the panel with an
/// icon-tagged one. Returns the number of slots rewritten.
///
/// Slots that are already annotated, hold something other than a world
/// label, or name a world missing from the lookup snapshot are left
/// untouched; the first of those guards is what makes annotate idempotent.
/// A complete no-op while the catalog has not been installed into the host
/// icon table.
pub fn annotate(
    panel: &mut dyn PanelLabels,
    profile: &PanelProfile,
    lookup: &dyn WorldLookup,
    catalog: &RegionFlagCatalog,
) -> usize {
    let Some(base) = catalog.base() else {
        debug!(panel = ?profile.kind, "flag icons not installed, skipping annotate");
        return 0;
    };

    let mut rewritten = 0;
    let mut index = profile.start;
    while index < panel.slot_count() {
        if let Some(text) = annotated_text(&*panel, profile, lookup, catalog, base, index) {
            panel.set_text(index, text);
            rewritten += 1;
        }
        index += STRIDE;
    }
    rewritten
}

fn annotated_text(
    panel: &dyn PanelLabels,
    profile: &PanelProfile,
    lookup: &dyn WorldLookup,
    catalog: &RegionFlagCatalog,
    base: usize,
    index: usize,
) -> Option<String> {
    let raw = panel.text(index)?;
    let plain = strip_style_tags(raw);
    let digits = profile.plain_world_digits(&plain)?;

    let world: u32 = match digits.parse() {
        Ok(world) => world,
        Err(err) => {
            error!(slot = index, label = %plain, %err, "world label matched but did not parse");
            return None;
        }
    };

    let region_code = lookup.region_code(world)?;
    let icon = base + catalog.offset_of(region_code);
    Some(format!("{world} <img={icon}>"))
}

/// Restore every annotated slot in the panel to the panel's plain label
/// form. Returns the number of slots restored.
///
/// Only slots whose stripped text is exactly an annotated world label and
/// whose name field is blank are touched; anything else is not a data row
/// this system wrote.
pub fn revert(panel: &mut dyn PanelLabels, profile: &PanelProfile) -> usize {
    let mut restored = 0;
    let mut index = profile.start;
    while index < panel.slot_count() {
        if let Some(text) = reverted_text(&*panel, profile, index) {
            panel.set_text(index, text);
            restored += 1;
        }
        index += STRIDE;
    }
    restored
}

fn reverted_text(panel: &dyn PanelLabels, profile: &PanelProfile, index: usize) -> Option<String> {
    if !panel.name(index).is_some_and(str::is_empty) {
        return None;
    }
    let raw = panel.text(index)?;
    let plain = strip_style_tags(raw);
    let caps = ANNOTATED.captures(&plain)?;
    Some(format!("{}{}", profile.prefix, &caps[1]))
}
