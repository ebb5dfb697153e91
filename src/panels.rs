//! Static descriptors for the four annotated panels.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::PanelKind;

/// Every logical row in these panels spans three consecutive label slots;
/// the profile's start offset selects the slot that holds the world number.
pub const STRIDE: usize = 3;

// Channel lists lay a row out as name, world, rank icon; the friends list
// as name, previous-name icon, world.
static CHANNEL_PLAIN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^W(\d+)$").unwrap());
static FRIENDS_PLAIN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^World\s?(\d+)$").unwrap());

/// Per-panel rewrite conventions.
pub struct PanelProfile {
    pub kind: PanelKind,
    /// Source id the host reports when it rebuilds this panel's child list.
    pub rebuild_source: u32,
    /// Index of the first world-bearing slot.
    pub start: usize,
    /// Text preceding the world number in the panel's plain form.
    pub prefix: &'static str,
    pub(crate) plain: &'static LazyLock<Regex>,
}

impl PanelProfile {
    /// Extract the world-number digits from a markup-stripped label that is
    /// still in the panel's plain form. `None` for anything else: annotated
    /// labels, header rows, player names.
    pub fn plain_world_digits<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.plain
            .captures(text)
            .map(|caps| caps.get(1).map_or("", |m| m.as_str()))
    }
}

static PROFILES: [PanelProfile; 4] = [
    PanelProfile {
        kind: PanelKind::ChatChannel,
        rebuild_source: 1658,
        start: 1,
        prefix: "W",
        plain: &CHANNEL_PLAIN,
    },
    PanelProfile {
        kind: PanelKind::ClanChannel,
        rebuild_source: 4397,
        start: 1,
        prefix: "W",
        plain: &CHANNEL_PLAIN,
    },
    PanelProfile {
        kind: PanelKind::GuestChannel,
        rebuild_source: 4399,
        start: 1,
        prefix: "W",
        plain: &CHANNEL_PLAIN,
    },
    PanelProfile {
        kind: PanelKind::Friends,
        rebuild_source: 631,
        start: 2,
        prefix: "World ",
        plain: &FRIENDS_PLAIN,
    },
];

/// The profile for a panel.
pub fn profile(kind: PanelKind) -> &'static PanelProfile {
    match kind {
        PanelKind::ChatChannel => &PROFILES[0],
        PanelKind::ClanChannel => &PROFILES[1],
        PanelKind::GuestChannel => &PROFILES[2],
        PanelKind::Friends => &PROFILES[3],
    }
}

/// Map a host rebuild-notification source id to a profile. `None` for
/// rebuilds this system does not care about.
pub fn profile_for_source(source_id: u32) -> Option<&'static PanelProfile> {
    PROFILES.iter().find(|p| p.rebuild_source == source_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_ids_map_to_their_panel() {
        assert_eq!(profile_for_source(1658).unwrap().kind, PanelKind::ChatChannel);
        assert_eq!(profile_for_source(4397).unwrap().kind, PanelKind::ClanChannel);
        assert_eq!(profile_for_source(4399).unwrap().kind, PanelKind::GuestChannel);
        assert_eq!(profile_for_source(631).unwrap().kind, PanelKind::Friends);
        assert!(profile_for_source(0).is_none());
        assert!(profile_for_source(4398).is_none());
    }

    #[test]
    fn channel_profile_recognizes_plain_labels() {
        let p = profile(PanelKind::ClanChannel);
        assert_eq!(p.plain_world_digits("W42"), Some("42"));
        assert_eq!(p.plain_world_digits("W302"), Some("302"));
        assert_eq!(p.plain_world_digits("W"), None);
        assert_eq!(p.plain_world_digits("Wab"), None);
        assert_eq!(p.plain_world_digits("42 <img=3>"), None);
        assert_eq!(p.plain_world_digits("Bob"), None);
    }

    #[test]
    fn friends_profile_tolerates_missing_space() {
        let p = profile(PanelKind::Friends);
        assert_eq!(p.plain_world_digits("World 42"), Some("42"));
        assert_eq!(p.plain_world_digits("World42"), Some("42"));
        assert_eq!(p.plain_world_digits("World"), None);
        assert_eq!(p.plain_world_digits("OldWorld 42"), None);
    }

    #[test]
    fn profiles_use_expected_row_layout() {
        assert_eq!(profile(PanelKind::ChatChannel).start, 1);
        assert_eq!(profile(PanelKind::Friends).start, 2);
        assert_eq!(STRIDE, 3);
    }
}
