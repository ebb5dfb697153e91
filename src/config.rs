//! Settings surface: the group and key names used by the host's config
//! store, and the serde form of the per-panel toggles.

use serde::{Deserialize, Serialize};

use crate::host::FlagSettings;
use crate::model::PanelKind;

/// Settings group all four toggles live under.
pub const CONFIG_GROUP: &str = "worldflags";

/// Chat channel toggle. The key name predates the clan system rework and
/// is kept for compatibility with stored settings.
pub const KEY_CHAT_CHANNEL: &str = "showClanFlags";
pub const KEY_FRIENDS: &str = "showFriendsFlags";
pub const KEY_CLAN_CHANNEL: &str = "showClanChannelFlags";
pub const KEY_GUEST_CHANNEL: &str = "showGuestChannelFlags";

/// Map a changed settings key to the panel it controls. `None` for keys
/// this system does not own.
pub fn panel_for_key(key: &str) -> Option<PanelKind> {
    match key {
        KEY_CHAT_CHANNEL => Some(PanelKind::ChatChannel),
        KEY_FRIENDS => Some(PanelKind::Friends),
        KEY_CLAN_CHANNEL => Some(PanelKind::ClanChannel),
        KEY_GUEST_CHANNEL => Some(PanelKind::GuestChannel),
        _ => None,
    }
}

/// Per-panel toggles in their stored form.
///
/// Every toggle is on by default, including fields missing from a stored
/// document, so a fresh profile annotates everything.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WorldFlagsConfig {
    #[serde(rename = "showClanFlags", default = "default_true")]
    pub show_chat_channel_flags: bool,
    #[serde(rename = "showFriendsFlags", default = "default_true")]
    pub show_friends_flags: bool,
    #[serde(rename = "showClanChannelFlags", default = "default_true")]
    pub show_clan_channel_flags: bool,
    #[serde(rename = "showGuestChannelFlags", default = "default_true")]
    pub show_guest_channel_flags: bool,
}

fn default_true() -> bool {
    true
}

impl Default for WorldFlagsConfig {
    fn default() -> Self {
        Self {
            show_chat_channel_flags: true,
            show_friends_flags: true,
            show_clan_channel_flags: true,
            show_guest_channel_flags: true,
        }
    }
}

impl FlagSettings for WorldFlagsConfig {
    fn show_flags(&self, panel: PanelKind) -> bool {
        match panel {
            PanelKind::ChatChannel => self.show_chat_channel_flags,
            PanelKind::ClanChannel => self.show_clan_channel_flags,
            PanelKind::GuestChannel => self.show_guest_channel_flags,
            PanelKind::Friends => self.show_friends_flags,
        }
    }
}
