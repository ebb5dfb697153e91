//! Domain model: panel surfaces, host events and process-wide state

use crate::flags::RegionFlagCatalog;

/// One of the four member-list surfaces whose rows mix player names and
/// numeric world identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelKind {
    ChatChannel,
    ClanChannel,
    GuestChannel,
    Friends,
}

impl PanelKind {
    /// All panels, in a fixed order. Used for "apply to everything" sweeps.
    pub const ALL: [PanelKind; 4] = [
        PanelKind::ChatChannel,
        PanelKind::ClanChannel,
        PanelKind::GuestChannel,
        PanelKind::Friends,
    ];
}

/// Host session state as far as this system cares about it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    LoggedIn,
    LoggedOut,
}

/// Notifications the host delivers to the controller.
///
/// Producers on other threads hand these to an [`EventHandle`]; the host's
/// update thread drains them in arrival order (see [`EventQueue`]).
///
/// [`EventHandle`]: crate::queue::EventHandle
/// [`EventQueue`]: crate::queue::EventQueue
#[derive(Debug, Clone)]
pub enum HostEvent {
    /// The system has been started while the client is already up.
    Startup,
    /// The session entered or left the fully-logged-in state.
    SessionStateChanged(SessionState),
    /// One of the host's settings changed.
    ConfigChanged { group: String, key: String },
    /// The host rebuilt a panel's child list. Carries the opaque source id
    /// of the rebuild routine; unknown ids are ignored.
    PanelRebuilt { source_id: u32 },
    /// The system is being stopped; every panel must be left plain.
    Shutdown,
}

/// Process-wide annotation state.
///
/// Holds the flag catalog, which in turn remembers the icon-table base
/// offset once the icons have been installed. Per-panel toggles are read
/// fresh from the settings store on every decision and are deliberately
/// not cached here.
pub struct WorldFlags {
    pub catalog: RegionFlagCatalog,
}

impl WorldFlags {
    pub fn new() -> Self {
        Self {
            catalog: RegionFlagCatalog::new(),
        }
    }
}

impl Default for WorldFlags {
    fn default() -> Self {
        Self::new()
    }
}
