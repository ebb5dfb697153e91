//! Controller logic: decide, per host event, which panels get annotated
//! or reverted.

use tracing::{debug, trace};

use crate::config;
use crate::host::{FlagSettings, HostClient, WorldLookup};
use crate::model::{HostEvent, PanelKind, SessionState, WorldFlags};
use crate::panels;
use crate::rewrite;

/// Handle one host event to completion.
///
/// Must run on the host's update thread; every panel and icon-table
/// mutation happens synchronously inside this call. Toggles are re-read
/// from `settings` at the moment of each decision.
pub fn update(
    flags: &mut WorldFlags,
    host: &mut dyn HostClient,
    lookup: &dyn WorldLookup,
    settings: &dyn FlagSettings,
    event: HostEvent,
) {
    trace!(?event, "handling host event");
    match event {
        // Fresh start and reconnect take the same path: make sure the icons
        // are in the host table, then re-apply every panel's decision.
        HostEvent::Startup | HostEvent::SessionStateChanged(SessionState::LoggedIn) => {
            install_icons(flags, host);
            for kind in PanelKind::ALL {
                apply_panel(flags, host, lookup, settings, kind, false);
            }
        }
        HostEvent::SessionStateChanged(_) => {}
        HostEvent::ConfigChanged { group, key } => {
            if group != config::CONFIG_GROUP {
                return;
            }
            if let Some(kind) = config::panel_for_key(&key) {
                apply_panel(flags, host, lookup, settings, kind, false);
            }
        }
        HostEvent::PanelRebuilt { source_id } => {
            if let Some(profile) = panels::profile_for_source(source_id) {
                apply_panel(flags, host, lookup, settings, profile.kind, false);
            }
        }
        HostEvent::Shutdown => {
            for kind in PanelKind::ALL {
                apply_panel(flags, host, lookup, settings, kind, true);
            }
        }
    }
}

/// Extend the host icon table with the flag catalog. Skipped while the
/// host is not ready; retried on the next session start.
fn install_icons(flags: &mut WorldFlags, host: &mut dyn HostClient) {
    let Some(table) = host.icon_table() else {
        debug!("host icon table not available yet");
        return;
    };
    flags.catalog.install_into(table);
}

/// Run one panel's rewrite according to its toggle. With `force_plain` the
/// toggle is ignored and the panel is reverted (shutdown cleanup path).
fn apply_panel(
    flags: &WorldFlags,
    host: &mut dyn HostClient,
    lookup: &dyn WorldLookup,
    settings: &dyn FlagSettings,
    kind: PanelKind,
    force_plain: bool,
) {
    let profile = panels::profile(kind);
    let Some(panel) = host.panel(kind) else {
        debug!(panel = ?kind, "panel widget absent, nothing to rewrite");
        return;
    };

    if !force_plain && settings.show_flags(kind) {
        let rewritten = rewrite::annotate(panel, profile, lookup, &flags.catalog);
        debug!(panel = ?kind, rewritten, "annotated world labels");
    } else {
        let restored = rewrite::revert(panel, profile);
        debug!(panel = ?kind, restored, "restored plain world labels");
    }
}
