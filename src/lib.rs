//! Flag annotation for the world numbers in a client's social panels.
//!
//! Rows in the chat-channel, clan-channel, guest-channel and friends lists
//! show which world each player is on as a plain label (`"W42"`,
//! `"World 42"`). This crate swaps those labels for icon-tagged ones
//! (`"42 <img=103>"`) carrying the flag of the region hosting the world,
//! and restores the plain form on demand.
//!
//! The host supplies its widget tree, shared icon table, world-directory
//! snapshot and settings store through the [`HostClient`], [`WorldLookup`]
//! and [`FlagSettings`] traits. Threads that observe host notifications
//! submit [`HostEvent`]s through an
//! [`EventHandle`]; the host's update thread calls [`EventQueue::drain`]
//! once per tick and feeds each event to [`update`], which installs the
//! [`RegionFlagCatalog`] icons when the host is ready and runs
//! [`annotate`]/[`revert`] over the affected panels. On shutdown, submit
//! [`HostEvent::Shutdown`] and drain once more so every panel is left in
//! its native plain form.

mod config;
mod flags;
mod host;
mod model;
mod panels;
mod queue;
mod rewrite;
mod update;

#[cfg(test)]
mod testutil;

pub use config::{
    panel_for_key, WorldFlagsConfig, CONFIG_GROUP, KEY_CHAT_CHANNEL, KEY_CLAN_CHANNEL,
    KEY_FRIENDS, KEY_GUEST_CHANNEL,
};
pub use flags::{flag_image, region_for_code, RegionFlagCatalog, WorldRegion};
pub use host::{FlagSettings, HostClient, IconTable, PanelLabels, WorldLookup};
pub use model::{HostEvent, PanelKind, SessionState, WorldFlags};
pub use panels::{profile, profile_for_source, PanelProfile, STRIDE};
pub use queue::{channel, EventHandle, EventQueue, QueueClosed};
pub use rewrite::{annotate, revert, strip_style_tags};
pub use update::update;
