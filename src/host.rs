//! Host integration boundary.
//!
//! Everything this system consumes from the surrounding client is expressed
//! here as a trait: the widget tree's label slots, the shared icon table,
//! the world directory snapshot and the settings store. The host wires in
//! concrete implementations; tests use in-memory fakes.

use crate::model::PanelKind;

/// A panel's child list of label slots.
///
/// Each slot is a mutable text cell owned by the host; the rewrite engine
/// only reads the name and text fields and overwrites text. Slots are never
/// created or destroyed through this trait.
pub trait PanelLabels {
    /// Number of child slots the panel currently has.
    fn slot_count(&self) -> usize;

    /// The slot's name field. `None` for an index out of range.
    fn name(&self, index: usize) -> Option<&str>;

    /// The slot's display text, markup included. `None` for an index out
    /// of range.
    fn text(&self, index: usize) -> Option<&str>;

    /// Overwrite the slot's display text.
    fn set_text(&mut self, index: usize, text: String);
}

/// The host's shared, append-only icon resource table.
///
/// Text rendered by the host may reference entries by index through
/// `<img=N>` markup.
pub trait IconTable {
    fn icon_count(&self) -> usize;

    /// Append raw icon images to the end of the table. Decoding the bytes
    /// into sprites is the host's concern.
    fn append(&mut self, images: &[&'static [u8]]);
}

/// Access to the host client's UI state.
pub trait HostClient {
    /// The live label list for a panel, or `None` while the widget does
    /// not exist (panel closed, interface not yet built).
    fn panel(&mut self, panel: PanelKind) -> Option<&mut dyn PanelLabels>;

    /// The shared icon table, or `None` while the host is not ready to
    /// accept icons.
    fn icon_table(&mut self) -> Option<&mut dyn IconTable>;
}

/// Snapshot lookup from world number to region code.
///
/// Implementations are expected to answer from an in-memory snapshot of the
/// world directory, never a blocking network round trip. `None` means the
/// world is not in the current snapshot (stale id, or the list has not
/// loaded yet).
pub trait WorldLookup {
    fn region_code(&self, world: u32) -> Option<i32>;
}

/// Per-panel annotation toggles, backed by the host's settings store.
///
/// Read fresh on every decision; this system never caches the values.
pub trait FlagSettings {
    fn show_flags(&self, panel: PanelKind) -> bool;
}
