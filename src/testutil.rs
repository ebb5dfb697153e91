//! In-memory fakes for the host boundary, shared across unit tests.

use std::collections::HashMap;

use crate::host::{FlagSettings, HostClient, IconTable, PanelLabels, WorldLookup};
use crate::model::PanelKind;

/// Install a test subscriber once; later calls are no-ops.
pub(crate) fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init()
        .ok();
}

#[derive(Debug, Clone)]
pub(crate) struct FakeSlot {
    pub name: String,
    pub text: String,
}

/// A panel's child list as a plain vector of slots.
#[derive(Debug, Clone, Default)]
pub(crate) struct FakePanel {
    pub slots: Vec<FakeSlot>,
}

impl FakePanel {
    /// Build from (name, text) pairs.
    pub fn from_rows(rows: &[(&str, &str)]) -> Self {
        Self {
            slots: rows
                .iter()
                .map(|(name, text)| FakeSlot {
                    name: (*name).to_string(),
                    text: (*text).to_string(),
                })
                .collect(),
        }
    }

    pub fn texts(&self) -> Vec<String> {
        self.slots.iter().map(|slot| slot.text.clone()).collect()
    }
}

impl PanelLabels for FakePanel {
    fn slot_count(&self) -> usize {
        self.slots.len()
    }

    fn name(&self, index: usize) -> Option<&str> {
        self.slots.get(index).map(|slot| slot.name.as_str())
    }

    fn text(&self, index: usize) -> Option<&str> {
        self.slots.get(index).map(|slot| slot.text.as_str())
    }

    fn set_text(&mut self, index: usize, text: String) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.text = text;
        }
    }
}

const PLACEHOLDER_ICON: &[u8] = &[];

#[derive(Debug, Default)]
pub(crate) struct FakeIconTable {
    pub icons: Vec<&'static [u8]>,
}

impl FakeIconTable {
    /// A table that already holds `count` host icons.
    pub fn with_existing(count: usize) -> Self {
        Self {
            icons: vec![PLACEHOLDER_ICON; count],
        }
    }
}

impl IconTable for FakeIconTable {
    fn icon_count(&self) -> usize {
        self.icons.len()
    }

    fn append(&mut self, images: &[&'static [u8]]) {
        self.icons.extend_from_slice(images);
    }
}

/// A host client over fake panels and a fake icon table.
#[derive(Default)]
pub(crate) struct FakeHost {
    pub panels: HashMap<PanelKind, FakePanel>,
    /// `None` models a host that is not ready to accept icons yet.
    pub icons: Option<FakeIconTable>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self {
            panels: HashMap::new(),
            icons: Some(FakeIconTable::default()),
        }
    }

    pub fn not_ready() -> Self {
        Self {
            panels: HashMap::new(),
            icons: None,
        }
    }

    pub fn with_panel(mut self, kind: PanelKind, panel: FakePanel) -> Self {
        self.panels.insert(kind, panel);
        self
    }

    pub fn texts(&self, kind: PanelKind) -> Vec<String> {
        self.panels[&kind].texts()
    }
}

impl HostClient for FakeHost {
    fn panel(&mut self, panel: PanelKind) -> Option<&mut dyn PanelLabels> {
        self.panels
            .get_mut(&panel)
            .map(|p| p as &mut dyn PanelLabels)
    }

    fn icon_table(&mut self) -> Option<&mut dyn IconTable> {
        self.icons.as_mut().map(|t| t as &mut dyn IconTable)
    }
}

/// World directory snapshot as a plain map.
#[derive(Debug, Default)]
pub(crate) struct FakeWorldList {
    regions: HashMap<u32, i32>,
}

impl FakeWorldList {
    pub fn with(worlds: &[(u32, i32)]) -> Self {
        Self {
            regions: worlds.iter().copied().collect(),
        }
    }
}

impl WorldLookup for FakeWorldList {
    fn region_code(&self, world: u32) -> Option<i32> {
        self.regions.get(&world).copied()
    }
}

/// Toggle store where every panel is on unless listed.
#[derive(Debug, Default)]
pub(crate) struct FakeSettings {
    off: Vec<PanelKind>,
}

impl FakeSettings {
    pub fn all_on() -> Self {
        Self::default()
    }

    pub fn with_off(kinds: &[PanelKind]) -> Self {
        Self {
            off: kinds.to_vec(),
        }
    }
}

impl FlagSettings for FakeSettings {
    fn show_flags(&self, panel: PanelKind) -> bool {
        !self.off.contains(&panel)
    }
}
