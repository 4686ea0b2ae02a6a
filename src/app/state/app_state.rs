use crate::app::CommandLog;
use crate::shared::ViewOptions;
use crate::world::{World, WorldRepository};

use super::TabState;

/// Hauptzustand der Anwendung
#[derive(Debug)]
pub struct AppState {
    /// Geöffnete Welten
    pub repository: WorldRepository,
    /// Geöffnete Tabs in Anzeigereihenfolge
    pub tabs: Vec<TabState>,
    /// Index des aktiven Tabs (None = kein Tab offen)
    pub active_tab: Option<usize>,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Zoom-Grenzen, Defaults, Verlaufslänge)
    pub options: ViewOptions,
    /// Letzte Statusmeldung für die Infoleiste
    pub status_message: Option<String>,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self {
            repository: WorldRepository::new(),
            tabs: Vec::new(),
            active_tab: None,
            command_log: CommandLog::new(),
            options: ViewOptions::default(),
            status_message: None,
        }
    }

    /// Aktiver Tab
    pub fn active_tab(&self) -> Option<&TabState> {
        self.active_tab.and_then(|i| self.tabs.get(i))
    }

    /// Aktiver Tab (veränderbar)
    pub fn active_tab_mut(&mut self) -> Option<&mut TabState> {
        self.active_tab.and_then(|i| self.tabs.get_mut(i))
    }

    /// Welt des aktiven Tabs
    pub fn active_world(&self) -> Option<&World> {
        let tab = self.active_tab()?;
        self.repository.get(&tab.world_key)
    }

    /// Fügt einen Tab hinzu und aktiviert ihn.
    pub fn push_tab(&mut self, tab: TabState) -> usize {
        self.tabs.push(tab);
        let index = self.tabs.len() - 1;
        self.active_tab = Some(index);
        index
    }

    /// Text der Infoleiste für den aktiven Tab
    pub fn info_text(&self) -> String {
        match (self.active_tab(), self.active_world()) {
            (Some(tab), Some(world)) => tab.info_text(world),
            _ => String::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
