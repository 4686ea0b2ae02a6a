//! Handler für Welt-Operationen (Anlegen, Öffnen, Speichern).

use crate::app::use_cases;
use crate::app::AppState;
use std::path::PathBuf;

/// Legt eine neue, leere Welt an.
pub fn new_world(state: &mut AppState, name: String) {
    use_cases::file_io::new_world(state, name);
}

/// Lädt eine Welt aus dem übergebenen Pfad.
pub fn open(state: &mut AppState, path: PathBuf) -> anyhow::Result<()> {
    use_cases::file_io::open_world(state, path)
}

/// Speichert die Welt des aktiven Tabs.
///
/// `None` speichert unter dem bekannten Pfad im bisherigen Format.
/// `Some(p)` speichert als JSON unter dem neuen Pfad `p`.
pub fn save(state: &mut AppState, path: Option<PathBuf>) -> anyhow::Result<()> {
    use_cases::file_io::save_active_world(state, path)
}
