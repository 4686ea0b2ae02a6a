//! Zentrale Konfiguration für Ansichtszustand und Navigationsverlauf.
//!
//! `ViewOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::ViewState;
use crate::meta::META_HISTORY_CAP;
use serde::{Deserialize, Serialize};

// ── Zoom ────────────────────────────────────────────────────────────

/// Standard-Kachelgröße in Pixeln.
pub const TILE_SIZE_DEFAULT: u32 = ViewState::TILE_SIZE_DEFAULT;
/// Minimale Kachelgröße in Pixeln.
pub const TILE_SIZE_MIN: u32 = ViewState::TILE_SIZE_MIN;
/// Maximale Kachelgröße in Pixeln.
pub const TILE_SIZE_MAX: u32 = ViewState::TILE_SIZE_MAX;
/// Zoom-Schritt bei stufenweisem Zoom (Menü / Shortcuts).
pub const ZOOM_STEP: f32 = 1.2;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Ansichts-Optionen.
/// Wird als `mudmap_view_state.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewOptions {
    // ── Zoom ────────────────────────────────────────────────────
    /// Kachelgröße neuer Tabs
    pub tile_size_default: u32,
    /// Minimale Kachelgröße
    pub tile_size_min: u32,
    /// Maximale Kachelgröße (100 % am Zoom-Slider)
    pub tile_size_max: u32,
    /// Faktor für Zoom-In/-Out
    pub zoom_step: f32,

    // ── Anzeige-Defaults neuer Tabs ─────────────────────────────
    pub show_cursor: bool,
    pub show_paths: bool,
    pub paths_curved: bool,
    pub show_grid: bool,

    // ── Metadaten ───────────────────────────────────────────────
    /// Maximale Anzahl gespeicherter Verlaufseinträge
    #[serde(default = "default_history_cap")]
    pub history_cap: usize,
}

impl Default for ViewOptions {
    fn default() -> Self {
        let view = ViewState::new();
        Self {
            tile_size_default: TILE_SIZE_DEFAULT,
            tile_size_min: TILE_SIZE_MIN,
            tile_size_max: TILE_SIZE_MAX,
            zoom_step: ZOOM_STEP,

            show_cursor: view.cursor_enabled,
            show_paths: view.show_paths,
            paths_curved: view.paths_curved,
            show_grid: view.grid_enabled,

            history_cap: META_HISTORY_CAP,
        }
    }
}

/// Serde-Default für `history_cap` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_history_cap() -> usize {
    META_HISTORY_CAP
}

impl ViewOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("mudmap_view_state"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("mudmap_view_state.toml")
    }

    /// View-Zustand für einen neuen Tab.
    pub fn initial_view_state(&self) -> ViewState {
        let mut view = ViewState::new();
        view.set_tile_size_clamped(self.tile_size_default, self.tile_size_min, self.tile_size_max);
        view.cursor_enabled = self.show_cursor;
        view.show_paths = self.show_paths;
        view.paths_curved = self.paths_curved;
        view.grid_enabled = self.show_grid;
        view
    }
}
