use crate::core::WorldCoordinate;
use std::path::PathBuf;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Neue Welt anlegen und in einem Tab öffnen
    NewWorld { name: String },
    /// Weltdatei laden und in einem Tab öffnen
    OpenWorld { path: PathBuf },
    /// Welt des aktiven Tabs speichern (`None` = bekannter Pfad)
    SaveWorld { path: Option<PathBuf> },
    /// Aktiven Tab passiv duplizieren
    DuplicateActiveTab,
    /// Tab schließen
    CloseTab { index: usize },
    /// Tab aktivieren
    ActivateTab { index: usize },

    /// Zu einer Position springen (löscht den Vor-Verlauf)
    NavigateTo { target: WorldCoordinate },
    /// Einen Schritt zurück
    NavigateBack,
    /// Einen Schritt vor
    NavigateForward,
    /// Layer anlegen und dorthin springen
    CreateLayer { name: String },

    /// Kachelgröße aus Slider-Prozentwert setzen
    SetZoomPercent { percent: u32 },
    /// Kachelgröße mit Faktor ändern
    ZoomBy { factor: f32 },
    /// Platz-Cursor ein-/ausblenden
    SetCursorEnabled { enabled: bool },
    /// Raster ein-/ausblenden
    SetGridEnabled { enabled: bool },
    /// Wege ein-/ausblenden
    SetShowPaths { enabled: bool },
    /// Wege gekrümmt zeichnen
    SetPathsCurved { enabled: bool },
}
