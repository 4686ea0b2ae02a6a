use crate::core::LayerId;
use std::path::PathBuf;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Neue, leere Welt anlegen
    NewWorldRequested { name: String },
    /// Weltdatei wurde im Dialog ausgewählt (Laden)
    WorldFileSelected { path: PathBuf },
    /// Welt des aktiven Tabs speichern (unter bekanntem Pfad)
    SaveRequested,
    /// Speicherpfad wurde im Dialog ausgewählt
    SaveFilePathSelected { path: PathBuf },
    /// Aktiven Tab als passive Kopie duplizieren
    DuplicateTabRequested,
    /// Tab schließen
    CloseTabRequested { index: usize },
    /// Anderen Tab aktivieren
    TabActivated { index: usize },

    /// Platz in der Seitenleiste oder Suche gewählt
    PlaceSelected { layer: LayerId, x: i32, y: i32 },
    /// Layer in der Layerliste gewählt
    LayerSelected { layer: LayerId },
    /// Neuer Layer angelegt (None = Dialog abgebrochen)
    LayerCreated { name: Option<String> },
    /// "Previous"-Button
    PreviousRequested,
    /// "Next"-Button
    NextRequested,

    /// Zoom-Slider bewegt (0–100 %)
    ZoomSliderChanged { percent: u32 },
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Menüpunkt "Show place cursor"
    ShowCursorToggled { enabled: bool },
    /// Menüpunkt "Show grid"
    ShowGridToggled { enabled: bool },
    /// Wege anzeigen/ausblenden
    ShowPathsToggled { enabled: bool },
    /// Menüpunkt "Curved paths"
    CurvedPathsToggled { enabled: bool },
}
