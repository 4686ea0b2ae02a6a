//! Schema des Metadaten-Dokuments einer gespeicherten Welt.

use crate::core::LayerId;
use serde::Serialize;

/// Maximale Anzahl gespeicherter Verlaufseinträge.
pub const META_HISTORY_CAP: usize = 25;
/// Hauptversion des Metadaten-Formats.
pub const META_FILE_VER_MAJOR: u32 = 2;
/// Nebenversion des Metadaten-Formats.
pub const META_FILE_VER_MINOR: u32 = 0;

/// Versionszeichenkette des Metadaten-Formats (z.B. `2.0`).
pub fn meta_version_string() -> String {
    format!("{}.{}", META_FILE_VER_MAJOR, META_FILE_VER_MINOR)
}

/// Gespeicherte Projektion von View-Zustand und Verlauf.
///
/// Alle Schlüssel sind unabhängig optional. Ein fehlender Schlüssel bedeutet
/// beim Lesen "Feld nicht ändern".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_paths: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paths_curved: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_cursor: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_grid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tile_size: Option<u32>,
    /// Verlaufseinträge, jüngster zuerst
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history: Option<Vec<HistoryEntry>>,
}

/// Ein Verlaufseintrag mit bereits übersetzter Layer-ID.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistoryEntry {
    /// Layer-ID in der gespeicherten Welt
    pub l: LayerId,
    pub x: f64,
    pub y: f64,
}

impl MetaDocument {
    /// Gibt `true` zurück, wenn kein bekannter Schlüssel gesetzt ist.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Serialisiert das Dokument als JSON-Wert.
    pub fn to_value(&self) -> serde_json::Value {
        // Serialisierung eines Structs mit ausschließlich String-Keys kann nicht fehlschlagen
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_keys_are_not_serialized() {
        let doc = MetaDocument {
            show_grid: Some(true),
            ..Default::default()
        };
        assert_eq!(doc.to_value(), serde_json::json!({ "showGrid": true }));
    }

    #[test]
    fn keys_use_document_names() {
        let doc = MetaDocument {
            show_paths: Some(false),
            paths_curved: Some(true),
            show_cursor: Some(true),
            show_grid: Some(false),
            tile_size: Some(40),
            history: Some(vec![HistoryEntry {
                l: 3,
                x: 1.0,
                y: -2.5,
            }]),
        };
        assert_eq!(
            doc.to_value(),
            serde_json::json!({
                "showPaths": false,
                "pathsCurved": true,
                "showCursor": true,
                "showGrid": false,
                "tileSize": 40,
                "history": [{ "l": 3, "x": 1.0, "y": -2.5 }]
            })
        );
    }

    #[test]
    fn version_string_is_major_dot_minor() {
        assert_eq!(meta_version_string(), "2.0");
    }
}
