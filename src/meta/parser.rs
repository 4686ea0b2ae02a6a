//! Parser für das Metadaten-Dokument.
//!
//! Gespeicherte Metadaten können unvollständig oder veraltet sein. Jeder
//! Schlüssel wird einzeln geprüft; unbekannte oder falsch typisierte Werte
//! werden übersprungen statt als Fehler gemeldet.

use super::document::{HistoryEntry, MetaDocument};
use crate::core::{LayerId, NavigationHistory, ViewState, WorldCoordinate};
use anyhow::{Context, Result};
use serde_json::{Map, Value};

/// Liest ein Metadaten-Dokument aus einem JSON-Wert.
///
/// Ein Wert, der kein Objekt ist, ergibt ein leeres Dokument.
pub fn parse_meta_document(value: &Value) -> MetaDocument {
    let Some(root) = value.as_object() else {
        log::warn!("Metadaten sind kein JSON-Objekt, werden ignoriert");
        return MetaDocument::default();
    };

    MetaDocument {
        show_paths: read_bool(root, "showPaths"),
        paths_curved: read_bool(root, "pathsCurved"),
        show_cursor: read_bool(root, "showCursor"),
        show_grid: read_bool(root, "showGrid"),
        tile_size: read_tile_size(root),
        history: read_history(root),
    }
}

/// Liest ein Metadaten-Dokument aus JSON-Text.
pub fn parse_meta_str(json: &str) -> Result<MetaDocument> {
    let value: Value = serde_json::from_str(json).context("Metadaten sind kein gültiges JSON")?;
    Ok(parse_meta_document(&value))
}

fn read_bool(root: &Map<String, Value>, key: &str) -> Option<bool> {
    let value = root.get(key)?;
    let parsed = value.as_bool();
    if parsed.is_none() {
        log::warn!("Metadaten: '{}' ist kein Boolean, wird ignoriert", key);
    }
    parsed
}

fn read_tile_size(root: &Map<String, Value>) -> Option<u32> {
    let value = root.get("tileSize")?;
    let parsed = value.as_u64().and_then(|v| u32::try_from(v).ok());
    if parsed.is_none() {
        log::warn!("Metadaten: 'tileSize' ist keine gültige Kachelgröße: {}", value);
    }
    parsed
}

fn read_history(root: &Map<String, Value>) -> Option<Vec<HistoryEntry>> {
    let value = root.get("history")?;
    let Some(list) = value.as_array() else {
        log::warn!("Metadaten: 'history' ist keine Liste, wird ignoriert");
        return None;
    };

    let entries: Vec<HistoryEntry> = list.iter().filter_map(read_history_entry).collect();
    if entries.len() < list.len() {
        log::debug!(
            "Metadaten: {} von {} Verlaufseinträgen übersprungen",
            list.len() - entries.len(),
            list.len()
        );
    }
    Some(entries)
}

fn read_history_entry(value: &Value) -> Option<HistoryEntry> {
    let entry = value.as_object()?;
    let l = entry
        .get("l")?
        .as_u64()
        .and_then(|l| LayerId::try_from(l).ok())?;
    let x = entry.get("x")?.as_f64()?;
    let y = entry.get("y")?.as_f64()?;
    Some(HistoryEntry { l, x, y })
}

/// Aus einem Metadaten-Dokument abgeleitete Änderungen.
///
/// `None` bedeutet jeweils "Feld nicht ändern".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetaUpdate {
    pub tile_size: Option<u32>,
    pub cursor_enabled: Option<bool>,
    pub show_paths: Option<bool>,
    pub paths_curved: Option<bool>,
    pub grid_enabled: Option<bool>,
    /// Neuer Zurück-Stack, jüngster Eintrag zuerst
    pub history: Option<Vec<WorldCoordinate>>,
}

impl MetaUpdate {
    /// Gibt `true` zurück, wenn das Update nichts verändert.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Wendet das Update an.
    ///
    /// Nur vorhandene Felder werden übernommen. Ein vorhandener Verlauf ersetzt
    /// Zurück- und Vor-Stack; die aktuelle Position bleibt unverändert.
    /// Die Kachelgröße wird auf `TILE_SIZE_MIN..=TILE_SIZE_MAX` begrenzt.
    pub fn apply_to(self, view: &mut ViewState, history: &mut NavigationHistory) {
        self.apply_to_clamped(
            view,
            history,
            ViewState::TILE_SIZE_MIN,
            ViewState::TILE_SIZE_MAX,
        );
    }

    /// Wie [`apply_to`](Self::apply_to), begrenzt die Kachelgröße aber auf
    /// `min..=max` (konfigurierte Zoom-Grenzen).
    pub fn apply_to_clamped(
        self,
        view: &mut ViewState,
        history: &mut NavigationHistory,
        min: u32,
        max: u32,
    ) {
        if let Some(tile_size) = self.tile_size {
            view.set_tile_size_clamped(tile_size, min, max);
        }
        if let Some(enabled) = self.cursor_enabled {
            view.cursor_enabled = enabled;
        }
        if let Some(show) = self.show_paths {
            view.show_paths = show;
        }
        if let Some(curved) = self.paths_curved {
            view.paths_curved = curved;
        }
        if let Some(enabled) = self.grid_enabled {
            view.grid_enabled = enabled;
        }
        if let Some(entries) = self.history {
            let current = history.current();
            history.replace_history(entries, current);
        }
    }
}

/// Übersetzt ein Metadaten-Dokument in ein [`MetaUpdate`].
pub fn decode_meta(doc: &MetaDocument) -> MetaUpdate {
    MetaUpdate {
        tile_size: doc.tile_size,
        cursor_enabled: doc.show_cursor,
        show_paths: doc.show_paths,
        paths_curved: doc.paths_curved,
        grid_enabled: doc.show_grid,
        history: doc.history.as_ref().map(|entries| {
            entries
                .iter()
                .map(|e| WorldCoordinate::new(e.l, e.x, e.y))
                .collect()
        }),
    }
}

/// Dekodiert ein optionales Dokument und wendet es direkt an.
///
/// Ohne Dokument bleibt alles unverändert. Gibt `true` zurück, wenn
/// mindestens ein Feld übernommen wurde.
pub fn apply_meta(
    doc: Option<&MetaDocument>,
    view: &mut ViewState,
    history: &mut NavigationHistory,
) -> bool {
    apply_meta_clamped(
        doc,
        view,
        history,
        ViewState::TILE_SIZE_MIN,
        ViewState::TILE_SIZE_MAX,
    )
}

/// Wie [`apply_meta`], mit Kachelgröße begrenzt auf `min..=max`.
pub fn apply_meta_clamped(
    doc: Option<&MetaDocument>,
    view: &mut ViewState,
    history: &mut NavigationHistory,
    min: u32,
    max: u32,
) -> bool {
    let Some(doc) = doc else {
        return false;
    };
    let update = decode_meta(doc);
    if update.is_empty() {
        return false;
    }
    update.apply_to_clamped(view, history, min, max);
    true
}
