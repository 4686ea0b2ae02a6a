//! Writer für das Metadaten-Dokument.

use super::document::{HistoryEntry, MetaDocument};
use crate::core::{LayerIdTranslator, NavigationHistory, ViewState};

/// Erzeugt das Metadaten-Dokument für einen Speichervorgang.
///
/// Es werden höchstens `cap` Einträge des Zurück-Stacks betrachtet (jüngster
/// zuerst). Einträge, deren Layer `translator` nicht kennt, entfallen
/// ersatzlos, ebenso Einträge mit nicht-endlicher Position (in JSON nicht
/// darstellbar). Die Liste kann dadurch kürzer als `cap` werden.
pub fn encode_meta<T>(
    view: &ViewState,
    history: &NavigationHistory,
    translator: &T,
    cap: usize,
) -> MetaDocument
where
    T: LayerIdTranslator + ?Sized,
{
    let mut dropped = 0usize;
    let mut non_finite = 0usize;
    let entries: Vec<HistoryEntry> = history
        .export_tail(cap)
        .filter_map(|coord| {
            if !(coord.x().is_finite() && coord.y().is_finite()) {
                non_finite += 1;
                return None;
            }
            match translator.translate(coord.layer()) {
                Some(l) => Some(HistoryEntry {
                    l,
                    x: coord.x(),
                    y: coord.y(),
                }),
                None => {
                    dropped += 1;
                    None
                }
            }
        })
        .collect();

    if dropped > 0 {
        log::warn!(
            "Metadaten: {} Verlaufseinträge auf nicht gespeicherte Layer verworfen",
            dropped
        );
    }
    if non_finite > 0 {
        log::warn!(
            "Metadaten: {} Verlaufseinträge mit ungültiger Position (NaN/unendlich) verworfen",
            non_finite
        );
    }

    MetaDocument {
        show_paths: Some(view.show_paths),
        paths_curved: Some(view.paths_curved),
        show_cursor: Some(view.cursor_enabled),
        show_grid: Some(view.grid_enabled),
        tile_size: Some(view.tile_size()),
        history: Some(entries),
    }
}
