//! Handler für das Öffnen, Duplizieren und Schließen von Tabs.

use crate::app::AppState;
use anyhow::anyhow;

/// Dupliziert den aktiven Tab als passiven Tab und aktiviert die Kopie.
pub fn duplicate_active(state: &mut AppState) -> anyhow::Result<()> {
    let tab = state
        .active_tab()
        .ok_or_else(|| anyhow!("Kein Tab geöffnet"))?;
    let copy = tab.duplicate_passive(&state.options);
    state.push_tab(copy);
    Ok(())
}

/// Aktiviert den Tab mit Index `index`.
pub fn activate(state: &mut AppState, index: usize) {
    if index < state.tabs.len() {
        state.active_tab = Some(index);
    } else {
        log::warn!("Tab {} existiert nicht", index);
    }
}

/// Schließt einen Tab. Die Welt wird geschlossen, sobald kein Tab sie mehr zeigt.
pub fn close(state: &mut AppState, index: usize) {
    if index >= state.tabs.len() {
        log::warn!("Tab {} existiert nicht", index);
        return;
    }
    let tab = state.tabs.remove(index);

    if !state.tabs.iter().any(|t| t.world_key == tab.world_key) {
        state.repository.close(&tab.world_key);
        log::info!("Welt '{}' geschlossen", tab.world_key);
    }

    state.active_tab = match state.active_tab {
        _ if state.tabs.is_empty() => None,
        Some(active) if active > index => Some(active - 1),
        Some(active) => Some(active.min(state.tabs.len() - 1)),
        None => None,
    };
}
