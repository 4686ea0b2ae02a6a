//! Handler für Zoom und Anzeige-Schalter des aktiven Tabs.

use crate::app::observer::ViewEvent;
use crate::app::{AppState, TabState};
use crate::core::ViewState;

/// Setzt die Kachelgröße aus einem Slider-Prozentwert.
pub fn set_zoom_percent(state: &mut AppState, percent: u32) {
    let (min, max) = (state.options.tile_size_min, state.options.tile_size_max);
    update_tile_size(state, |view| view.set_zoom_percent(percent, min, max));
}

/// Ändert die Kachelgröße um einen Faktor.
pub fn zoom_by(state: &mut AppState, factor: f32) {
    let (min, max) = (state.options.tile_size_min, state.options.tile_size_max);
    update_tile_size(state, |view| view.zoom_by_clamped(factor, min, max));
}

/// Blendet den Platz-Cursor ein oder aus.
pub fn set_cursor_enabled(state: &mut AppState, enabled: bool) {
    update_toggles(state, |view| view.cursor_enabled = enabled);
}

/// Blendet das Raster ein oder aus.
pub fn set_grid_enabled(state: &mut AppState, enabled: bool) {
    update_toggles(state, |view| view.grid_enabled = enabled);
}

/// Blendet Wege ein oder aus.
pub fn set_show_paths(state: &mut AppState, enabled: bool) {
    update_toggles(state, |view| view.show_paths = enabled);
}

/// Schaltet gekrümmte Wege um.
pub fn set_paths_curved(state: &mut AppState, enabled: bool) {
    update_toggles(state, |view| view.paths_curved = enabled);
}

fn update_tile_size(state: &mut AppState, change: impl FnOnce(&mut ViewState)) {
    let Some(tab) = state.active_tab_mut() else {
        return;
    };
    let before = tab.view.tile_size();
    change(&mut tab.view);
    let tile_size = tab.view.tile_size();
    if tile_size != before {
        log::debug!("Kachelgröße: {} -> {}", before, tile_size);
        tab.notify(ViewEvent::TileSizeChanged { tile_size });
    }
}

fn update_toggles(state: &mut AppState, change: impl FnOnce(&mut ViewState)) {
    let Some(tab) = state.active_tab_mut() else {
        return;
    };
    if apply_and_compare(tab, change) {
        tab.notify(ViewEvent::TogglesChanged);
    }
}

fn apply_and_compare(tab: &mut TabState, change: impl FnOnce(&mut ViewState)) -> bool {
    let before = tab.view;
    change(&mut tab.view);
    tab.view != before
}
