//! Handler für Sprünge und Zurück/Vor-Navigation.

use crate::app::observer::ViewEvent;
use crate::app::AppState;
use crate::core::WorldCoordinate;
use anyhow::{anyhow, bail};

/// Springt im aktiven Tab zu `target`.
pub fn navigate_to(state: &mut AppState, target: WorldCoordinate) {
    let Some(tab) = state.active_tab_mut() else {
        log::debug!("Navigation: kein Tab aktiv");
        return;
    };
    let before = tab.position();
    tab.history.navigate_to(target);
    let position = tab.position();
    if position != before {
        tab.notify(ViewEvent::PositionChanged { position });
    }
}

/// Geht im aktiven Tab einen Schritt zurück, falls möglich.
pub fn back(state: &mut AppState) {
    let Some(tab) = state.active_tab_mut() else {
        return;
    };
    if tab.history.back() {
        let position = tab.position();
        tab.notify(ViewEvent::PositionChanged { position });
    } else {
        log::debug!("Zurück: nichts zu tun");
    }
}

/// Geht im aktiven Tab einen Schritt vor, falls möglich.
pub fn forward(state: &mut AppState) {
    let Some(tab) = state.active_tab_mut() else {
        return;
    };
    if tab.history.forward() {
        let position = tab.position();
        tab.notify(ViewEvent::PositionChanged { position });
    } else {
        log::debug!("Vor: nichts zu tun");
    }
}

/// Legt in der Welt des aktiven Tabs einen Layer an und springt auf (0, 0).
pub fn create_layer(state: &mut AppState, name: String) -> anyhow::Result<()> {
    let tab = state
        .active_tab()
        .ok_or_else(|| anyhow!("Kein Tab geöffnet"))?;
    if tab.passive {
        bail!("Passiver Tab: Welt kann nicht verändert werden");
    }
    let world_key = tab.world_key.clone();

    let world = state
        .repository
        .get_mut(&world_key)
        .ok_or_else(|| anyhow!("Welt '{}' ist nicht geöffnet", world_key))?;
    let layer = world.add_layer(name.as_str());
    log::info!("Layer '{}' angelegt (ID {})", name, layer);

    navigate_to(state, WorldCoordinate::new(layer, 0.0, 0.0));
    Ok(())
}
