//! Use-Case-Funktionen für Weltdateien.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.

use crate::app::{AppState, TabState};
use crate::world::{load_world, save_world, World, WorldFileFormat, WorldSource};
use anyhow::{anyhow, bail};
use std::path::PathBuf;

/// Legt eine neue, leere Welt an und öffnet sie in einem Tab.
pub fn new_world(state: &mut AppState, name: String) {
    let key = state.repository.unique_key(&name);
    let world = World::new(name);
    let tab = TabState::new(key.as_str(), world.home_position(), &state.options, false);
    state.repository.put(key.as_str(), world);
    state.push_tab(tab);
    log::info!("Neue Welt angelegt: {}", key);
}

/// Lädt eine Weltdatei und öffnet sie in einem Tab.
///
/// Ist die Welt bereits geöffnet, wird ihr erster Tab aktiviert. Vorhandene
/// Metadaten werden auf den neuen Tab angewendet; die aktuelle Position ist
/// die Mitte des ersten Layers, der gespeicherte Verlauf liegt auf dem
/// Zurück-Stack.
pub fn open_world(state: &mut AppState, path: PathBuf) -> anyhow::Result<()> {
    let key = path.display().to_string();

    if let Some(index) = state.tabs.iter().position(|t| t.world_key == key) {
        log::info!("Welt bereits geöffnet: {}", key);
        state.active_tab = Some(index);
        return Ok(());
    }

    let loaded = load_world(&path)?;
    let mut tab = TabState::new(
        key.as_str(),
        loaded.world.home_position(),
        &state.options,
        false,
    );
    if tab.apply_meta(loaded.meta.as_ref(), &state.options) {
        log::info!(
            "Ansichtszustand wiederhergestellt ({} Verlaufseinträge)",
            tab.history.back_entries().len()
        );
    }

    state.repository.put(key, loaded.world);
    state.push_tab(tab);
    state.status_message = None;
    Ok(())
}

/// Speichert die Welt des aktiven Tabs samt Metadaten.
///
/// Ohne Pfad wird in die Herkunftsdatei im bisherigen Format geschrieben.
/// Mit Pfad wird als JSON gespeichert und die Welt unter dem neuen Pfad
/// registriert. Ist dort bereits eine andere Welt geöffnet, wird nichts
/// geschrieben.
pub fn save_active_world(state: &mut AppState, path: Option<PathBuf>) -> anyhow::Result<()> {
    let tab = state
        .active_tab()
        .ok_or_else(|| anyhow!("Kein Tab geöffnet"))?;
    if tab.passive {
        log::info!("Passiver Tab wird nicht gespeichert");
        return Ok(());
    }
    let old_key = tab.world_key.clone();
    let snapshot = tab.meta_snapshot(state.options.history_cap);

    let world = state
        .repository
        .get(&old_key)
        .ok_or_else(|| anyhow!("Welt '{}' ist nicht geöffnet", old_key))?;

    let source = match (path, world.source()) {
        (Some(path), _) => WorldSource {
            path,
            format: WorldFileFormat::Json,
        },
        (None, Some(source)) => source.clone(),
        (None, None) => bail!("Kein Speicherpfad für '{}' bekannt", world.name),
    };

    let new_key = source.path.display().to_string();
    if new_key != old_key && state.repository.contains(&new_key) {
        bail!(
            "'{}' ist bereits als andere Welt geöffnet, bitte zuerst schließen",
            new_key
        );
    }

    let world = state
        .repository
        .get_mut(&old_key)
        .ok_or_else(|| anyhow!("Welt '{}' ist nicht geöffnet", old_key))?;
    save_world(world, &source.path, source.format, Some(Box::new(snapshot)))?;
    world.set_source(source);

    if new_key != old_key {
        state.repository.rekey(&old_key, new_key.as_str())?;
        for tab in state.tabs.iter_mut().filter(|t| t.world_key == old_key) {
            tab.world_key = new_key.clone();
        }
    }

    state.status_message = Some("Welt gespeichert".to_string());
    Ok(())
}
