//! mudmap-meta: zeigt den gespeicherten Ansichtszustand einer Weltdatei.
//!
//! Aufruf: `mudmap-meta <welt.json>`

use mudmap_view_state::{AppController, AppIntent, AppState, ViewOptions};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("mudmap-meta v{} startet...", env!("CARGO_PKG_VERSION"));

    let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) else {
        eprintln!("Aufruf: mudmap-meta <weltdatei>");
        return ExitCode::from(2);
    };

    match run(path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Weltdatei konnte nicht gelesen werden: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(path: PathBuf) -> anyhow::Result<()> {
    let mut state = AppState::new();
    state.options = ViewOptions::load_from_file(&ViewOptions::config_path());

    let mut controller = AppController::new();
    controller.handle_intent(&mut state, AppIntent::WorldFileSelected { path })?;

    let tab = state
        .active_tab()
        .ok_or_else(|| anyhow::anyhow!("Kein Tab geöffnet"))?;
    let view = &tab.view;

    println!("Welt:           {}", tab.world_key);
    println!(
        "Kachelgröße:    {} ({} %)",
        view.tile_size(),
        view.zoom_percent(state.options.tile_size_max)
    );
    println!("Cursor:         {}", view.cursor_enabled);
    println!("Raster:         {}", view.grid_enabled);
    println!("Wege:           {}", view.show_paths);
    println!("Wege gekrümmt:  {}", view.paths_curved);

    let position = tab.position();
    println!(
        "Position:       Layer {} ({}, {})",
        position.layer(),
        position.x(),
        position.y()
    );
    println!("Verlauf (jüngster zuerst):");
    for coord in tab.history.export_tail(state.options.history_cap) {
        println!("  Layer {} ({}, {})", coord.layer(), coord.x(), coord.y());
    }

    Ok(())
}
