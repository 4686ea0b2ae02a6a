use mudmap_view_state::app::MetaSnapshot;
use mudmap_view_state::world::{detect_format, Layer, Place, WorldSource};
use mudmap_view_state::{
    load_world, save_world, NavigationHistory, ViewState, World, WorldCoordinate, WorldFileFormat,
};
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn temp_path(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join("mudmap_view_state_world_tests");
    std::fs::create_dir_all(&dir).expect("Temp-Verzeichnis anlegbar");
    dir.join(name)
}

/// Welt mit Lücken in den Layer-IDs (4 und 7) und je einem Platz.
fn sparse_world() -> World {
    let mut world = World::new("Lückenwelt");
    world.insert_layer(Layer {
        id: 7,
        name: "Turm".into(),
    });
    world.insert_layer(Layer {
        id: 4,
        name: "Hof".into(),
    });
    world
        .add_place(Place::new(4, 1, 1, "Brunnen"))
        .expect("frei");
    world.add_place(Place::new(7, 0, 5, "Zinne")).expect("frei");
    world
}

fn snapshot() -> MetaSnapshot {
    let mut view = ViewState::new();
    view.set_tile_size(75);
    view.grid_enabled = true;

    let mut history = NavigationHistory::new(WorldCoordinate::new(4, 1.0, 1.0));
    history.navigate_to(WorldCoordinate::new(9, 3.0, 3.0));
    history.navigate_to(WorldCoordinate::new(7, 0.0, 5.0));
    history.navigate_to(WorldCoordinate::new(4, 2.0, 2.0));

    MetaSnapshot {
        view,
        history,
        cap: 25,
    }
}

#[test]
fn test_load_json_fixture_reads_world_and_meta() {
    let loaded = load_world(&fixture_path("sample_world.json")).expect("ladbar");

    assert_eq!(loaded.world.name, "Nebelhafen");
    assert_eq!(loaded.world.layer_count(), 2);
    assert_eq!(
        loaded.world.source().map(|s| s.format),
        Some(WorldFileFormat::Json)
    );

    let meta = loaded.meta.expect("Metadaten vorhanden");
    assert_eq!(meta.tile_size, Some(60));
    assert_eq!(meta.show_grid, Some(true));
    // Eintrag ohne y wird übersprungen
    assert_eq!(meta.history.map(|h| h.len()), Some(2));
}

#[test]
fn test_load_legacy_fixture_has_no_meta() {
    let loaded = load_world(&fixture_path("legacy_world.txt")).expect("ladbar");

    assert_eq!(loaded.world.name, "Grauwald");
    assert!(loaded.meta.is_none());
    assert_eq!(
        loaded.world.source().map(|s| s.format),
        Some(WorldFileFormat::Legacy)
    );
}

#[test]
fn test_json_save_renumbers_layers_and_translates_history() {
    let path = temp_path("sparse.json");
    save_world(
        &sparse_world(),
        &path,
        WorldFileFormat::Json,
        Some(Box::new(snapshot())),
    )
    .expect("speicherbar");

    let content = std::fs::read_to_string(&path).expect("lesbar");
    assert_eq!(detect_format(&content), WorldFileFormat::Json);
    let value: serde_json::Value = serde_json::from_str(&content).expect("gültiges JSON");
    assert_eq!(value["metaVersion"], "2.0");

    let loaded = load_world(&path).expect("ladbar");
    assert_eq!(
        loaded.world.source(),
        Some(&WorldSource {
            path: path.clone(),
            format: WorldFileFormat::Json
        })
    );
    // Live 4 -> 1, Live 7 -> 2
    assert_eq!(
        loaded.world.place_at(2, 0, 5).map(|p| p.name.as_str()),
        Some("Zinne")
    );

    let meta = loaded.meta.expect("Metadaten vorhanden");
    assert_eq!(meta.tile_size, Some(75));
    assert_eq!(meta.show_grid, Some(true));

    // Zurück-Stack jüngster zuerst: (7,0,5) (9,3,3) (4,1,1); Layer 9 existiert nicht
    let layers: Vec<u32> = meta
        .history
        .expect("Verlauf vorhanden")
        .iter()
        .map(|e| e.l)
        .collect();
    assert_eq!(layers, vec![2, 1]);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_legacy_save_ignores_meta_provider() {
    let path = temp_path("sparse.txt");
    save_world(
        &sparse_world(),
        &path,
        WorldFileFormat::Legacy,
        Some(Box::new(snapshot())),
    )
    .expect("speicherbar");

    let content = std::fs::read_to_string(&path).expect("lesbar");
    assert_eq!(detect_format(&content), WorldFileFormat::Legacy);
    assert!(!content.contains("tileSize"));

    let loaded = load_world(&path).expect("ladbar");
    assert!(loaded.meta.is_none());
    // Altformat behält die Live-IDs
    assert!(loaded.world.layer(7).is_some());

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_missing_file_reports_path() {
    let path = temp_path("gibt_es_nicht.json");
    let _ = std::fs::remove_file(&path);

    let err = load_world(&path).expect_err("Datei fehlt");
    assert!(err.to_string().contains("nicht lesbar"));
}
