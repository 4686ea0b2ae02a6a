#![no_main]

use libfuzzer_sys::fuzz_target;
use mudmap_view_state::meta::apply_meta;
use mudmap_view_state::{decode_meta, parse_meta_document, NavigationHistory, ViewState};

fuzz_target!(|data: &[u8]| {
    let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };
    let doc = parse_meta_document(&value);
    let update = decode_meta(&doc);

    let mut view = ViewState::new();
    let mut history = NavigationHistory::default();
    apply_meta(Some(&doc), &mut view, &mut history);

    assert!(view.tile_size() >= ViewState::TILE_SIZE_MIN);
    assert!(view.tile_size() <= ViewState::TILE_SIZE_MAX);
    assert!(!history.can_go_forward());
    if let Some(entries) = update.history {
        assert_eq!(history.back_entries().len(), entries.len());
    }
});
