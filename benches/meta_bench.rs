//! Benchmark für den Metadaten-Codec.
//!
//! Misst Kodieren und Dekodieren eines langen Verlaufs sowie das Einlesen
//! einer kompletten JSON-Welt samt Metadaten.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use mudmap_view_state::meta::{parse_meta_str, META_HISTORY_CAP};
use mudmap_view_state::world::JsonWorldFile;
use mudmap_view_state::{
    decode_meta, encode_meta, IdentityTranslator, NavigationHistory, ViewState, WorldCoordinate,
};
use std::hint::black_box;

fn build_history(len: usize) -> NavigationHistory {
    let mut history = NavigationHistory::new(WorldCoordinate::default());
    for i in 0..len {
        let layer = (i % 7) as u32 + 1;
        history.navigate_to(WorldCoordinate::new(layer, i as f64 * 0.5, -(i as f64)));
    }
    history
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("meta_encode");
    let view = ViewState::new();

    for &len in &[META_HISTORY_CAP, 1_000usize] {
        let history = build_history(len);
        group.bench_with_input(BenchmarkId::new("history", len), &history, |b, history| {
            b.iter(|| {
                let doc = encode_meta(
                    black_box(&view),
                    black_box(history),
                    &IdentityTranslator,
                    META_HISTORY_CAP,
                );
                black_box(doc.history.map(|h| h.len()))
            })
        });
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let history = build_history(META_HISTORY_CAP);
    let doc = encode_meta(
        &ViewState::new(),
        &history,
        &IdentityTranslator,
        META_HISTORY_CAP,
    );
    let text = serde_json::to_string(&doc).expect("serialisierbar");

    c.bench_function("meta_decode_text", |b| {
        b.iter(|| {
            let doc = parse_meta_str(black_box(&text)).expect("parsebar");
            let update = decode_meta(&doc);
            let mut view = ViewState::new();
            let mut restored = NavigationHistory::default();
            black_box(update.apply_to(&mut view, &mut restored))
        })
    });
}

fn bench_world_parsing(c: &mut Criterion) {
    let content = include_str!("../tests/fixtures/sample_world.json");

    c.bench_function("json_world_parse_sample", |b| {
        b.iter(|| {
            let mut file = JsonWorldFile::new("bench.json");
            let world = file.parse(black_box(content)).expect("parsebar");
            black_box(world.layer_count())
        })
    });
}

criterion_group!(meta_benches, bench_encode, bench_decode, bench_world_parsing);
criterion_main!(meta_benches);
