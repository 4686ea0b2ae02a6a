#![no_main]

use libfuzzer_sys::fuzz_target;
use mudmap_view_state::world::legacy::{parse_legacy_world, write_legacy_world};

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(world) = parse_legacy_world(content) {
        let _ = write_legacy_world(&world);
    }
});
