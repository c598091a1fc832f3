#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use mirrorwatch::{map_to_mirror, MirrorLayout};

fuzz_target!(|data: &[u8]| {
    if let Ok(source) = std::str::from_utf8(data) {
        let mirror = Path::new("/backup");
        for layout in [MirrorLayout::Rooted, MirrorLayout::DriveLetter] {
            let dest = map_to_mirror(Path::new(source), mirror, layout);
            assert!(dest.starts_with(mirror), "{source:?} escaped to {dest:?}");
        }
    }
});
