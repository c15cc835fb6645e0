#![no_main]

// Arbitrary bytes must either fail to parse or yield a header whose derived geometry fits
// inside the strip.

use d2r_sprite::{likely_sprite, parse_header};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(header) = parse_header(data) else {
        return;
    };

    assert!(likely_sprite(data));
    assert!(header.frame_count >= 1);
    assert!(header.total_width >= 1 && header.total_width <= 16384);
    assert!(header.frame_height >= 1 && header.frame_height <= 16384);
    assert!(header.frame_width as u64 * header.frame_count as u64 <= header.total_width as u64);
    assert!(header.frame_size() <= header.strip_size());
});
