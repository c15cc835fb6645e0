#![no_main]

// Decoding arbitrary (possibly truncated) sprites must never panic and must always produce
// buffers of the advertised size.

use d2r_sprite::{decode_all, decode_image, parse_header};
use libfuzzer_sys::fuzz_target;

// Keeps iterations fast; headers can declare billions of frames or gigabyte strips.
const MAX_FRAMES: u32 = 256;
const MAX_STRIP_BYTES: usize = 16 * 1024 * 1024;

fuzz_target!(|data: &[u8]| {
    let Ok(header) = parse_header(data) else {
        return;
    };
    if header.frame_count > MAX_FRAMES || header.strip_size() > MAX_STRIP_BYTES {
        return;
    }

    let frames = decode_all(data, &header).expect("decode_all only fails on bad indices");
    assert_eq!(frames.len(), header.frame_count as usize);
    for frame in &frames {
        assert_eq!(frame.len(), header.frame_size());
    }

    let image = decode_image(data).expect("header already parsed");
    assert_eq!(image.rgba.len(), header.strip_size());
});
