#![no_main]

// Encoding a strip and decoding it again must reproduce the pixels, and must keep every
// header byte that is not owned by a known field.

use d2r_sprite::{decode_image, encode_sprite, parse_header, rgba_to_bgra};
use libfuzzer_sys::{arbitrary, fuzz_target};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Input {
    pub alt_magic: bool,
    pub width: u8,
    pub height: u8,
    pub frame_count: u8,
    pub header_tail: [u8; 16],
    pub rgba_seed: Vec<u8>,
}

fuzz_target!(|input: Input| {
    let width = input.width as u32 + 1;
    let height = input.height as u32 % 64 + 1;

    let mut original = vec![0u8; 40];
    original[0..4].copy_from_slice(if input.alt_magic { b"SPa1" } else { b"SpA1" });
    original[4..6].copy_from_slice(&1u16.to_le_bytes());
    original[8..12].copy_from_slice(&width.to_le_bytes());
    original[12..16].copy_from_slice(&height.to_le_bytes());
    original[20..24].copy_from_slice(&(input.frame_count as u32).to_le_bytes());
    original[24..40].copy_from_slice(&input.header_tail);

    let header = parse_header(&original).expect("constructed header is valid");

    let len = (width * height * 4) as usize;
    let rgba: Vec<u8> = if input.rgba_seed.is_empty() {
        vec![0; len]
    } else {
        input.rgba_seed.iter().copied().cycle().take(len).collect()
    };
    let bgra = rgba_to_bgra(&rgba).expect("length is a multiple of 4");

    let encoded = encode_sprite(&original, &header, &bgra, width, height).expect("geometry matches");
    assert_eq!(encoded.len(), 40 + len);
    assert_eq!(&encoded[..40], &original[..]);
    assert_eq!(parse_header(&encoded).expect("re-parse"), header);
    assert_eq!(decode_image(&encoded).expect("decode").rgba, rgba);
});
