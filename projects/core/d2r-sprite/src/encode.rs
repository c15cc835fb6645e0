//! Rebuilding sprite files from edited pixel data.
//!
//! Only whole-strip replacement is supported: the new image must have exactly the geometry
//! of the original, and the original's unknown header bytes are carried over untouched.

use crate::channels::rgba_to_bgra;
use crate::error::{EncodeError, EncodeResult};
use crate::sprite::constants::*;
use crate::sprite::{parse_header, SpriteHeader};
use alloc::vec;
use alloc::vec::Vec;
use endian_writer::{EndianWriter, LittleEndianWriter};
use log::debug;

/// Checks that an image of `width` x `height` with `pixel_len` bytes can replace the strip
/// described by `header`.
fn validate_geometry(
    header: &SpriteHeader,
    width: u32,
    height: u32,
    pixel_len: usize,
) -> EncodeResult<()> {
    if width != header.total_width || height != header.frame_height {
        return Err(EncodeError::DimensionMismatch {
            expected_width: header.total_width,
            expected_height: header.frame_height,
            actual_width: width,
            actual_height: height,
        });
    }

    let expected = width as usize * height as usize * BYTES_PER_PIXEL;
    if pixel_len != expected {
        return Err(EncodeError::PixelBufferSize {
            expected,
            actual: pixel_len,
        });
    }

    Ok(())
}

/// Builds a complete sprite file from native-order (BGRA) pixels.
///
/// # Parameters
///
/// - `original_header_bytes`: the original file, or at least its first 40 bytes. Header bytes
///   not owned by a known field are copied from here. Pass an empty slice to zero-fill them.
/// - `header`: the parsed header of the original. Supplies magic, version and dimensions.
/// - `pixels`: `width * height * 4` bytes of BGRA data for the whole strip.
///
/// # Returns
///
/// A new buffer of exactly `40 + pixels.len()` bytes. Inputs are never modified.
///
/// # Errors
///
/// - [`EncodeError::DimensionMismatch`] if `width`/`height` differ from the header's strip.
/// - [`EncodeError::PixelBufferSize`] if `pixels` is not `width * height * 4` bytes.
pub fn encode_sprite(
    original_header_bytes: &[u8],
    header: &SpriteHeader,
    pixels: &[u8],
    width: u32,
    height: u32,
) -> EncodeResult<Vec<u8>> {
    validate_geometry(header, width, height, pixels.len())?;

    let mut output = vec![0u8; SPRITE_HEADER_SIZE + pixels.len()];

    if original_header_bytes.len() >= SPRITE_HEADER_SIZE {
        // Keep undocumented metadata, including everything from RESERVED_START onwards.
        output[VERSION_OFFSET..SPRITE_HEADER_SIZE]
            .copy_from_slice(&original_header_bytes[VERSION_OFFSET..SPRITE_HEADER_SIZE]);
    } else {
        output[FRAME_COUNT_OFFSET..FRAME_COUNT_OFFSET + 4]
            .copy_from_slice(&header.raw_frame_count.to_le_bytes());
    }

    output[0..4].copy_from_slice(&header.magic.as_bytes());
    output[VERSION_OFFSET..VERSION_OFFSET + 2].copy_from_slice(&header.version.to_le_bytes());

    // SAFETY: output.len() >= SPRITE_HEADER_SIZE (40), so HEIGHT_OFFSET (0x0C) + 4 is in bounds.
    unsafe {
        let mut writer = LittleEndianWriter::new(output.as_mut_ptr());
        writer.write_u32_at(header.total_width, WIDTH_OFFSET as isize);
        writer.write_u32_at(header.frame_height, HEIGHT_OFFSET as isize);
    }

    output[PIXEL_DATA_OFFSET..].copy_from_slice(pixels);

    debug!(
        "created sprite file: {} bytes ({} header + {} pixels)",
        output.len(),
        SPRITE_HEADER_SIZE,
        pixels.len()
    );

    Ok(output)
}

/// Replaces the pixels of an existing sprite with an edited RGBA image.
///
/// This is the import path: the original file is parsed for its header, `rgba` is converted
/// to the stored BGRA order, and a new file is built with [`encode_sprite`].
///
/// # Errors
///
/// - [`EncodeError::Parse`] if `original` is not a valid sprite.
/// - [`EncodeError::DimensionMismatch`] if the image does not match the original's geometry.
/// - [`EncodeError::PixelBufferSize`] if `rgba` is not `width * height * 4` bytes.
pub fn replace_pixels(original: &[u8], rgba: &[u8], width: u32, height: u32) -> EncodeResult<Vec<u8>> {
    let header = parse_header(original)?;
    validate_geometry(&header, width, height, rgba.len())?;

    let bgra = rgba_to_bgra(rgba)?;
    encode_sprite(original, &header, &bgra, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::{decode_frame, decode_image, decode_strip};
    use crate::test_prelude::*;

    #[rstest]
    #[case(SpriteMagic::SpA1, 4, 3)]
    #[case(SpriteMagic::SPa1, 17, 9)]
    #[case(SpriteMagic::SpA1, 1, 1)]
    fn encode_then_decode_reproduces_pixels(
        #[case] magic: SpriteMagic,
        #[case] width: i32,
        #[case] height: i32,
    ) {
        let original = create_sprite_with_pattern(magic, width, height, 1);
        let header = parse_header(&original).unwrap();
        let pixels = patterned_bytes(header.strip_size());

        let encoded = encode_sprite(&original, &header, &pixels, width as u32, height as u32).unwrap();
        let reparsed = parse_header(&encoded).unwrap();
        assert_eq!(reparsed, header);

        let frame = decode_frame(&encoded, &reparsed, 0).unwrap();
        assert_eq!(frame, pixels);

        let image = decode_image(&encoded).unwrap();
        assert_eq!(rgba_to_bgra(&image.rgba).unwrap(), pixels);
    }

    #[test]
    fn unchanged_pixels_reencode_byte_for_byte() {
        let mut original = create_sprite_with_pattern(SpriteMagic::SpA1, 1263, 4, 4);
        original[24..40].copy_from_slice(&[0xAB; 16]);
        let header = parse_header(&original).unwrap();

        let strip = decode_strip(&original, &header);
        let encoded = encode_sprite(&original, &header, &strip, 1263, 4).unwrap();
        assert_eq!(encoded, original);
    }

    #[test]
    fn output_length_is_header_plus_payload() {
        let mut original = create_sprite_with_pattern(SpriteMagic::SpA1, 8, 8, 1);
        original.extend_from_slice(&[1, 2, 3, 4, 5]);
        let header = parse_header(&original).unwrap();
        let pixels = vec![7u8; 8 * 8 * 4];

        let encoded = encode_sprite(&original, &header, &pixels, 8, 8).unwrap();
        assert_eq!(encoded.len(), 40 + 8 * 8 * 4);
    }

    #[test]
    fn preserves_reserved_header_bytes() {
        let mut original = create_sprite_with_pattern(SpriteMagic::SpA1, 6, 2, 1);
        for (i, byte) in original[6..40].iter_mut().enumerate() {
            *byte = 0x80 | i as u8;
        }
        // Restore the fields the parser needs.
        write_header_fields(&mut original, 6, 2, 1);
        let header = parse_header(&original).unwrap();
        let pixels = vec![0u8; 6 * 2 * 4];

        let encoded = encode_sprite(&original, &header, &pixels, 6, 2).unwrap();
        assert_eq!(&encoded[..40], &original[..40]);
    }

    #[test]
    fn zero_fills_header_without_original() {
        let header = SpriteHeader::new(SpriteMagic::SPa1, 3, 400, 5, 5).unwrap();
        let pixels = patterned_bytes(header.strip_size());

        let encoded = encode_sprite(&[], &header, &pixels, 400, 5).unwrap();

        assert_eq!(&encoded[0..4], b"SPa1");
        assert_eq!(&encoded[4..6], &3u16.to_le_bytes());
        assert_eq!(&encoded[6..8], &[0, 0]);
        assert_eq!(&encoded[8..12], &400u32.to_le_bytes());
        assert_eq!(&encoded[12..16], &5u32.to_le_bytes());
        assert_eq!(&encoded[16..20], &[0; 4]);
        assert_eq!(&encoded[20..24], &5u32.to_le_bytes());
        assert!(encoded[24..40].iter().all(|b| *b == 0));
        assert_eq!(parse_header(&encoded).unwrap(), header);
    }

    #[test]
    fn short_original_is_treated_as_missing() {
        let header = SpriteHeader::new(SpriteMagic::SpA1, 1, 2, 2, 1).unwrap();
        let short = [0xFFu8; 39];
        let pixels = vec![0u8; 2 * 2 * 4];

        let encoded = encode_sprite(&short, &header, &pixels, 2, 2).unwrap();
        assert!(encoded[24..40].iter().all(|b| *b == 0));
        assert_eq!(&encoded[6..8], &[0, 0]);
    }

    #[rstest]
    #[case(9, 8)]
    #[case(8, 9)]
    #[case(0, 0)]
    fn rejects_dimension_mismatch(#[case] width: u32, #[case] height: u32) {
        let original = create_sprite_with_pattern(SpriteMagic::SpA1, 8, 8, 1);
        let snapshot = original.clone();
        let header = parse_header(&original).unwrap();
        let pixels = vec![0u8; width as usize * height as usize * 4];

        assert_eq!(
            encode_sprite(&original, &header, &pixels, width, height),
            Err(EncodeError::DimensionMismatch {
                expected_width: 8,
                expected_height: 8,
                actual_width: width,
                actual_height: height,
            })
        );
        assert_eq!(original, snapshot);
    }

    #[test]
    fn rejects_wrong_pixel_buffer_size() {
        let original = create_sprite_with_pattern(SpriteMagic::SpA1, 8, 8, 1);
        let header = parse_header(&original).unwrap();
        let pixels = vec![0u8; 8 * 8 * 4 - 4];

        assert_eq!(
            encode_sprite(&original, &header, &pixels, 8, 8),
            Err(EncodeError::PixelBufferSize {
                expected: 256,
                actual: 252
            })
        );
    }

    #[test]
    fn multi_frame_strip_replacement_keeps_frame_layout() {
        let original = create_sprite_with_pattern(SpriteMagic::SpA1, 400, 5, 5);
        let header = parse_header(&original).unwrap();
        let pixels = patterned_bytes(header.strip_size());

        let encoded = encode_sprite(&original, &header, &pixels, 400, 5).unwrap();
        let reparsed = parse_header(&encoded).unwrap();
        assert_eq!(reparsed.frame_count, 5);
        assert_eq!(reparsed.frame_width, 80);

        // Frame 1 row 2 starts 80 pixels into row 2 of the strip.
        let frame = decode_frame(&encoded, &reparsed, 1).unwrap();
        let strip_offset = (2 * 400 + 80) * 4;
        let frame_offset = 2 * 80 * 4;
        assert_eq!(
            &frame[frame_offset..frame_offset + 80 * 4],
            &pixels[strip_offset..strip_offset + 80 * 4]
        );
    }

    #[test]
    fn replace_pixels_round_trips_rgba() {
        let original = create_sprite_with_pattern(SpriteMagic::SPa1, 12, 7, 1);
        let rgba = patterned_bytes(12 * 7 * 4);

        let encoded = replace_pixels(&original, &rgba, 12, 7).unwrap();
        assert_eq!(&encoded[..40], &original[..40]);
        assert_eq!(decode_image(&encoded).unwrap().rgba, rgba);
    }

    #[test]
    fn replace_pixels_checks_dimensions_before_alignment() {
        let original = create_sprite_with_pattern(SpriteMagic::SpA1, 8, 8, 1);

        assert!(matches!(
            replace_pixels(&original, &[0u8; 3], 4, 4),
            Err(EncodeError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn replace_pixels_propagates_parse_errors() {
        assert_eq!(
            replace_pixels(&[0u8; 10], &[], 0, 0),
            Err(EncodeError::Parse(ParseError::TooSmall {
                required: 40,
                actual: 10
            }))
        );
    }
}
