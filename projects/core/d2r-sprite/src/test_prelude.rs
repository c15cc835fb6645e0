//! Common test imports and utilities for sprite tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.
#![allow(unused_imports)]

// Re-export commonly used alloc types for tests
pub use alloc::{boxed::Box, format, string::String, vec, vec::Vec};

// External crates commonly used in tests
pub use rstest::rstest;

pub use crate::error::*;
pub use crate::sprite::constants::*;
pub use crate::sprite::*;

use endian_writer::{EndianWriter, LittleEndianWriter};

/// Writes width, height and frame count into an existing header buffer of at least 40 bytes.
pub fn write_header_fields(data: &mut [u8], width: i32, height: i32, frame_count: u32) {
    assert!(data.len() >= SPRITE_HEADER_SIZE);
    unsafe {
        let mut writer = LittleEndianWriter::new(data.as_mut_ptr());
        writer.write_u32_at(width as u32, WIDTH_OFFSET as isize);
        writer.write_u32_at(height as u32, HEIGHT_OFFSET as isize);
        writer.write_u32_at(frame_count, FRAME_COUNT_OFFSET as isize);
    }
}

/// Creates a 40 byte sprite header (version 1) with no pixel data.
pub fn create_sprite_header(magic: SpriteMagic, width: i32, height: i32, frame_count: u32) -> Vec<u8> {
    let mut data = vec![0u8; SPRITE_HEADER_SIZE];
    data[0..4].copy_from_slice(&magic.as_bytes());
    data[VERSION_OFFSET..VERSION_OFFSET + 2].copy_from_slice(&1u16.to_le_bytes());
    write_header_fields(&mut data, width, height, frame_count);
    data
}

/// BGRA value stored at strip position (`x`, `y`) by [`create_sprite_with_pattern`].
///
/// Unique per position for strips up to 65536 pixels wide, and never fully transparent.
pub fn pattern_pixel(x: u32, y: u32) -> [u8; 4] {
    [
        x as u8,
        y as u8,
        ((x >> 8) as u8) ^ (y as u8).wrapping_mul(7) ^ ((y >> 8) as u8),
        255,
    ]
}

/// Creates a complete sprite whose strip is filled with [`pattern_pixel`].
pub fn create_sprite_with_pattern(
    magic: SpriteMagic,
    total_width: i32,
    height: i32,
    frame_count: u32,
) -> Vec<u8> {
    let mut data = create_sprite_header(magic, total_width, height, frame_count);
    data.reserve(total_width as usize * height as usize * BYTES_PER_PIXEL);
    for y in 0..height as u32 {
        for x in 0..total_width as u32 {
            data.extend_from_slice(&pattern_pixel(x, y));
        }
    }
    data
}

/// Deterministic, non-repeating-looking byte sequence of `len` bytes.
pub fn patterned_bytes(len: usize) -> Vec<u8> {
    (0..len)
        .map(|i| (i as u32).wrapping_mul(31).wrapping_add(i as u32 >> 8) as u8)
        .collect()
}
