use super::constants::*;

/// Determines if the given data likely represents a sprite.
/// This is done by checking the 'MAGIC' header, 'SpA1' or 'SPa1' at offset 0, and minimum size.
/// For full header validation, use [`parse_header`].
///
/// [`parse_header`]: crate::sprite::parse_sprite::parse_header
#[inline(always)]
pub fn likely_sprite(data: &[u8]) -> bool {
    data.len() >= SPRITE_HEADER_SIZE && is_sprite_magic(&[data[0], data[1], data[2], data[3]])
}

/// Returns true if `magic` is one of the two accepted sprite signatures.
#[inline(always)]
pub fn is_sprite_magic(magic: &[u8; 4]) -> bool {
    *magic == SPRITE_MAGIC_SPA1 || *magic == SPRITE_MAGIC_SPA1_ALT
}
