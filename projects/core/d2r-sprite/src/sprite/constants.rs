//! Sprite format constants and definitions

/// Magic header used by most sprite files.
pub const SPRITE_MAGIC_SPA1: [u8; 4] = *b"SpA1";

/// Alternate magic header, seen on large single-frame sprites.
pub const SPRITE_MAGIC_SPA1_ALT: [u8; 4] = *b"SPa1";

/// Size of the fixed sprite header. Pixel data always begins here.
pub const SPRITE_HEADER_SIZE: usize = 0x28;

/// Offset of the pixel payload.
pub const PIXEL_DATA_OFFSET: usize = SPRITE_HEADER_SIZE;

/// Offset of the `u16` format version.
pub const VERSION_OFFSET: usize = 0x04;

/// Offset of the `i32` total strip width (sum of all frame widths).
pub const WIDTH_OFFSET: usize = 0x08;

/// Offset of the `i32` height shared by every frame.
pub const HEIGHT_OFFSET: usize = 0x0C;

/// Offset of the `u32` frame count.
pub const FRAME_COUNT_OFFSET: usize = 0x14;

/// First byte of the region copied verbatim from the original file on re-encode.
pub const RESERVED_START: usize = 0x0A;

/// Bytes per pixel in both BGRA and RGBA order.
pub const BYTES_PER_PIXEL: usize = 4;

/// Largest width or height accepted by the standard parser.
pub const MAX_DIMENSION: u32 = 16384;

/// Largest width or height accepted by the legacy single-frame parser.
pub const LEGACY_MAX_DIMENSION: u32 = 4096;
