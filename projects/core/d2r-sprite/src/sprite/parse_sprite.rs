use super::constants::*;
use crate::error::{ParseError, ParseResult};
use crate::layout::FrameLayout;
use endian_writer::{EndianReader, LittleEndianReader};

/// The signature found at the start of a sprite file.
///
/// Both variants describe the same layout; the value is written back verbatim on re-encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SpriteMagic {
    /// `SpA1`
    SpA1 = 0,
    /// `SPa1`
    SPa1 = 1,
}

impl SpriteMagic {
    /// Raw bytes of the signature, as stored at offset 0.
    #[inline]
    pub const fn as_bytes(self) -> [u8; 4] {
        match self {
            SpriteMagic::SpA1 => SPRITE_MAGIC_SPA1,
            SpriteMagic::SPa1 => SPRITE_MAGIC_SPA1_ALT,
        }
    }

    /// Signature as text, e.g. for display in tooling.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            SpriteMagic::SpA1 => "SpA1",
            SpriteMagic::SPa1 => "SPa1",
        }
    }

    /// Matches raw bytes against the accepted signatures.
    #[inline]
    pub fn from_bytes(bytes: [u8; 4]) -> Option<Self> {
        match bytes {
            SPRITE_MAGIC_SPA1 => Some(SpriteMagic::SpA1),
            SPRITE_MAGIC_SPA1_ALT => Some(SpriteMagic::SPa1),
            _ => None,
        }
    }
}

impl core::fmt::Display for SpriteMagic {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Upper bound applied to width and height while parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DimensionLimit {
    /// 16384 pixels. Needed for long multi-frame strips (e.g. 88x20 with 51 frames).
    #[default]
    Standard,
    /// 4096 pixels, as enforced by early single-frame tooling.
    Legacy,
}

impl DimensionLimit {
    /// Largest accepted width or height.
    #[inline]
    pub const fn max(self) -> u32 {
        match self {
            DimensionLimit::Standard => MAX_DIMENSION,
            DimensionLimit::Legacy => LEGACY_MAX_DIMENSION,
        }
    }
}

/// Settings for [`parse_header_with_options`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    pub dimension_limit: DimensionLimit,
}

impl ParseOptions {
    /// Options matching the stricter 4096 pixel bound of older tooling.
    pub const fn legacy() -> Self {
        Self {
            dimension_limit: DimensionLimit::Legacy,
        }
    }
}

/// Parsed sprite header along with the derived frame geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteHeader {
    pub magic: SpriteMagic,
    /// Informational; preserved verbatim.
    pub version: u16,
    /// Width of the whole strip, i.e. the sum of all frame widths.
    pub total_width: u32,
    /// Height shared by every frame.
    pub frame_height: u32,
    /// Frame count exactly as stored. 0 and 1 both mean a single frame.
    pub raw_frame_count: u32,
    /// Effective frame count, always at least 1.
    pub frame_count: u32,
    /// Width of a single frame. Remainder of `total_width / frame_count` is dropped.
    pub frame_width: u32,
}

impl SpriteHeader {
    /// Builds a header from its stored fields, validating the dimensions against the standard limit.
    pub fn new(
        magic: SpriteMagic,
        version: u16,
        total_width: i32,
        frame_height: i32,
        raw_frame_count: u32,
    ) -> ParseResult<Self> {
        Self::new_with_limit(
            magic,
            version,
            total_width,
            frame_height,
            raw_frame_count,
            DimensionLimit::Standard,
        )
    }

    fn new_with_limit(
        magic: SpriteMagic,
        version: u16,
        total_width: i32,
        frame_height: i32,
        raw_frame_count: u32,
        limit: DimensionLimit,
    ) -> ParseResult<Self> {
        let max = limit.max();
        if total_width <= 0
            || frame_height <= 0
            || total_width as u32 > max
            || frame_height as u32 > max
        {
            return Err(ParseError::InvalidDimensions {
                width: total_width,
                height: frame_height,
                limit: max,
            });
        }

        let total_width = total_width as u32;
        let frame_count = if raw_frame_count > 1 {
            raw_frame_count
        } else {
            1
        };
        let frame_width = if frame_count > 1 {
            total_width / frame_count
        } else {
            total_width
        };

        Ok(Self {
            magic,
            version,
            total_width,
            frame_height: frame_height as u32,
            raw_frame_count,
            frame_count,
            frame_width,
        })
    }

    /// Offset of the pixel payload within the file.
    #[inline(always)]
    pub const fn pixel_data_offset(&self) -> usize {
        PIXEL_DATA_OFFSET
    }

    /// True if the strip holds more than one frame.
    #[inline(always)]
    pub const fn is_multi_frame(&self) -> bool {
        self.frame_count > 1
    }

    /// Size in bytes of one decoded frame.
    #[inline]
    pub const fn frame_size(&self) -> usize {
        self.frame_width as usize * self.frame_height as usize * BYTES_PER_PIXEL
    }

    /// Size in bytes of the whole pixel strip.
    #[inline]
    pub const fn strip_size(&self) -> usize {
        self.total_width as usize * self.frame_height as usize * BYTES_PER_PIXEL
    }

    /// Size of a complete, untruncated file with this header.
    #[inline]
    pub const fn expected_file_size(&self) -> usize {
        PIXEL_DATA_OFFSET + self.strip_size()
    }

    /// Pixel geometry used to locate frames within the strip.
    #[inline]
    pub const fn layout(&self) -> FrameLayout {
        FrameLayout {
            total_width: self.total_width,
            frame_width: self.frame_width,
            frame_height: self.frame_height,
            frame_count: self.frame_count,
        }
    }
}

/// Parses the sprite header from the given slice using the standard limits.
///
/// # Errors
///
/// - [`ParseError::TooSmall`] if the slice is shorter than the 40 byte header.
/// - [`ParseError::BadMagic`] if the slice does not start with `SpA1` or `SPa1`.
/// - [`ParseError::InvalidDimensions`] if width or height is not within `1..=16384`.
#[inline]
pub fn parse_header(data: &[u8]) -> ParseResult<SpriteHeader> {
    parse_header_with_options(data, ParseOptions::default())
}

/// Parses the sprite header from the given slice.
///
/// See [`parse_header`] for the possible errors. The dimension bound is taken from `options`.
pub fn parse_header_with_options(data: &[u8], options: ParseOptions) -> ParseResult<SpriteHeader> {
    if data.len() < SPRITE_HEADER_SIZE {
        return Err(ParseError::TooSmall {
            required: SPRITE_HEADER_SIZE,
            actual: data.len(),
        });
    }

    let magic_bytes = [data[0], data[1], data[2], data[3]];
    let magic =
        SpriteMagic::from_bytes(magic_bytes).ok_or(ParseError::BadMagic { found: magic_bytes })?;

    let version = u16::from_le_bytes([data[VERSION_OFFSET], data[VERSION_OFFSET + 1]]);

    // SAFETY: We checked data.len() >= SPRITE_HEADER_SIZE (40), so every field up to
    // FRAME_COUNT_OFFSET (0x14) + 4 is in bounds.
    let mut reader = unsafe { LittleEndianReader::new(data.as_ptr()) };
    let total_width = unsafe { reader.read_u32_at(WIDTH_OFFSET as isize) } as i32;
    let frame_height = unsafe { reader.read_u32_at(HEIGHT_OFFSET as isize) } as i32;
    let raw_frame_count = unsafe { reader.read_u32_at(FRAME_COUNT_OFFSET as isize) };

    SpriteHeader::new_with_limit(
        magic,
        version,
        total_width,
        frame_height,
        raw_frame_count,
        options.dimension_limit,
    )
}
