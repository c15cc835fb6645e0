//! Frame geometry and byte offsets within the pixel strip.
//!
//! Frames are stored side by side in one horizontal strip. Every scanline of a frame is
//! therefore `total_width * 4` bytes away from the next, not `frame_width * 4`; each frame is
//! a vertical slice of the strip rather than a contiguous block.
//!
//! ```text
//!           frame 0      frame 1      frame 2
//! row 0   [ fw pixels ][ fw pixels ][ fw pixels ]
//! row 1   [ fw pixels ][ fw pixels ][ fw pixels ]
//!         |<------------- total_width ---------->|
//! ```

use crate::sprite::constants::{BYTES_PER_PIXEL, PIXEL_DATA_OFFSET};

/// Pixel geometry of a sprite strip. Derived from [`SpriteHeader::layout`].
///
/// [`SpriteHeader::layout`]: crate::sprite::SpriteHeader::layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameLayout {
    pub total_width: u32,
    pub frame_width: u32,
    pub frame_height: u32,
    pub frame_count: u32,
}

impl FrameLayout {
    /// Bytes per scanline of the strip.
    #[inline(always)]
    pub const fn stride(&self) -> usize {
        self.total_width as usize * BYTES_PER_PIXEL
    }

    /// Number of columns read per row of a frame.
    ///
    /// Single-frame sprites read the full strip width.
    #[inline(always)]
    pub const fn columns(&self) -> u32 {
        if self.frame_count > 1 {
            self.frame_width
        } else {
            self.total_width
        }
    }

    /// Byte offset of the first pixel of `frame_index`.
    #[inline(always)]
    pub const fn frame_origin(&self, frame_index: u32) -> usize {
        PIXEL_DATA_OFFSET + frame_index as usize * self.frame_width as usize * BYTES_PER_PIXEL
    }

    /// Byte offset of pixel (`x`, `y`) of `frame_index` within the file.
    ///
    /// `offset = 40 + y * 4 * total_width + x * 4 + frame_index * frame_width * 4`
    #[inline(always)]
    pub const fn offset(&self, frame_index: u32, x: u32, y: u32) -> usize {
        self.frame_origin(frame_index) + y as usize * self.stride() + x as usize * BYTES_PER_PIXEL
    }

    /// Returns true if all 4 bytes of the pixel at `offset` lie within `len` bytes.
    #[inline(always)]
    pub const fn pixel_in_bounds(offset: usize, len: usize) -> bool {
        offset + (BYTES_PER_PIXEL - 1) < len
    }

    /// Number of consecutive whole pixels starting at `offset` that fit in `len` bytes,
    /// capped at `max`. Pixels past this point are missing data.
    #[inline(always)]
    pub const fn pixels_available(offset: usize, len: usize, max: u32) -> u32 {
        if offset >= len {
            return 0;
        }
        let whole = (len - offset) / BYTES_PER_PIXEL;
        if whole < max as usize {
            whole as u32
        } else {
            max
        }
    }
}
