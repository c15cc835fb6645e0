//! Extraction of frames and whole images from sprite data.
//!
//! Frame extraction copies pixels in the native BGRA order. Only [`decode_image`], the path
//! used for display, converts to RGBA.

use crate::channels::swap_red_blue_pixels;
use crate::error::{DecodeError, DecodeResult};
use crate::layout::FrameLayout;
use crate::sprite::constants::{BYTES_PER_PIXEL, PIXEL_DATA_OFFSET};
use crate::sprite::{parse_header, SpriteHeader};
use alloc::vec;
use alloc::vec::Vec;
use core::iter::FusedIterator;
use log::{debug, trace};

/// What to do with pixels whose bytes lie past the end of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingPixelPolicy {
    /// Substitute transparent black (0, 0, 0, 0). Tolerates truncated or hand-edited files.
    #[default]
    ZeroFill,
    /// Return [`DecodeError::MissingPixelData`] for the first missing pixel.
    Fail,
}

/// Settings for the `*_with_options` decode functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecodeOptions {
    pub missing_pixels: MissingPixelPolicy,
}

/// A whole sprite strip converted to RGBA, ready for an image library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    /// `width * height * 4` bytes in RGBA order.
    pub rgba: Vec<u8>,
}

/// Extracts a single frame in native (BGRA) order.
///
/// The result is exactly `frame_width * frame_height * 4` bytes. Pixels beyond the end of
/// `data` are zero-filled.
///
/// # Errors
///
/// [`DecodeError::FrameOutOfRange`] if `frame_index >= header.frame_count`.
#[inline]
pub fn decode_frame(data: &[u8], header: &SpriteHeader, frame_index: u32) -> DecodeResult<Vec<u8>> {
    decode_frame_with_options(data, header, frame_index, DecodeOptions::default())
}

/// Extracts a single frame in native (BGRA) order.
///
/// Same as [`decode_frame`], with missing pixels handled according to `options`.
pub fn decode_frame_with_options(
    data: &[u8],
    header: &SpriteHeader,
    frame_index: u32,
    options: DecodeOptions,
) -> DecodeResult<Vec<u8>> {
    if frame_index >= header.frame_count {
        return Err(DecodeError::FrameOutOfRange {
            index: frame_index,
            frame_count: header.frame_count,
        });
    }

    let layout = header.layout();
    let columns = layout.columns();
    let out_stride = header.frame_width as usize * BYTES_PER_PIXEL;
    let mut output = vec![0u8; header.frame_size()];

    for y in 0..layout.frame_height {
        let row_offset = layout.offset(frame_index, 0, y);
        let present = FrameLayout::pixels_available(row_offset, data.len(), columns);

        if present < columns {
            trace!(
                "frame {frame_index} row {y}: {} of {columns} pixels missing",
                columns - present
            );
            if options.missing_pixels == MissingPixelPolicy::Fail {
                return Err(DecodeError::MissingPixelData {
                    frame: frame_index,
                    x: present,
                    y,
                    offset: layout.offset(frame_index, present, y),
                    len: data.len(),
                });
            }
        }

        if present == 0 {
            continue;
        }
        let bytes = present as usize * BYTES_PER_PIXEL;
        let out_start = y as usize * out_stride;
        output[out_start..out_start + bytes].copy_from_slice(&data[row_offset..row_offset + bytes]);
    }

    Ok(output)
}

/// Extracts every frame in index order. The result holds `header.frame_count` buffers.
#[inline]
pub fn decode_all(data: &[u8], header: &SpriteHeader) -> DecodeResult<Vec<Vec<u8>>> {
    decode_all_with_options(data, header, DecodeOptions::default())
}

/// Extracts every frame in index order, handling missing pixels according to `options`.
pub fn decode_all_with_options(
    data: &[u8],
    header: &SpriteHeader,
    options: DecodeOptions,
) -> DecodeResult<Vec<Vec<u8>>> {
    debug!(
        "decoding {} frame(s) of {}x{} from {} bytes",
        header.frame_count,
        header.frame_width,
        header.frame_height,
        data.len()
    );
    frames_with_options(data, header, options).collect()
}

/// Lazily extracts frames in index order.
///
/// Each call starts again from frame 0; the iterator holds no state beyond its position.
#[inline]
pub fn frames<'a>(data: &'a [u8], header: &SpriteHeader) -> FrameIter<'a> {
    frames_with_options(data, header, DecodeOptions::default())
}

/// Lazily extracts frames in index order, handling missing pixels according to `options`.
#[inline]
pub fn frames_with_options<'a>(
    data: &'a [u8],
    header: &SpriteHeader,
    options: DecodeOptions,
) -> FrameIter<'a> {
    FrameIter {
        data,
        header: *header,
        options,
        next: 0,
    }
}

/// Iterator over the frames of a sprite. See [`frames`].
#[derive(Debug, Clone)]
pub struct FrameIter<'a> {
    data: &'a [u8],
    header: SpriteHeader,
    options: DecodeOptions,
    next: u32,
}

impl Iterator for FrameIter<'_> {
    type Item = DecodeResult<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.header.frame_count {
            return None;
        }
        let index = self.next;
        self.next += 1;
        Some(decode_frame_with_options(
            self.data,
            &self.header,
            index,
            self.options,
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.header.frame_count - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for FrameIter<'_> {}
impl FusedIterator for FrameIter<'_> {}

/// Copies the whole pixel strip (`total_width * frame_height * 4` bytes) in native order.
///
/// Data missing from a truncated file is zero-filled.
pub fn decode_strip(data: &[u8], header: &SpriteHeader) -> Vec<u8> {
    let mut strip = vec![0u8; header.strip_size()];
    if data.len() > PIXEL_DATA_OFFSET {
        let available = (data.len() - PIXEL_DATA_OFFSET).min(strip.len());
        strip[..available].copy_from_slice(&data[PIXEL_DATA_OFFSET..PIXEL_DATA_OFFSET + available]);
        if available < strip.len() {
            trace!(
                "strip truncated: {available} of {} bytes present",
                strip.len()
            );
        }
    }
    strip
}

/// Decodes a sprite for display: the whole strip, converted to RGBA.
///
/// Multi-frame sprites come out as all frames side by side.
///
/// # Errors
///
/// [`DecodeError::Parse`] if the header is invalid.
pub fn decode_image(data: &[u8]) -> DecodeResult<DecodedImage> {
    let header = parse_header(data)?;
    let mut rgba = decode_strip(data, &header);
    swap_red_blue_pixels(&mut rgba);

    debug!(
        "decoded {} sprite image {}x{}",
        header.magic, header.total_width, header.frame_height
    );

    Ok(DecodedImage {
        width: header.total_width,
        height: header.frame_height,
        rgba,
    })
}
