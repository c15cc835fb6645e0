//! Channel order conversion between the on-disk BGRA order and RGBA.
//!
//! Swapping red and blue is its own inverse, so both directions share one kernel.

use crate::error::ChannelError;
use crate::sprite::constants::BYTES_PER_PIXEL;
use alloc::vec::Vec;

#[inline(always)]
fn check_aligned(len: usize) -> Result<(), ChannelError> {
    if !len.is_multiple_of(BYTES_PER_PIXEL) {
        return Err(ChannelError::UnalignedLength { len });
    }
    Ok(())
}

/// Swaps the first and third byte of every 4 byte pixel, in place.
///
/// Turns BGRA into RGBA and vice versa.
///
/// # Errors
///
/// [`ChannelError::UnalignedLength`] if `pixels.len()` is not a multiple of 4.
pub fn swap_red_blue_in_place(pixels: &mut [u8]) -> Result<(), ChannelError> {
    check_aligned(pixels.len())?;
    swap_red_blue_pixels(pixels);
    Ok(())
}

/// Swap kernel. Trailing bytes that do not form a whole pixel are left alone.
#[inline]
pub(crate) fn swap_red_blue_pixels(pixels: &mut [u8]) {
    for pixel in pixels.chunks_exact_mut(BYTES_PER_PIXEL) {
        pixel.swap(0, 2);
    }
}

/// Converts BGRA pixels (as stored in sprites) to RGBA.
///
/// # Errors
///
/// [`ChannelError::UnalignedLength`] if `bgra.len()` is not a multiple of 4.
pub fn bgra_to_rgba(bgra: &[u8]) -> Result<Vec<u8>, ChannelError> {
    let mut rgba = bgra.to_vec();
    swap_red_blue_in_place(&mut rgba)?;
    Ok(rgba)
}

/// Converts RGBA pixels to the BGRA order stored in sprites.
///
/// # Errors
///
/// [`ChannelError::UnalignedLength`] if `rgba.len()` is not a multiple of 4.
pub fn rgba_to_bgra(rgba: &[u8]) -> Result<Vec<u8>, ChannelError> {
    let mut bgra = rgba.to_vec();
    swap_red_blue_in_place(&mut bgra)?;
    Ok(bgra)
}
