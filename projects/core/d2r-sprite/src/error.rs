//! Error types for sprite parsing, decoding and encoding.

use thiserror::Error;

/// Result type for header parsing
pub type ParseResult<T> = Result<T, ParseError>;

/// Result type for decode operations
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Result type for encode operations
pub type EncodeResult<T> = Result<T, EncodeError>;

/// Errors that occur while reading the 40 byte sprite header.
///
/// All of these are fatal to the call; no partial header is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input is shorter than the fixed header
    #[error("File too small to contain a valid sprite header: required {required} bytes, got {actual} bytes")]
    TooSmall { required: usize, actual: usize },

    /// First four bytes are neither `SpA1` nor `SPa1`
    #[error("Invalid sprite magic: expected 'SpA1' or 'SPa1', got {found:02X?}")]
    BadMagic { found: [u8; 4] },

    /// Width or height is not positive, or exceeds the active limit
    #[error("Invalid dimensions: {width}x{height} (limit {limit})")]
    InvalidDimensions { width: i32, height: i32, limit: u32 },
}

/// Errors that occur while extracting pixel data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The header could not be parsed
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Requested a frame the sprite does not have
    #[error("Frame {index} out of range: sprite has {frame_count} frame(s)")]
    FrameOutOfRange { index: u32, frame_count: u32 },

    /// A pixel lies beyond the end of the input. Only raised by [`MissingPixelPolicy::Fail`].
    ///
    /// [`MissingPixelPolicy::Fail`]: crate::decode::MissingPixelPolicy::Fail
    #[error("Missing pixel data for frame {frame} at ({x}, {y}): offset {offset} is beyond input of {len} bytes")]
    MissingPixelData {
        frame: u32,
        x: u32,
        y: u32,
        offset: usize,
        len: usize,
    },
}

/// Errors that occur while rebuilding a sprite from edited pixels.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The original sprite could not be parsed
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Replacement image does not have the geometry of the original
    #[error("Image dimensions ({actual_width}x{actual_height}) don't match original sprite ({expected_width}x{expected_height})")]
    DimensionMismatch {
        expected_width: u32,
        expected_height: u32,
        actual_width: u32,
        actual_height: u32,
    },

    /// Pixel buffer length disagrees with the declared dimensions
    #[error("Pixel buffer size mismatch: expected {expected} bytes, got {actual} bytes")]
    PixelBufferSize { expected: usize, actual: usize },

    /// Channel reordering failed
    #[error(transparent)]
    Channel(#[from] ChannelError),
}

/// Errors from channel order conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChannelError {
    /// Buffer does not hold a whole number of 4 byte pixels
    #[error("Invalid pixel buffer alignment: size {len} is not divisible by 4")]
    UnalignedLength { len: usize },
}
