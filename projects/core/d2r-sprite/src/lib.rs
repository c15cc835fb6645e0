#![doc = include_str!("../README.MD")]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

#[cfg(test)]
pub mod test_prelude;

// Core modules
pub mod channels;
pub mod decode;
pub mod encode;
pub mod error;
pub mod layout;
pub mod sprite;

#[cfg(feature = "file-io")]
pub mod file_io;

// Re-export key types
pub use decode::{DecodeOptions, DecodedImage, FrameIter, MissingPixelPolicy};
pub use error::{
    ChannelError, DecodeError, DecodeResult, EncodeError, EncodeResult, ParseError, ParseResult,
};
pub use layout::FrameLayout;
pub use sprite::{
    likely_sprite, parse_header, parse_header_with_options, DimensionLimit, ParseOptions,
    SpriteHeader, SpriteMagic,
};

// Re-export file operation types when file-io feature is enabled
#[cfg(feature = "file-io")]
pub use file_io::{FileOperationError, FileOperationResult};

// Re-export convenience functions
pub use channels::{bgra_to_rgba, rgba_to_bgra, swap_red_blue_in_place};
pub use decode::{
    decode_all, decode_all_with_options, decode_frame, decode_frame_with_options, decode_image,
    decode_strip, frames, frames_with_options,
};
pub use encode::{encode_sprite, replace_pixels};
