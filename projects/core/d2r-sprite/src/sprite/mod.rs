/// Shared constants between modules.
pub mod constants;

/// Determine if a file is a sprite file.
pub mod likely_sprite;

/// Parse the fixed 40 byte sprite header.
pub mod parse_sprite;

pub use likely_sprite::*;
pub use parse_sprite::*;
