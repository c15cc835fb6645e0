//! File I/O helpers for sprite files.
//!
//! This module provides memory-mapped reading and writing of sprite files, plus the
//! backup-then-replace workflow used when importing edited images, using `lightweight-mmap`.

mod error;
pub use error::*;

#[cfg(feature = "lightweight-mmap")]
mod lightweight_mmap_impl;

// Public API lives in there.
// If adding alternative implementation, you need to swap it out.
#[cfg(feature = "lightweight-mmap")]
pub use lightweight_mmap_impl::*;

#[cfg(not(feature = "lightweight-mmap"))]
compile_error!("The 'lightweight-mmap' feature must be enabled for file I/O operations.");

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Suffix appended to a sprite's file name to form its backup.
pub const BACKUP_SUFFIX: &str = ".backup";

/// Path of the backup written before a sprite is replaced: `<path>.backup`.
///
/// The suffix is appended to the full file name, so `a.sprite` becomes `a.sprite.backup`.
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
}
