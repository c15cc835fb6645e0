//! File I/O implementation using lightweight-mmap.

use super::{backup_path, FileOperationResult};
use crate::encode::replace_pixels;
use crate::sprite::constants::SPRITE_HEADER_SIZE;
use crate::sprite::{parse_header, SpriteHeader};
use lightweight_mmap::handles::*;
use lightweight_mmap::mmap::*;
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::vec::Vec;

/// Read a whole sprite file into memory.
///
/// # Arguments
///
/// * `path` - Path to the sprite file
///
/// # Returns
///
/// The file contents. No validation is performed; pass the result to [`parse_header`].
pub fn read_sprite_file(path: &Path) -> FileOperationResult<Vec<u8>> {
    let handle = ReadOnlyFileHandle::open(path)?;
    let size = handle.size()? as usize;

    // Empty files cannot be mapped.
    if size == 0 {
        return Ok(Vec::new());
    }

    let mapping = ReadOnlyMmap::new(&handle, 0, size)?;
    Ok(mapping.as_slice().to_vec())
}

/// Parse only the header of a sprite file, without reading the pixel payload.
///
/// # Arguments
///
/// * `path` - Path to the sprite file
///
/// # Returns
///
/// The parsed header, or [`FileOperationError::Decode`] if the file is too small or invalid.
///
/// [`FileOperationError::Decode`]: super::FileOperationError::Decode
pub fn read_sprite_header(path: &Path) -> FileOperationResult<SpriteHeader> {
    let handle = ReadOnlyFileHandle::open(path)?;
    let size = handle.size()? as usize;
    let map_size = size.min(SPRITE_HEADER_SIZE);

    if map_size == 0 {
        return Ok(parse_header(&[])?);
    }

    let mapping = ReadOnlyMmap::new(&handle, 0, map_size)?;
    Ok(parse_header(mapping.as_slice())?)
}

/// Write `data` to `path`, creating or replacing the file.
///
/// # Arguments
///
/// * `path` - Path to the output file (will be created). The output directory must exist.
/// * `data` - Bytes to write
pub fn write_sprite_file(path: &Path, data: &[u8]) -> FileOperationResult<()> {
    let handle = ReadWriteFileHandle::create_preallocated(path, data.len() as i64)?;
    if data.is_empty() {
        return Ok(());
    }

    let mut mapping = ReadWriteMmap::new(&handle, 0, data.len())?;
    mapping.as_mut_slice().copy_from_slice(data);
    Ok(())
}

/// Replace the pixels of the sprite at `path` with an RGBA image, keeping a backup.
///
/// The original file is read and re-encoded with [`replace_pixels`]. Nothing is written if
/// encoding fails. Otherwise the original bytes are written to [`backup_path`] first, then the
/// new sprite replaces the original.
///
/// # Arguments
///
/// * `path` - Path to the sprite being replaced
/// * `rgba` - `width * height * 4` bytes of RGBA pixels
/// * `width`, `height` - Image dimensions; must match the sprite's strip
///
/// # Returns
///
/// The path of the backup file.
pub fn replace_sprite_file(
    path: &Path,
    rgba: &[u8],
    width: u32,
    height: u32,
) -> FileOperationResult<PathBuf> {
    let original = read_sprite_file(path)?;
    let encoded = replace_pixels(&original, rgba, width, height)?;

    let backup = backup_path(path);
    write_sprite_file(&backup, &original)?;
    debug!("backed up {} to {}", path.display(), backup.display());

    write_sprite_file(path, &encoded)?;
    info!(
        "replaced {} ({}x{}, {} bytes)",
        path.display(),
        width,
        height,
        encoded.len()
    );

    Ok(backup)
}
