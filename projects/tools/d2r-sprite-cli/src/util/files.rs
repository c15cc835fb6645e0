use crate::error::CliError;
use log::{error, warn};
use std::fs;
use std::path::*;

/// Recursively visits directories and collects entries.
///
/// This function traverses the directory tree rooted at `dir`, collecting all
/// directory entries into a vector. Directories or entries that cannot be read
/// are logged and skipped.
///
/// # Arguments
///
/// * `dir`: The directory to start the traversal from.
/// * `entries`: A mutable reference to the vector of entries to populate.
pub fn find_all_files(dir: &Path, entries: &mut Vec<fs::DirEntry>) -> std::io::Result<()> {
    let dir_entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Skipping unreadable directory {}: {e}", dir.display());
            return Ok(());
        }
    };

    for entry in dir_entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(_) => continue, // Skip problematic entries, e.g. those without access.
        };

        let path = entry.path();
        if path.is_dir() {
            find_all_files(&path, entries)?;
        } else {
            entries.push(entry);
        }
    }
    Ok(())
}

/// Logs the error of a single file in a batch. The batch carries on.
pub fn handle_process_entry_error(result: Result<(), CliError>) {
    if let Err(e) = result {
        error!("{e}");
    }
}

/// Canonicalizes a CLI path argument, creating the directory if it doesn't exist.
///
/// # Returns
///
/// A canonicalized PathBuf on success, or a String error message on failure.
pub fn canonicalize_cli_path(value: &str) -> Result<PathBuf, String> {
    let path = Path::new(value);

    if !path.exists() {
        fs::create_dir_all(path).map_err(|e| format!("Failed to create directory: {e}"))?;
    }

    fs::canonicalize(path).map_err(|e| format!("Invalid path: {e}"))
}

/// Canonicalizes a CLI path argument that must already exist (file or directory).
pub fn existing_cli_path(value: &str) -> Result<PathBuf, String> {
    fs::canonicalize(value).map_err(|e| format!("Invalid path '{value}': {e}"))
}

/// Saves RGBA pixels as a PNG file.
pub fn save_png(path: &Path, rgba: Vec<u8>, width: u32, height: u32) -> Result<(), CliError> {
    let image = image::RgbaImage::from_raw(width, height, rgba)
        .ok_or(CliError::InvalidImageBuffer { width, height })?;
    image.save_with_format(path, image::ImageFormat::Png)?;
    Ok(())
}
