use crate::error::CliError;
use crate::util::{
    canonicalize_cli_path, existing_cli_path, find_all_files, handle_process_entry_error, save_png,
    Throughput,
};
use argh::FromArgs;
use bytesize::ByteSize;
use d2r_sprite::file_io::read_sprite_file;
use d2r_sprite::{bgra_to_rgba, decode_image, frames, likely_sprite, parse_header};
use log::{debug, info};
#[cfg(feature = "multithreaded")]
use rayon::prelude::*;
use std::{
    path::{Path, PathBuf},
    sync::atomic::{AtomicU64, Ordering},
    time::Instant,
};

#[derive(FromArgs, Debug)]
/// Export sprites as PNG images
#[argh(subcommand, name = "export")]
pub struct ExportCmd {
    /// sprite file, or directory to scan recursively for sprites
    #[argh(option, from_str_fn(existing_cli_path))]
    pub input: PathBuf,

    /// output directory path
    #[argh(option, from_str_fn(canonicalize_cli_path))]
    pub output: PathBuf,

    /// write each frame to its own <name>_<index>.png instead of the whole strip
    #[argh(switch)]
    pub frames: bool,
}

/// What to write for each sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportMode {
    /// The whole strip as one image.
    Image,
    /// One image per frame.
    Frames,
}

pub fn handle_export_command(cmd: ExportCmd) -> Result<(), CliError> {
    let mode = if cmd.frames {
        ExportMode::Frames
    } else {
        ExportMode::Image
    };

    if cmd.input.is_file() {
        let written = export_sprite(&cmd.input, &cmd.output, mode)
            .map_err(|e| e.in_file(&cmd.input))?;
        println!("Wrote {written} image(s) to {}", cmd.output.display());
        return Ok(());
    }

    let mut entries = Vec::new();
    find_all_files(&cmd.input, &mut entries)?;

    if entries.is_empty() {
        println!("No files found in input directory.");
        return Ok(());
    }

    info!("Found {} files to scan", entries.len());

    let start = Instant::now();
    let bytes_processed = AtomicU64::new(0);
    let images_written = AtomicU64::new(0);

    let process = |entry: &std::fs::DirEntry| {
        let path = entry.path();
        let result = export_entry(
            &path,
            &cmd.input,
            &cmd.output,
            mode,
            &bytes_processed,
            &images_written,
        )
        .map_err(|e| e.in_file(&path));
        handle_process_entry_error(result);
    };

    #[cfg(feature = "multithreaded")]
    entries.par_iter().for_each(process);
    #[cfg(not(feature = "multithreaded"))]
    entries.iter().for_each(process);

    let elapsed = start.elapsed();
    let total_bytes = bytes_processed.load(Ordering::Relaxed);

    println!("\n=== Export Complete ===");
    println!("Images written: {}", images_written.load(Ordering::Relaxed));
    println!("Time taken: {elapsed:.2?}");
    println!("Data processed: {}", ByteSize(total_bytes));
    println!("Throughput: {}", Throughput::measure(total_bytes, elapsed));

    Ok(())
}

/// Exports one file found while scanning `input_dir`, mirroring its relative location
/// under `output_dir`. Files that are not sprites are skipped.
fn export_entry(
    path: &Path,
    input_dir: &Path,
    output_dir: &Path,
    mode: ExportMode,
    bytes_processed: &AtomicU64,
    images_written: &AtomicU64,
) -> Result<(), CliError> {
    let data = read_sprite_file(path)?;
    if !likely_sprite(&data) {
        debug!("Skipping {}: not a sprite", path.display());
        return Ok(());
    }

    let relative_dir = path
        .strip_prefix(input_dir)
        .ok()
        .and_then(Path::parent)
        .unwrap_or(Path::new(""));
    let target_dir = output_dir.join(relative_dir);
    std::fs::create_dir_all(&target_dir)?;

    let written = export_data(&data, &file_stem(path), &target_dir, mode)?;
    bytes_processed.fetch_add(data.len() as u64, Ordering::Relaxed);
    images_written.fetch_add(written as u64, Ordering::Relaxed);
    Ok(())
}

/// Exports a single sprite file into `output_dir`. Returns the number of images written.
pub fn export_sprite(path: &Path, output_dir: &Path, mode: ExportMode) -> Result<usize, CliError> {
    let data = read_sprite_file(path)?;
    export_data(&data, &file_stem(path), output_dir, mode)
}

fn export_data(
    data: &[u8],
    stem: &str,
    output_dir: &Path,
    mode: ExportMode,
) -> Result<usize, CliError> {
    match mode {
        ExportMode::Image => {
            let image = decode_image(data)?;
            let target = output_dir.join(format!("{stem}.png"));
            save_png(&target, image.rgba, image.width, image.height)?;
            debug!("Wrote {}", target.display());
            Ok(1)
        }
        ExportMode::Frames => {
            let header = parse_header(data)?;
            let mut written = 0;
            for (index, frame) in frames(data, &header).enumerate() {
                let rgba = bgra_to_rgba(&frame?)?;
                let target = output_dir.join(format!("{stem}_{index}.png"));
                save_png(&target, rgba, header.frame_width, header.frame_height)?;
                debug!("Wrote {}", target.display());
                written += 1;
            }
            Ok(written)
        }
    }
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from("sprite"))
}
