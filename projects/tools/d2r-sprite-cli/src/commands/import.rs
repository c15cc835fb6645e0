use crate::error::CliError;
use crate::util::existing_cli_path;
use argh::FromArgs;
use d2r_sprite::file_io::replace_sprite_file;
use log::info;
use std::path::{Path, PathBuf};

#[derive(FromArgs, Debug)]
/// Replace the pixels of a sprite with a PNG image. The original is kept as <sprite>.backup
#[argh(subcommand, name = "import")]
pub struct ImportCmd {
    /// PNG image with the same dimensions as the sprite's strip
    #[argh(option, from_str_fn(existing_cli_path))]
    pub png: PathBuf,

    /// sprite file to update in place
    #[argh(option, from_str_fn(existing_cli_path))]
    pub sprite: PathBuf,
}

pub fn handle_import_command(cmd: ImportCmd) -> Result<(), CliError> {
    let backup = import_png(&cmd.png, &cmd.sprite).map_err(|e| e.in_file(&cmd.sprite))?;

    println!("Updated {}", cmd.sprite.display());
    println!("Backup written to {}", backup.display());
    Ok(())
}

/// Loads `png` as RGBA8 and writes it into `sprite`, returning the backup path.
pub fn import_png(png: &Path, sprite: &Path) -> Result<PathBuf, CliError> {
    let image = image::open(png)?.to_rgba8();
    let (width, height) = image.dimensions();
    info!("loaded {} ({width}x{height})", png.display());

    Ok(replace_sprite_file(sprite, image.as_raw(), width, height)?)
}
