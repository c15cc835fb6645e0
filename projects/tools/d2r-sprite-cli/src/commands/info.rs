use crate::error::CliError;
use crate::util::existing_cli_path;
use argh::FromArgs;
use bytesize::ByteSize;
use d2r_sprite::file_io::read_sprite_file;
use d2r_sprite::{parse_header, SpriteHeader};
use std::path::PathBuf;

#[derive(FromArgs, Debug)]
/// Print the header and frame geometry of a sprite file
#[argh(subcommand, name = "info")]
pub struct InfoCmd {
    /// sprite file to inspect
    #[argh(option, from_str_fn(existing_cli_path))]
    pub input: PathBuf,
}

pub fn handle_info_command(cmd: InfoCmd) -> Result<(), CliError> {
    let data = read_sprite_file(&cmd.input).map_err(|e| CliError::from(e).in_file(&cmd.input))?;
    let header = parse_header(&data).map_err(|e| CliError::from(e).in_file(&cmd.input))?;

    println!("{}", cmd.input.display());
    print!("{}", describe(&header, data.len()));
    Ok(())
}

/// Human readable summary of a sprite header.
pub fn describe(header: &SpriteHeader, file_len: usize) -> String {
    let mut out = String::new();
    out.push_str(&format!("  Magic:        {}\n", header.magic));
    out.push_str(&format!("  Version:      {}\n", header.version));
    out.push_str(&format!(
        "  Dimensions:   {}x{}\n",
        header.total_width, header.frame_height
    ));
    out.push_str(&format!(
        "  Frames:       {} (stored as {})\n",
        header.frame_count, header.raw_frame_count
    ));
    out.push_str(&format!(
        "  Frame size:   {}x{}\n",
        header.frame_width, header.frame_height
    ));

    let expected = header.expected_file_size();
    out.push_str(&format!(
        "  Payload:      {}\n",
        ByteSize(header.strip_size() as u64)
    ));
    out.push_str(&format!("  File size:    {}", ByteSize(file_len as u64)));
    if file_len < expected {
        out.push_str(&format!(
            " (truncated, {} missing)",
            ByteSize((expected - file_len) as u64)
        ));
    } else if file_len > expected {
        out.push_str(&format!(
            " ({} trailing)",
            ByteSize((file_len - expected) as u64)
        ));
    }
    out.push('\n');
    out
}
