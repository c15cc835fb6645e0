use d2r_sprite::file_io::FileOperationError;
use d2r_sprite::{ChannelError, DecodeError, EncodeError, ParseError};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    FileOperation(#[from] FileOperationError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Encode(#[from] EncodeError),
    #[error(transparent)]
    Channel(#[from] ChannelError),
    #[error(transparent)]
    Image(#[from] image::ImageError),
    #[error("Pixel buffer does not describe a {width}x{height} image")]
    InvalidImageBuffer { width: u32, height: u32 },
    #[error("{path}: {source}")]
    InFile {
        path: PathBuf,
        #[source]
        source: Box<CliError>,
    },
}

impl CliError {
    /// Attaches the path of the file being processed.
    pub fn in_file(self, path: impl Into<PathBuf>) -> Self {
        Self::InFile {
            path: path.into(),
            source: Box::new(self),
        }
    }
}
