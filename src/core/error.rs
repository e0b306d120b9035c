//! Errors returned by core operations.
//!
//! The GUI never matches on these; it logs the `Display` text in the debug panel.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TagError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ID3 error: {0}")]
    Id3(#[from] id3::Error),

    #[error("tag library error: {0}")]
    Lofty(#[from] lofty::error::LoftyError),

    #[error("unsupported audio format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error(
        "destination {} has a different format than source {}",
        .destination.display(),
        .original.display()
    )]
    FormatMismatch {
        original: PathBuf,
        destination: PathBuf,
    },

    #[error("destination is the source file: {}", .0.display())]
    DestinationIsSource(PathBuf),

    #[error("not a JPEG or PNG image: {}", .0.display())]
    InvalidImage(PathBuf),

    #[error("file has no writable tag container: {}", .0.display())]
    NoTagContainer(PathBuf),
}
