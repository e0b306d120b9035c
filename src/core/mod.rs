//! core/mod.rs
//!
//! The brain of the app:
//! - Load a file's tag container into a `TagRecord`
//! - Save edits as a tagged COPY of the source (the source is never written)
//! - Import/extract cover images
//!
//! The GUI only calls the functions in this file; it never touches a tag crate.

pub mod error;
pub mod formats;
pub mod tags;
pub mod types;

use std::fs;
use std::path::Path;

use error::TagError;
use types::{AudioFormat, CoverArt, ImageFormat, TagRecord};

/// Read the tag container of a supported audio file.
pub fn load_file(path: &Path) -> Result<TagRecord, TagError> {
    require_audio(path)?;
    let record = tags::read_tag_record(path)?;
    log::info!(
        "loaded {} (cover: {})",
        path.display(),
        if record.cover.is_some() { "yes" } else { "no" }
    );
    Ok(record)
}

/// Copy `source` to `destination`, then rewrite the copy's tag container from `record`.
///
/// - Refuses to write onto the source itself.
/// - Destination must keep the source's format (the bytes are copied, not transcoded).
/// - A failed write can leave a partial destination behind; it is not cleaned up.
pub fn save_copy(source: &Path, destination: &Path, record: &TagRecord) -> Result<(), TagError> {
    let source_format = require_audio(source)?;
    let destination_format = require_audio(destination)?;

    if source_format != destination_format {
        return Err(TagError::FormatMismatch {
            original: source.to_path_buf(),
            destination: destination.to_path_buf(),
        });
    }

    if same_file(source, destination) {
        return Err(TagError::DestinationIsSource(destination.to_path_buf()));
    }

    let copied = fs::copy(source, destination)?;
    log::debug!("copied {copied} bytes to {}", destination.display());

    tags::write_tag_record(destination, record)?;
    log::info!("saved {}", destination.display());
    Ok(())
}

/// Write the cover bytes verbatim.
pub fn extract_cover(cover: &CoverArt, destination: &Path) -> Result<(), TagError> {
    fs::write(destination, &cover.data)?;
    log::info!(
        "extracted {} bytes of cover art to {}",
        cover.data.len(),
        destination.display()
    );
    Ok(())
}

/// Read an image file to use as the new cover. Only JPEG and PNG are accepted.
pub fn import_cover(path: &Path) -> Result<CoverArt, TagError> {
    if !formats::is_image_path(path) {
        return Err(TagError::InvalidImage(path.to_path_buf()));
    }

    let cover = CoverArt::from_bytes(fs::read(path)?);
    if cover.format == ImageFormat::Unknown {
        return Err(TagError::InvalidImage(path.to_path_buf()));
    }
    Ok(cover)
}

fn require_audio(path: &Path) -> Result<AudioFormat, TagError> {
    formats::audio_format(path).ok_or_else(|| TagError::UnsupportedFormat(path.to_path_buf()))
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
