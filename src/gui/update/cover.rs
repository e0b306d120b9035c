//! gui/update/cover.rs
//! Pick a new cover image, or extract the pending one to disk.

use std::path::Path;

use iced::Task;

use super::super::state::{Message, TagEditor};
use crate::core;
use crate::core::formats::IMAGE_EXTENSIONS;

pub(crate) fn pick_cover(state: &mut TagEditor) -> Task<Message> {
    let picked = rfd::FileDialog::new()
        .add_filter("Images", IMAGE_EXTENSIONS)
        .pick_file();

    if let Some(path) = picked {
        apply_cover_file(state, &path);
    }
    Task::none()
}

/// Replace the pending cover with an image file. Nothing changes on failure.
pub(crate) fn apply_cover_file(state: &mut TagEditor, path: &Path) {
    match core::import_cover(path) {
        Ok(cover) => {
            state.set_cover(Some(cover));
            state.debug_log.push("New cover image selected.");
        }
        Err(e) => {
            log::warn!("{e}");
            state.debug_log.error("Failed to load image.");
        }
    }
}

pub(crate) fn extract_cover(state: &mut TagEditor) -> Task<Message> {
    let Some(cover) = &state.cover else {
        return Task::none();
    };

    let ext = cover.format.extension();
    let picked = rfd::FileDialog::new()
        .add_filter(ext.to_ascii_uppercase(), &[ext])
        .set_file_name(format!("cover.{ext}"))
        .save_file();

    if let Some(path) = picked {
        extract_to(state, &path);
    }
    Task::none()
}

pub(crate) fn extract_to(state: &mut TagEditor, destination: &Path) {
    let Some(cover) = &state.cover else { return };

    match core::extract_cover(cover, destination) {
        Ok(()) => state.debug_log.push("Cover extracted."),
        Err(e) => state.debug_log.error(format!("ERROR: {e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{CoverArt, ImageFormat};
    use std::fs;
    use tempfile::TempDir;

    const PNG: [u8; 10] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 7, 7];

    #[test]
    fn picked_image_becomes_pending_cover() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("front.png");
        fs::write(&path, PNG).unwrap();

        let mut state = TagEditor::default();
        apply_cover_file(&mut state, &path);

        let cover = state.cover.as_ref().unwrap();
        assert_eq!(cover.format, ImageFormat::Png);
        assert!(state.cover_handle.is_some());
    }

    #[test]
    fn bad_image_keeps_previous_cover() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("front.jpg");
        fs::write(&path, b"definitely not a jpeg").unwrap();

        let mut state = TagEditor::default();
        let previous = CoverArt::from_bytes(vec![0xFF, 0xD8, 0xFF, 0x00]);
        state.set_cover(Some(previous.clone()));

        apply_cover_file(&mut state, &path);

        assert_eq!(state.cover, Some(previous));
        assert!(state.debug_log.last().unwrap().ends_with("Failed to load image."));
    }

    #[test]
    fn extract_writes_pending_bytes() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("cover.png");

        let mut state = TagEditor::default();
        state.set_cover(Some(CoverArt::from_bytes(PNG.to_vec())));
        extract_to(&mut state, &out);

        assert_eq!(fs::read(&out).unwrap(), PNG.to_vec());
        assert!(state.debug_log.last().unwrap().ends_with("Cover extracted."));
    }

    #[test]
    fn extract_without_cover_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("cover.jpg");

        let mut state = TagEditor::default();
        extract_to(&mut state, &out);
        assert!(!out.exists());
    }
}
