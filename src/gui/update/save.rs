//! gui/update/save.rs
//! "Save As": copy the source file and write the form into the copy.

use std::path::{Path, PathBuf};

use iced::Task;

use super::super::state::{Message, TagEditor};
use super::super::util::{file_name, record_from_draft};
use crate::core;

pub(crate) fn save_as(state: &mut TagEditor) -> Task<Message> {
    let Some(source) = state.source.clone() else {
        return Task::none();
    };

    let mut dialog = rfd::FileDialog::new().set_file_name(file_name(&source));
    if let Some(ext) = source.extension().and_then(|e| e.to_str()) {
        dialog = dialog.add_filter("Audio", &[ext]);
    }

    if let Some(destination) = dialog.save_file() {
        let destination = with_source_extension(destination, &source);
        if save_to(state, &destination) {
            let _ = rfd::MessageDialog::new()
                .set_title("Audio Tag Editor")
                .set_description("Success!")
                .set_level(rfd::MessageLevel::Info)
                .show();
        }
    }
    Task::none()
}

/// Some dialog backends return the typed name as-is; a bare name gets the source's extension.
pub(crate) fn with_source_extension(mut destination: PathBuf, source: &Path) -> PathBuf {
    if destination.extension().is_none() {
        if let Some(ext) = source.extension() {
            destination.set_extension(ext);
        }
    }
    destination
}

/// Returns true when the copy was written.
pub(crate) fn save_to(state: &mut TagEditor, destination: &Path) -> bool {
    let Some(source) = state.source.clone() else {
        return false;
    };

    let record = record_from_draft(
        &state.draft,
        state.cover.clone(),
        state.config.list_separator,
    );

    match core::save_copy(&source, destination, &record) {
        Ok(()) => {
            state.debug_log.push("File saved.");
            state.status = format!("SAVED: {}", file_name(destination));
            true
        }
        Err(e) => {
            state.debug_log.error(format!("SAVE ERROR: {e}"));
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::load::load_path;
    use super::*;
    use crate::core::load_file;
    use crate::core::tags::write_tag_record;
    use crate::core::types::{CoverArt, TagRecord};
    use std::fs;
    use tempfile::TempDir;

    fn cover() -> CoverArt {
        CoverArt::from_bytes(vec![0xFF, 0xD8, 0xFF, 0xDB, 9, 9, 9])
    }

    fn source_mp3(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("in.mp3");
        let mut bytes = vec![0xFF, 0xFB, 0x90, 0x64];
        bytes.resize(2048, 0);
        fs::write(&path, bytes).unwrap();

        let record = TagRecord {
            title: Some("Before".to_string()),
            composers: vec!["X".to_string(), "Y".to_string()],
            year: Some(2003),
            cover: Some(cover()),
            ..TagRecord::default()
        };
        write_tag_record(&path, &record).unwrap();
        path
    }

    #[test]
    fn edited_form_is_written_to_the_copy() {
        let dir = TempDir::new().unwrap();
        let src = source_mp3(&dir);
        let mut state = TagEditor::default();
        load_path(&mut state, &src);

        state.draft.title = "After".to_string();
        state.draft.composers = "Y; X".to_string();
        state.draft.year = "not a year".to_string();
        state.draft.bpm = "90".to_string();

        let dst = dir.path().join("out.mp3");
        assert!(save_to(&mut state, &dst));

        let saved = load_file(&dst).unwrap();
        assert_eq!(saved.title.as_deref(), Some("After"));
        assert_eq!(saved.composers, vec!["Y".to_string(), "X".to_string()]);
        assert_eq!(saved.year, None);
        assert_eq!(saved.bpm, Some(90));
        assert_eq!(saved.cover, Some(cover()));
        assert_eq!(load_file(&src).unwrap().title.as_deref(), Some("Before"));
        assert_eq!(state.status, "SAVED: out.mp3");
    }

    #[test]
    fn cleared_form_keeps_embedded_cover() {
        let dir = TempDir::new().unwrap();
        let src = source_mp3(&dir);
        let mut state = TagEditor::default();
        load_path(&mut state, &src);
        let _ = super::super::form::clear_all(&mut state);

        let dst = dir.path().join("cleared.mp3");
        assert!(save_to(&mut state, &dst));

        let saved = load_file(&dst).unwrap();
        assert_eq!(saved.title, None);
        assert!(saved.composers.is_empty());
        assert_eq!(saved.cover, Some(cover()));
    }

    #[test]
    fn failed_save_is_logged() {
        let dir = TempDir::new().unwrap();
        let src = source_mp3(&dir);
        let mut state = TagEditor::default();
        load_path(&mut state, &src);

        assert!(!save_to(&mut state, &src));
        assert!(state.debug_log.last().unwrap().contains("SAVE ERROR:"));
        assert_eq!(state.status, "LOADED: in.mp3");
    }

    #[test]
    fn bare_name_gets_source_extension() {
        let dir = TempDir::new().unwrap();
        let src = source_mp3(&dir);
        let mut state = TagEditor::default();
        load_path(&mut state, &src);

        let dst = with_source_extension(dir.path().join("newname"), &src);
        assert_eq!(dst, dir.path().join("newname.mp3"));
        assert!(save_to(&mut state, &dst));
        assert_eq!(load_file(&dst).unwrap().title.as_deref(), Some("Before"));

        let typed = dir.path().join("keep.MP3");
        assert_eq!(with_source_extension(typed.clone(), &src), typed);
    }

    #[test]
    fn nothing_loaded_nothing_saved() {
        let dir = TempDir::new().unwrap();
        let mut state = TagEditor::default();
        assert!(!save_to(&mut state, &dir.path().join("x.mp3")));
        assert!(!dir.path().join("x.mp3").exists());
    }
}
