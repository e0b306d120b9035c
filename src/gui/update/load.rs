//! gui/update/load.rs
//! Open dialog + drag-and-drop -> load a file into the form.

use std::path::{Path, PathBuf};

use iced::Task;

use super::super::state::{Message, TagEditor};
use super::super::util::{draft_from_record, file_name};
use crate::core;
use crate::core::formats::AUDIO_EXTENSIONS;

pub(crate) fn pick_audio(state: &mut TagEditor) -> Task<Message> {
    let picked = rfd::FileDialog::new()
        .add_filter("Audio Files", AUDIO_EXTENSIONS)
        .pick_file();

    if let Some(path) = picked {
        load_path(state, &path);
    }
    Task::none()
}

pub(crate) fn file_hovered(state: &mut TagEditor) -> Task<Message> {
    state.drop_hovered = true;
    state.drop_consumed = false;
    Task::none()
}

pub(crate) fn files_hovered_left(state: &mut TagEditor) -> Task<Message> {
    state.drop_hovered = false;
    state.drop_consumed = false;
    Task::none()
}

/// A multi-file drop arrives as one message per file. The first one is loaded;
/// the rest are ignored until the next hover.
pub(crate) fn file_dropped(state: &mut TagEditor, path: PathBuf) -> Task<Message> {
    state.drop_hovered = false;
    if state.drop_consumed {
        log::debug!("ignoring extra dropped file {}", path.display());
        return Task::none();
    }
    state.drop_consumed = true;
    load_path(state, &path);
    Task::none()
}

/// Load `path` into the form. On failure only the debug log changes.
pub(crate) fn load_path(state: &mut TagEditor, path: &Path) {
    state
        .debug_log
        .push(format!("Loading: {}", file_name(path)));

    match core::load_file(path) {
        Ok(record) => {
            state.draft = draft_from_record(&record, &state.config.list_joiner);
            state.set_cover(record.cover);
            state.source = Some(path.to_path_buf());
            state.status = format!("LOADED: {}", file_name(path));
        }
        Err(e) => state.debug_log.error(format!("ERROR: {e}")),
    }
}
