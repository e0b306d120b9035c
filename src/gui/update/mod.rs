//! gui/update/mod.rs
//! Update logic (router).
//! Mutates state in response to `Message` events.
//!
//! Everything runs on the UI thread; file dialogs block until the user answers.

use iced::Task;

use super::state::{Message, TagEditor};

mod cover;
mod form;
mod load;
mod save;

pub(crate) fn update(state: &mut TagEditor, message: Message) -> Task<Message> {
    match message {
        // Loading
        Message::PickAudio => load::pick_audio(state),
        Message::FileHovered => load::file_hovered(state),
        Message::FilesHoveredLeft => load::files_hovered_left(state),
        Message::FileDropped(path) => load::file_dropped(state, path),

        // Form
        Message::FieldChanged(field, value) => form::field_changed(state, field, value),
        Message::ClearAll => form::clear_all(state),

        // Cover
        Message::PickCover => cover::pick_cover(state),
        Message::ExtractCover => cover::extract_cover(state),

        // Save
        Message::SaveAs => save::save_as(state),

        Message::ToggleDebug => {
            state.show_debug = !state.show_debug;
            Task::none()
        }
    }
}
