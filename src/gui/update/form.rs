//! gui/update/form.rs
//! Form edits and "clear all".

use iced::Task;

use super::super::state::{Field, FormDraft, Message, TagEditor};

pub(crate) fn field_changed(state: &mut TagEditor, field: Field, value: String) -> Task<Message> {
    set_field(&mut state.draft, field, value);
    Task::none()
}

fn set_field(draft: &mut FormDraft, field: Field, value: String) {
    match field {
        Field::Title => draft.title = value,
        Field::Artists => draft.artists = value,
        Field::Album => draft.album = value,
        Field::Composers => draft.composers = value,
        Field::Genres => draft.genres = value,
        Field::Year => draft.year = value,
        Field::Bpm => draft.bpm = value,
        Field::TrackNo => draft.track_no = value,
        Field::DiscNo => draft.disc_no = value,
        Field::Comment => draft.comment = value,
    }
}

/// Empty every field and drop the pending cover.
/// The loaded source stays, so "Save As" still works (and keeps the file's pictures).
pub(crate) fn clear_all(state: &mut TagEditor) -> Task<Message> {
    state.debug_log.push("Form cleared.");
    state.draft = FormDraft::default();
    state.set_cover(None);
    Task::none()
}
