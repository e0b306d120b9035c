//! Middle section: cover column on the left, tag fields on the right.

use iced::widget::{Column, Row, button, column, container, mouse_area, row};
use iced::{Alignment, Length};

use super::super::state::{Field, Message, TagEditor};
use super::constants::{COVER_BIG, COVER_COLUMN_W};
use super::widgets::{cover_thumb, field_row};

pub(crate) fn build_editor(state: &TagEditor) -> iced::widget::Row<'_, Message> {
    row![
        build_cover_column(state).width(Length::Fixed(COVER_COLUMN_W)),
        build_fields(state).width(Length::Fill),
    ]
    .spacing(20)
    .height(Length::Fill)
}

fn build_cover_column(state: &TagEditor) -> Column<'_, Message> {
    let cover = mouse_area(cover_thumb(state.cover_handle.as_ref(), COVER_BIG))
        .on_press(Message::PickCover);

    let extract = button(container("EXTRACT COVER").center_x(Length::Fill))
        .width(Length::Fixed(COVER_BIG))
        .on_press_maybe(state.cover.is_some().then_some(Message::ExtractCover));

    column![cover, extract]
        .spacing(10)
        .padding([25, 0])
        .align_x(Alignment::Start)
}

fn build_fields(state: &TagEditor) -> Column<'_, Message> {
    let d = &state.draft;

    column![
        full(Field::Title, &d.title),
        full(Field::Artists, &d.artists),
        full(Field::Album, &d.album),
        full(Field::Composers, &d.composers),
        full(Field::Genres, &d.genres),
        pair(Field::Year, &d.year, Field::Bpm, &d.bpm),
        pair(Field::TrackNo, &d.track_no, Field::DiscNo, &d.disc_no),
        full(Field::Comment, &d.comment),
    ]
    .spacing(10)
    .padding([10, 0])
}

fn full(field: Field, value: &str) -> Row<'_, Message> {
    field_row(field.label(), value, move |s| Message::FieldChanged(field, s))
}

/// Two half-width fields on one line (Year/BPM, Track/Disc).
fn pair<'a>(left: Field, left_value: &'a str, right: Field, right_value: &'a str) -> Row<'a, Message> {
    row![
        full(left, left_value).width(Length::Fill),
        full(right, right_value).width(Length::Fill),
    ]
    .spacing(12)
}
