//! Bottom bar: status line + actions.

use iced::widget::{button, container, row, text};
use iced::{Alignment, Length};

use super::super::state::{Message, TagEditor};
use super::constants::{BUTTON_W, DIM};

pub(crate) fn build_footer(state: &TagEditor) -> iced::widget::Row<'_, Message> {
    let status = container(text(&state.status).color(DIM)).width(Length::Fill);

    let debug_label = if state.show_debug { "HIDE DEBUG" } else { "DEBUG" };

    row![
        status,
        button(debug_label).on_press(Message::ToggleDebug),
        button(container("CLEAR ALL").center_x(Length::Fill))
            .width(Length::Fixed(BUTTON_W))
            .on_press(Message::ClearAll),
        button(container("SAVE AS").center_x(Length::Fill))
            .width(Length::Fixed(BUTTON_W))
            .on_press_maybe(state.can_save().then_some(Message::SaveAs)),
    ]
    .spacing(16)
    .align_y(Alignment::Center)
}
