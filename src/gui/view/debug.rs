//! Debug log panel ("System Debug Output").

use iced::widget::{Column, column, container, scrollable, text};
use iced::{Element, Font, Length};

use super::super::state::{Message, TagEditor};
use super::constants::{DEBUG_BG, DEBUG_H, DEBUG_TEXT, DIM};
use super::widgets::panel_style;

pub(crate) fn build_debug_panel(state: &TagEditor) -> iced::widget::Container<'_, Message> {
    let lines: Vec<Element<'_, Message>> = state
        .debug_log
        .lines()
        .map(|line| {
            text(line)
                .font(Font::MONOSPACE)
                .size(12)
                .color(DEBUG_TEXT)
                .into()
        })
        .collect();

    let body = column![
        text("System Debug Output").size(12).color(DIM),
        scrollable(Column::with_children(lines).spacing(2)).height(Length::Fill),
    ]
    .spacing(6);

    container(body)
        .width(Length::Fill)
        .height(Length::Fixed(DEBUG_H))
        .padding(10)
        .style(|_theme| panel_style(DEBUG_BG))
}
