//! Reusable small widgets/helpers used across view modules.

use iced::widget::{column, container, image, row, text, text_input};
use iced::{Alignment, Background, Border, Color, Element, Length};

use super::super::state::Message;
use super::constants::{BORDER, DIM, LABEL, LABEL_W, PANEL};

pub(crate) fn cover_placeholder(size: f32) -> iced::widget::Container<'static, Message> {
    container(
        column![
            text("♪").size(28).color(DIM),
            text("click to choose a cover").size(12).color(DIM),
        ]
        .spacing(4)
        .align_x(Alignment::Center),
    )
    .width(Length::Fixed(size))
    .height(Length::Fixed(size))
    .center_x(Length::Fixed(size))
    .center_y(Length::Fixed(size))
    .style(|_theme| panel_style(PANEL))
}

/// If `handle` exists, show it; otherwise show the placeholder.
pub(crate) fn cover_thumb(handle: Option<&image::Handle>, size: f32) -> Element<'static, Message> {
    match handle {
        Some(h) => container(
            image(h.clone())
                .width(Length::Fixed(size))
                .height(Length::Fixed(size)),
        )
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .style(|_theme| panel_style(PANEL))
        .into(),
        None => cover_placeholder(size).into(),
    }
}

pub(crate) fn field_row<'a>(
    label: &'a str,
    value: &'a str,
    on_input: impl Fn(String) -> Message + 'a,
) -> iced::widget::Row<'a, Message> {
    row![
        text(label).color(LABEL).width(Length::Fixed(LABEL_W)),
        text_input("", value).on_input(on_input).width(Length::Fill),
    ]
    .spacing(8)
    .align_y(Alignment::Center)
}

/// Flat panel with a thin border.
pub(crate) fn panel_style(background: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            color: BORDER,
            width: 1.0,
            radius: 0.0.into(),
        },
        ..container::Style::default()
    }
}
