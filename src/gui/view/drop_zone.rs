//! Top strip: click to open a file, or drop one on the window.

use iced::widget::{container, mouse_area, text};
use iced::{Font, Length};

use super::super::state::{Message, TagEditor};
use super::constants::{DIM, DROP_ZONE_H, PANEL, PANEL_HOVER};
use super::widgets::panel_style;

pub(crate) fn build_drop_zone(state: &TagEditor) -> iced::widget::MouseArea<'_, Message> {
    let background = if state.drop_hovered { PANEL_HOVER } else { PANEL };

    let label = text("DRAG AUDIO FILE HERE")
        .size(16)
        .font(Font {
            weight: iced::font::Weight::Bold,
            ..Font::DEFAULT
        })
        .color(DIM);

    let zone = container(label)
        .width(Length::Fill)
        .height(Length::Fixed(DROP_ZONE_H))
        .center_x(Length::Fill)
        .center_y(Length::Fixed(DROP_ZONE_H))
        .style(move |_theme| panel_style(background));

    mouse_area(zone).on_press(Message::PickAudio)
}
