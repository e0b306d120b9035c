//! GUI renderer (reads state, produces widgets; no mutation).

pub(crate) mod constants;
mod debug;
mod drop_zone;
mod editor;
mod footer;
mod widgets;

use iced::widget::{Column, column};

use super::state::{Message, TagEditor};

pub(crate) fn view(state: &TagEditor) -> Column<'_, Message> {
    let mut layout = column![
        drop_zone::build_drop_zone(state),
        editor::build_editor(state),
        footer::build_footer(state),
    ]
    .spacing(20)
    .padding(20);

    if state.show_debug {
        layout = layout.push(debug::build_debug_panel(state));
    }

    layout
}
