//! gui/subscription.rs
//! Turn window drag-and-drop events into messages.

use iced::event::{self, Event};
use iced::{Subscription, window};

use super::state::{Message, TagEditor};

pub(crate) fn subscription(_state: &TagEditor) -> Subscription<Message> {
    event::listen_with(|event, _status, _window| match event {
        Event::Window(window::Event::FileHovered(_)) => Some(Message::FileHovered),
        Event::Window(window::Event::FilesHoveredLeft) => Some(Message::FilesHoveredLeft),
        Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
        _ => None,
    })
}
