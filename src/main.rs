//! tagpress
//!
//! # What this program is
//! A small desktop app (built with the `iced` GUI library) for editing the tags of one
//! audio file at a time: title, artists, album, composers, genres, year, track #, disc #,
//! BPM, a note (comment) and the cover picture.
//!
//! # How it flows
//! - Open a file (click the top strip) or drop one on the window.
//! - The file's tag container is read into a `TagRecord`, which fills the form.
//! - Edit the form. Lists (artists, genres, composers) are `;`-separated.
//! - "Save As" copies the source file to a new path and rewrites the copy's tags.
//!   The source file is never modified.
//!
//! # Architecture constraints (on purpose)
//! - UI layer calls `core::*` for all tag and file IO.
//! - `core` never knows about widgets or messages.
//! - Single-threaded: every action runs inside `update()` on the UI thread.

mod config;
mod core;
mod gui;
mod logging;

use gui::view::constants::{WINDOW_H, WINDOW_W};

fn main() -> iced::Result {
    let (config, config_error) = match config::Config::load() {
        Ok(config) => (config, None),
        Err(e) => (config::Config::default(), Some(e.to_string())),
    };

    logging::init(config.level_filter());
    if let Some(e) = config_error {
        log::warn!("Ignoring unreadable config: {e}");
    }

    iced::application(move || gui::TagEditor::new(config.clone()), gui::update, gui::view)
        .title("Audio Tag Editor")
        .subscription(gui::subscription)
        .theme(|_: &gui::TagEditor| iced::Theme::Dark)
        .window_size(iced::Size::new(WINDOW_W, WINDOW_H))
        .run()
}
