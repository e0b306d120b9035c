//! Process logger.
//!
//! Everything goes through the `log` facade. `simplelog` prints it to stderr;
//! the GUI's debug panel keeps its own copy of user-facing lines.

use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

pub fn init(level: LevelFilter) {
    // A second init (tests, or a logger already installed) is harmless.
    let _ = TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto);
}
