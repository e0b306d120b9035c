//! In-memory debug log shown in the debug panel.
//!
//! Each line is also forwarded to the `log` facade so it reaches stderr.

use std::collections::VecDeque;

use chrono::Local;

/// Oldest lines are dropped past this point.
const MAX_LINES: usize = 1000;

#[derive(Debug, Default)]
pub(crate) struct DebugLog {
    lines: VecDeque<String>,
}

impl DebugLog {
    pub(crate) fn push(&mut self, msg: impl Into<String>) {
        let msg = msg.into();
        log::info!("{msg}");
        self.append(msg);
    }

    pub(crate) fn error(&mut self, msg: impl Into<String>) {
        let msg = msg.into();
        log::error!("{msg}");
        self.append(msg);
    }

    pub(crate) fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    #[cfg(test)]
    pub(crate) fn last(&self) -> Option<&str> {
        self.lines.back().map(String::as_str)
    }

    fn append(&mut self, msg: String) {
        if self.lines.len() == MAX_LINES {
            self.lines.pop_front();
        }
        self.lines
            .push_back(format!("[{}] {msg}", Local::now().format("%H:%M:%S")));
    }
}
