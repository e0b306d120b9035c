//! gui/mod.rs
//!
//! This folder contains ONLY frontend concerns:
//! - app state ('TagEditor')
//! - messages ('Message')
//! - update logic ('update()')
//! - view layout ('view()')
//! - subscriptions (drag-and-drop events)
//! - the in-memory debug log
//! - small UI helpers ('util')

pub(crate) mod debug_log;
pub(crate) mod state;
pub(crate) mod subscription;
pub(crate) mod update;
pub(crate) mod util;
pub(crate) mod view;

// Re-export the entry points main.rs needs.
pub(crate) use state::TagEditor;
pub(crate) use subscription::subscription;
pub(crate) use update::update;
pub(crate) use view::view;
