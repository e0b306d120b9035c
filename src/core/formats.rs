//! Extension rules for the files the editor accepts.

use std::path::Path;

use super::types::AudioFormat;

/// Audio extensions accepted by the open dialog and drag-drop.
pub const AUDIO_EXTENSIONS: &[&str] = &["mp3", "flac", "wav", "m4a", "ogg"];

/// Image extensions accepted for cover import.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "png", "jpeg"];

pub fn audio_format(path: &Path) -> Option<AudioFormat> {
    AudioFormat::from_path(path)
}

pub fn is_image_path(path: &Path) -> bool {
    has_extension(path, IMAGE_EXTENSIONS)
}

fn has_extension(path: &Path, allowed: &[&str]) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| allowed.iter().any(|a| ext.eq_ignore_ascii_case(a)))
        .unwrap_or(false)
}
