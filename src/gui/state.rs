//! GUI state + messages.
//! Pure data definitions used by update.rs + view.rs.

use std::path::PathBuf;

use iced::widget::image;

use super::debug_log::DebugLog;
use crate::config::Config;
use crate::core::types::CoverArt;

/// Draft form values (strings, so the user can type anything).
/// Parsed into a `TagRecord` only when saving.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct FormDraft {
    pub title: String,
    pub artists: String,
    pub album: String,
    pub composers: String,
    pub genres: String,

    pub year: String,
    pub bpm: String,
    pub track_no: String,
    pub disc_no: String,

    pub comment: String,
}

/// Identifies a single text field in the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    Title,
    Artists,
    Album,
    Composers,
    Genres,
    Year,
    Bpm,
    TrackNo,
    DiscNo,
    Comment,
}

impl Field {
    pub(crate) fn label(self) -> &'static str {
        match self {
            Field::Title => "Title",
            Field::Artists => "Artist",
            Field::Album => "Album",
            Field::Composers => "Composer",
            Field::Genres => "Genre",
            Field::Year => "Year",
            Field::Bpm => "BPM",
            Field::TrackNo => "Track #",
            Field::DiscNo => "Disc #",
            Field::Comment => "Note",
        }
    }
}

/// App state
pub(crate) struct TagEditor {
    pub config: Config,
    pub status: String,

    /// File the form was loaded from. Save-as copies this file.
    pub source: Option<PathBuf>,

    pub draft: FormDraft,

    /// Cover that will be written on save. Loaded from the file or picked by the user.
    pub cover: Option<CoverArt>,
    pub cover_handle: Option<image::Handle>,

    /// Drag-and-drop hover highlight.
    pub drop_hovered: bool,
    /// A drop of several files arrives one message per file; only the first is loaded.
    pub drop_consumed: bool,

    pub show_debug: bool,
    pub debug_log: DebugLog,
}

impl TagEditor {
    pub(crate) fn new(config: Config) -> Self {
        let mut debug_log = DebugLog::default();
        debug_log.push("Application Initialized.");

        Self {
            show_debug: config.show_debug_on_start,
            config,
            status: "Ready".to_string(),

            source: None,
            draft: FormDraft::default(),

            cover: None,
            cover_handle: None,

            drop_hovered: false,
            drop_consumed: false,
            debug_log,
        }
    }

    pub(crate) fn can_save(&self) -> bool {
        self.source.is_some()
    }

    pub(crate) fn set_cover(&mut self, cover: Option<CoverArt>) {
        self.cover_handle = cover
            .as_ref()
            .map(|c| image::Handle::from_bytes(c.data.clone()));
        self.cover = cover;
    }
}

impl Default for TagEditor {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

/// Message = “something happened”.
#[derive(Debug, Clone)]
pub(crate) enum Message {
    // Loading
    PickAudio,
    FileHovered,
    FilesHoveredLeft,
    FileDropped(PathBuf),

    // Form
    FieldChanged(Field, String),
    ClearAll,

    // Cover
    PickCover,
    ExtractCover,

    // Save
    SaveAs,

    ToggleDebug,
}
