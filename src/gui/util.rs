//! Small pure helper functions used by the GUI.
//! - no UI widgets or state mutation

use std::path::Path;

use super::state::FormDraft;
use crate::core::tags::util::{clean_optional_string, join_list, parse_number, split_list};
use crate::core::types::{CoverArt, TagRecord};

/// File name for status lines and dialogs.
/// Ex: '/music/song.mp3' -> 'song.mp3'
pub(crate) fn file_name(path: &Path) -> String {
    path.file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("unknown")
        .to_string()
}

fn opt_u32(v: Option<u32>) -> String {
    v.map(|n| n.to_string()).unwrap_or_default()
}

/// Fill the form from a loaded record. Lists are joined, absent numbers are blank.
pub(crate) fn draft_from_record(record: &TagRecord, joiner: &str) -> FormDraft {
    FormDraft {
        title: record.title.clone().unwrap_or_default(),
        artists: join_list(&record.artists, joiner),
        album: record.album.clone().unwrap_or_default(),
        composers: join_list(&record.composers, joiner),
        genres: join_list(&record.genres, joiner),

        year: opt_u32(record.year),
        bpm: opt_u32(record.bpm),
        track_no: opt_u32(record.track_no),
        disc_no: opt_u32(record.disc_no),

        comment: record.comment.clone().unwrap_or_default(),
    }
}

/// Build the record to save. Unparsable numbers become absent; nothing fails.
pub(crate) fn record_from_draft(
    draft: &FormDraft,
    cover: Option<CoverArt>,
    separator: char,
) -> TagRecord {
    TagRecord {
        title: clean_optional_string(&draft.title),
        album: clean_optional_string(&draft.album),
        comment: clean_optional_string(&draft.comment),

        artists: split_list(&draft.artists, separator),
        genres: split_list(&draft.genres, separator),
        composers: split_list(&draft.composers, separator),

        year: parse_number(&draft.year),
        track_no: parse_number(&draft.track_no),
        disc_no: parse_number(&draft.disc_no),
        bpm: parse_number(&draft.bpm),

        cover,
    }
}
