//! core/tags/read.rs
//! Read a file's tag container and convert it into a `TagRecord`.
//!
//! - MP3/WAV: ID3v2 via the `id3` crate.
//! - FLAC/OGG/M4A: Vorbis comments / MP4 atoms via `lofty`.
//! - A file with no tag at all is not an error; it reads as an empty record.

use std::path::Path;

use id3::frame::Content;
use id3::{Tag, TagLike};
use lofty::file::TaggedFileExt;
use lofty::prelude::Accessor;
use lofty::tag::ItemKey;

use super::super::error::TagError;
use super::super::types::{AudioFormat, TagRecord};
use super::art::{first_id3_picture, first_lofty_picture};
use super::util::{
    clean_optional_string, leading_year, parse_bpm, parse_slash_pair_u32,
};

pub fn read_tag_record(path: &Path) -> Result<TagRecord, TagError> {
    let format = AudioFormat::from_path(path)
        .ok_or_else(|| TagError::UnsupportedFormat(path.to_path_buf()))?;

    if format.uses_id3() {
        read_id3(path)
    } else {
        read_lofty(path)
    }
}

// -------------------------
// ID3v2
// -------------------------

/// `read_from_path` detects the container, so WAV's RIFF `id3 ` chunk is found too.
fn read_id3(path: &Path) -> Result<TagRecord, TagError> {
    match Tag::read_from_path(path) {
        Ok(tag) => Ok(record_from_id3(&tag)),
        Err(e) if matches!(e.kind, id3::ErrorKind::NoTag) => {
            log::debug!("no ID3 tag in {}", path.display());
            Ok(TagRecord::default())
        }
        Err(e) => Err(e.into()),
    }
}

pub(super) fn record_from_id3(tag: &Tag) -> TagRecord {
    let (track_from_text, _) = parse_slash_pair_u32(text_frame(tag, "TRCK").as_deref());
    let (disc_from_text, _) = parse_slash_pair_u32(text_frame(tag, "TPOS").as_deref());

    let year = tag
        .year()
        .and_then(|y| u32::try_from(y).ok())
        .filter(|y| *y != 0)
        .or_else(|| {
            text_frame(tag, "TDRC")
                .or_else(|| text_frame(tag, "TYER"))
                .and_then(|d| leading_year(&d))
        });

    TagRecord {
        title: text_frame(tag, "TIT2").and_then(|s| clean_optional_string(&s)),
        album: text_frame(tag, "TALB").and_then(|s| clean_optional_string(&s)),
        comment: first_comment(tag).and_then(|s| clean_optional_string(&s)),

        artists: text_values(tag, "TPE1"),
        genres: text_values(tag, "TCON"),
        composers: text_values(tag, "TCOM"),

        year,
        track_no: tag.track().or(track_from_text).filter(|n| *n != 0),
        disc_no: tag.disc().or(disc_from_text).filter(|n| *n != 0),
        bpm: text_frame(tag, "TBPM").and_then(|s| parse_bpm(&s)),

        cover: first_id3_picture(tag),
    }
}

/// Get a best-effort string value from a frame id.
fn text_frame(tag: &Tag, id: &str) -> Option<String> {
    let frame = tag.get(id)?;
    match frame.content() {
        Content::Text(s) => Some(s.clone()),
        Content::Link(s) => Some(s.clone()),
        _ => None,
    }
}

/// ID3v2.4 stores multiple values in one frame, separated by NUL.
fn text_values(tag: &Tag, id: &str) -> Vec<String> {
    text_frame(tag, id)
        .map(|s| {
            s.split('\0')
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default()
}

fn first_comment(tag: &Tag) -> Option<String> {
    for frame in tag.frames() {
        if frame.id() == "COMM" {
            if let Content::Comment(c) = frame.content() {
                return Some(c.text.clone());
            }
        }
    }
    None
}

// -------------------------
// lofty (FLAC / OGG / M4A)
// -------------------------

fn read_lofty(path: &Path) -> Result<TagRecord, TagError> {
    let tagged = lofty::read_from_path(path)?;

    match tagged.primary_tag().or_else(|| tagged.first_tag()) {
        Some(tag) => Ok(record_from_lofty(tag)),
        None => {
            log::debug!("no tag container in {}", path.display());
            Ok(TagRecord::default())
        }
    }
}

pub(super) fn record_from_lofty(tag: &lofty::tag::Tag) -> TagRecord {
    let year = tag
        .get_string(&ItemKey::Year)
        .and_then(leading_year)
        .or_else(|| tag.get_string(&ItemKey::RecordingDate).and_then(leading_year));

    let bpm = tag
        .get_string(&ItemKey::IntegerBpm)
        .or_else(|| tag.get_string(&ItemKey::Bpm))
        .and_then(parse_bpm);

    TagRecord {
        title: tag.title().and_then(|s| clean_optional_string(&s)),
        album: tag.album().and_then(|s| clean_optional_string(&s)),
        comment: tag.comment().and_then(|s| clean_optional_string(&s)),

        artists: item_values(tag, &ItemKey::TrackArtist),
        genres: item_values(tag, &ItemKey::Genre),
        composers: item_values(tag, &ItemKey::Composer),

        year,
        track_no: tag.track().filter(|n| *n != 0),
        disc_no: tag.disk().filter(|n| *n != 0),
        bpm,

        cover: first_lofty_picture(tag),
    }
}

fn item_values(tag: &lofty::tag::Tag, key: &ItemKey) -> Vec<String> {
    tag.get_strings(key)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use id3::frame::Comment;

    #[test]
    fn id3_frames_map_onto_record() {
        let mut tag = Tag::new();
        tag.set_text("TIT2", "Song");
        tag.set_text("TPE1", "First\0Second");
        tag.set_text("TALB", "Record");
        tag.set_text("TCOM", "Writer");
        tag.set_text("TRCK", "4/10");
        tag.set_text("TPOS", "2/2");
        tag.set_text("TBPM", "120.4");
        tag.set_text("TDRC", "2001-09-11");
        let _ = tag.add_frame(Comment {
            lang: "eng".to_string(),
            description: String::new(),
            text: "note".to_string(),
        });

        let r = record_from_id3(&tag);
        assert_eq!(r.title.as_deref(), Some("Song"));
        assert_eq!(r.artists, vec!["First".to_string(), "Second".to_string()]);
        assert_eq!(r.album.as_deref(), Some("Record"));
        assert_eq!(r.composers, vec!["Writer".to_string()]);
        assert_eq!(r.track_no, Some(4));
        assert_eq!(r.disc_no, Some(2));
        assert_eq!(r.bpm, Some(120));
        assert_eq!(r.year, Some(2001));
        assert_eq!(r.comment.as_deref(), Some("note"));
        assert!(r.genres.is_empty());
        assert!(r.cover.is_none());
    }

    #[test]
    fn empty_id3_tag_reads_as_default() {
        assert_eq!(record_from_id3(&Tag::new()), TagRecord::default());
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let err = read_tag_record(Path::new("/nowhere/file.aiff")).unwrap_err();
        assert!(matches!(err, TagError::UnsupportedFormat(_)));
    }
}
