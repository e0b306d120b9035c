//! core/tags/write.rs
//! Write a `TagRecord` into a file's tag container.
//!
//! Semantics:
//! - Every field is written. `None` / empty list => the frame or item is removed.
//! - `cover: Some(_)` replaces ALL embedded pictures with one front cover.
//! - `cover: None` leaves whatever pictures the file already has.

use std::path::Path;

use id3::frame::Comment;
use id3::{Tag, TagLike, Version};
use lofty::config::WriteOptions;
use lofty::file::TaggedFileExt;
use lofty::prelude::{Accessor, TagExt};
use lofty::tag::{ItemKey, ItemValue, TagItem};

use super::super::error::TagError;
use super::super::types::{AudioFormat, TagRecord};
use super::art::{id3_front_cover, lofty_front_cover};
use super::util::parse_slash_pair_u32;

pub fn write_tag_record(path: &Path, record: &TagRecord) -> Result<(), TagError> {
    let format = AudioFormat::from_path(path)
        .ok_or_else(|| TagError::UnsupportedFormat(path.to_path_buf()))?;

    if format.uses_id3() {
        write_id3(path, record)
    } else {
        write_lofty(path, record)
    }
}

// -------------------------
// ID3v2
// -------------------------

/// `read_from_path`/`write_to_path` detect the container, so this covers MP3 and WAV.
fn write_id3(path: &Path, record: &TagRecord) -> Result<(), TagError> {
    // Load existing tag if possible; otherwise start fresh.
    let mut tag = match Tag::read_from_path(path) {
        Ok(tag) => tag,
        Err(e) if matches!(e.kind, id3::ErrorKind::NoTag) => Tag::new(),
        Err(e) => return Err(e.into()),
    };

    apply_to_id3(&mut tag, record);

    // v2.4 consistently: it is the only version with native multi-value frames.
    tag.write_to_path(path, Version::Id3v24)?;

    Ok(())
}

pub(super) fn apply_to_id3(tag: &mut Tag, record: &TagRecord) {
    set_text_opt(tag, "TIT2", &record.title);
    set_text_opt(tag, "TALB", &record.album);

    set_text_list(tag, "TPE1", &record.artists);
    set_text_list(tag, "TCON", &record.genres);
    set_text_list(tag, "TCOM", &record.composers);

    // Year: drop both the v2.3 and v2.4 frames so a stale one can't shadow the new value.
    let _ = tag.remove("TDRC");
    let _ = tag.remove("TYER");
    if let Some(y) = record.year.and_then(|y| i32::try_from(y).ok()) {
        tag.set_text("TDRC", y.to_string());
    }

    // The form has no totals; keep whatever "n/total" the file already carried.
    set_slash_pair(tag, "TRCK", record.track_no);
    set_slash_pair(tag, "TPOS", record.disc_no);
    set_number(tag, "TBPM", record.bpm);

    // Comment (COMM): replace with a single "eng" comment
    let _ = tag.remove("COMM");
    if let Some(text) = record.comment.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        let _ = tag.add_frame(Comment {
            lang: "eng".to_string(),
            description: String::new(),
            text: text.to_string(),
        });
    }

    if let Some(cover) = &record.cover {
        tag.remove_all_pictures();
        let _ = tag.add_frame(id3_front_cover(cover));
    }
}

/// Set/remove a plain text frame (T***)
fn set_text_opt(tag: &mut Tag, id: &str, v: &Option<String>) {
    match v.as_deref().map(str::trim) {
        Some(s) if !s.is_empty() => tag.set_text(id, s.to_string()),
        _ => {
            let _ = tag.remove(id);
        }
    }
}

/// Multi-valued text frame, NUL-separated per ID3v2.4.
fn set_text_list(tag: &mut Tag, id: &str, values: &[String]) {
    let values: Vec<&str> = values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .collect();

    if values.is_empty() {
        let _ = tag.remove(id);
    } else {
        tag.set_text(id, values.join("\0"));
    }
}

/// Write TRCK/TPOS as "n" or "n/total" (or remove if None).
fn set_slash_pair(tag: &mut Tag, id: &str, n: Option<u32>) {
    let (_, total) = parse_slash_pair_u32(tag.get(id).and_then(|f| f.content().text()));
    match (n.filter(|n| *n != 0), total.filter(|t| *t != 0)) {
        (None, _) => {
            let _ = tag.remove(id);
        }
        (Some(n), Some(t)) => tag.set_text(id, format!("{n}/{t}")),
        (Some(n), None) => tag.set_text(id, n.to_string()),
    }
}

fn set_number(tag: &mut Tag, id: &str, n: Option<u32>) {
    match n.filter(|n| *n != 0) {
        Some(n) => tag.set_text(id, n.to_string()),
        None => {
            let _ = tag.remove(id);
        }
    }
}

// -------------------------
// lofty (FLAC / OGG / M4A)
// -------------------------

fn write_lofty(path: &Path, record: &TagRecord) -> Result<(), TagError> {
    let mut tagged = lofty::read_from_path(path)?;

    let tag_type = tagged.primary_tag_type();
    if tagged.tag(tag_type).is_none() {
        tagged.insert_tag(lofty::tag::Tag::new(tag_type));
    }

    let tag = tagged
        .tag_mut(tag_type)
        .ok_or_else(|| TagError::NoTagContainer(path.to_path_buf()))?;

    apply_to_lofty(tag, record);

    tag.save_to_path(path, WriteOptions::default())?;
    Ok(())
}

pub(super) fn apply_to_lofty(tag: &mut lofty::tag::Tag, record: &TagRecord) {
    match non_empty(&record.title) {
        Some(s) => tag.set_title(s),
        None => tag.remove_title(),
    }
    match non_empty(&record.album) {
        Some(s) => tag.set_album(s),
        None => tag.remove_album(),
    }
    match non_empty(&record.comment) {
        Some(s) => tag.set_comment(s),
        None => tag.remove_comment(),
    }

    set_item_list(tag, ItemKey::TrackArtist, &record.artists);
    set_item_list(tag, ItemKey::Genre, &record.genres);
    set_item_list(tag, ItemKey::Composer, &record.composers);

    tag.remove_key(&ItemKey::Year);
    tag.remove_key(&ItemKey::RecordingDate);
    if let Some(y) = record.year.filter(|y| *y != 0) {
        tag.insert_text(ItemKey::RecordingDate, y.to_string());
    }

    match record.track_no.filter(|n| *n != 0) {
        Some(n) => tag.set_track(n),
        None => tag.remove_track(),
    }
    match record.disc_no.filter(|n| *n != 0) {
        Some(n) => tag.set_disk(n),
        None => tag.remove_disk(),
    }

    tag.remove_key(&ItemKey::Bpm);
    tag.remove_key(&ItemKey::IntegerBpm);
    if let Some(bpm) = record.bpm.filter(|n| *n != 0) {
        // MP4 has an integer tempo atom; Vorbis comments only know "BPM".
        if !tag.insert_text(ItemKey::IntegerBpm, bpm.to_string()) {
            tag.insert_text(ItemKey::Bpm, bpm.to_string());
        }
    }

    if let Some(cover) = &record.cover {
        while !tag.pictures().is_empty() {
            tag.remove_picture(0);
        }
        tag.push_picture(lofty_front_cover(cover));
    }
}

fn non_empty(v: &Option<String>) -> Option<String> {
    v.as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

fn set_item_list(tag: &mut lofty::tag::Tag, key: ItemKey, values: &[String]) {
    tag.remove_key(&key);
    for v in values.iter().map(|v| v.trim()).filter(|v| !v.is_empty()) {
        tag.push(TagItem::new(key.clone(), ItemValue::Text(v.to_string())));
    }
}
