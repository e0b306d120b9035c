//! core/tags/art.rs
//! Embedded picture helpers for both tag backends.

use id3::frame::{Content, Picture as Id3Picture, PictureType as Id3PictureType};
use lofty::picture::{MimeType, Picture as LoftyPicture, PictureType as LoftyPictureType};

use super::super::types::{CoverArt, ImageFormat};

/// First APIC (v2.3/2.4) or PIC (v2.2) frame.
pub(super) fn first_id3_picture(tag: &id3::Tag) -> Option<CoverArt> {
    for f in tag.frames() {
        if f.id() != "APIC" && f.id() != "PIC" {
            continue;
        }
        if let Content::Picture(p) = f.content() {
            return Some(CoverArt::from_bytes(p.data.clone()));
        }
    }
    None
}

pub(super) fn id3_front_cover(cover: &CoverArt) -> Id3Picture {
    Id3Picture {
        mime_type: cover.format.mime_type().to_string(),
        picture_type: Id3PictureType::CoverFront,
        description: String::new(),
        data: cover.data.clone(),
    }
}

pub(super) fn first_lofty_picture(tag: &lofty::tag::Tag) -> Option<CoverArt> {
    tag.pictures()
        .first()
        .map(|p| CoverArt::from_bytes(p.data().to_vec()))
}

pub(super) fn lofty_front_cover(cover: &CoverArt) -> LoftyPicture {
    let mime = match cover.format {
        ImageFormat::Png => MimeType::Png,
        ImageFormat::Jpeg | ImageFormat::Unknown => MimeType::Jpeg,
    };

    LoftyPicture::new_unchecked(
        LoftyPictureType::CoverFront,
        Some(mime),
        None,
        cover.data.clone(),
    )
}
