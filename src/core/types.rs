//! Core data types shared between core logic and the UI.
//!
//! Rule of thumb:
//! - These structs are plain bags of data
//! - No GUI code
//! - No filesystem code
//! - No tag parsing code
//!
//! `TagRecord` is the flat field set for ONE audio file's tag container.

use std::path::Path;

/// Flat, format-independent view of a tag container.
///
/// - `Option<String>` scalars are `None` when empty.
/// - List fields are empty when the file (or the form) has nothing.
/// - Numbers are `None` when missing, unparsable, or zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagRecord {
    pub title: Option<String>,
    pub album: Option<String>,
    pub comment: Option<String>,

    /// Performers (ID3 TPE1, Vorbis ARTIST, MP4 ©ART)
    pub artists: Vec<String>,
    pub genres: Vec<String>,
    pub composers: Vec<String>,

    pub year: Option<u32>,
    pub track_no: Option<u32>,
    pub disc_no: Option<u32>,
    pub bpm: Option<u32>,

    /// Front cover. On write, `Some` replaces every embedded picture;
    /// `None` leaves the file's pictures alone.
    pub cover: Option<CoverArt>,
}

/// Embedded picture bytes, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverArt {
    pub data: Vec<u8>,
    pub format: ImageFormat,
}

impl CoverArt {
    /// Wrap raw bytes, sniffing the image format from the magic number.
    pub fn from_bytes(data: Vec<u8>) -> Self {
        let format = ImageFormat::sniff(&data);
        Self { data, format }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
    Unknown,
}

impl ImageFormat {
    pub fn sniff(bytes: &[u8]) -> Self {
        const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

        if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
            ImageFormat::Jpeg
        } else if bytes.starts_with(PNG_MAGIC) {
            ImageFormat::Png
        } else {
            ImageFormat::Unknown
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            // Unknown bytes are labelled JPEG, which is what most players assume anyway.
            ImageFormat::Jpeg | ImageFormat::Unknown => "image/jpeg",
            ImageFormat::Png => "image/png",
        }
    }

    /// Suggested file extension when extracting.
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Jpeg | ImageFormat::Unknown => "jpg",
            ImageFormat::Png => "png",
        }
    }
}

/// Audio formats the editor accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    Mp3,
    Flac,
    Wav,
    M4a,
    Ogg,
}

impl AudioFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "mp3" => Some(AudioFormat::Mp3),
            "flac" => Some(AudioFormat::Flac),
            "wav" => Some(AudioFormat::Wav),
            "m4a" => Some(AudioFormat::M4a),
            "ogg" => Some(AudioFormat::Ogg),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|s| s.to_str())
            .and_then(Self::from_extension)
    }

    /// MP3 and WAV carry ID3v2 and go through the `id3` crate.
    /// Everything else goes through `lofty`.
    pub fn uses_id3(self) -> bool {
        matches!(self, AudioFormat::Mp3 | AudioFormat::Wav)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sniffs_jpeg_and_png() {
        assert_eq!(ImageFormat::sniff(&[0xFF, 0xD8, 0xFF, 0xE0, 0x00]), ImageFormat::Jpeg);
        assert_eq!(
            ImageFormat::sniff(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0x00]),
            ImageFormat::Png
        );
        assert_eq!(ImageFormat::sniff(b"GIF89a"), ImageFormat::Unknown);
        assert_eq!(ImageFormat::sniff(&[]), ImageFormat::Unknown);
    }

    #[test]
    fn audio_format_from_path_is_case_insensitive() {
        assert_eq!(
            AudioFormat::from_path(Path::new("/music/Song.MP3")),
            Some(AudioFormat::Mp3)
        );
        assert_eq!(
            AudioFormat::from_path(Path::new("a.flac")),
            Some(AudioFormat::Flac)
        );
        assert_eq!(AudioFormat::from_path(Path::new("a.aiff")), None);
        assert_eq!(AudioFormat::from_path(Path::new("noext")), None);
    }

    #[test]
    fn backend_split() {
        assert!(AudioFormat::Mp3.uses_id3());
        assert!(AudioFormat::Wav.uses_id3());
        assert!(!AudioFormat::Flac.uses_id3());
        assert!(!AudioFormat::M4a.uses_id3());
        assert!(!AudioFormat::Ogg.uses_id3());
    }
}
