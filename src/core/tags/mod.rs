//! core/tags/mod.rs
//!
//! Tag container read/write.
//! Public API:
//! - [`read_tag_record`] parses a file's tag container into a [`TagRecord`](super::types::TagRecord).
//! - [`write_tag_record`] writes every field of a record back to disk.

mod art;
mod read;
pub(crate) mod util;
mod write;

pub use read::read_tag_record;
pub use write::write_tag_record;
