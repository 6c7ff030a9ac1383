//! Core types: NoteRecord, PathHash, Tag, TagSet

mod path_hash;
mod record;
mod tag;

pub use path_hash::{PathHash, PathHashError};
pub use record::NoteRecord;
pub use tag::{ParseTagError, REMOVE_MARKER, Tag, TagEdit, TagSet, parse_tag_edits, parse_tag_list};
