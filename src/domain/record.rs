//! The persisted note record.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::{PathHash, TagSet};

/// Everything the registry knows about one note.
///
/// The note file name is derived from the hash and the extension configured
/// when the record was created. It is stored alongside the record so that a
/// later change of extension does not orphan existing notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteRecord {
    hash: PathHash,
    path: PathBuf,
    org_file: String,
    #[serde(default, skip_serializing_if = "TagSet::is_empty")]
    tags: TagSet,
}

impl NoteRecord {
    /// Creates a record for `path` with the note file named `{hash}.{ext}`.
    pub fn new(hash: PathHash, path: impl Into<PathBuf>, ext: &str) -> Self {
        let org_file = hash.file_name(ext);
        Self {
            hash,
            path: path.into(),
            org_file,
            tags: TagSet::new(),
        }
    }

    pub fn hash(&self) -> &PathHash {
        &self.hash
    }

    /// The directory this record was first created for.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name of the note inside the note directory.
    pub fn org_file(&self) -> &str {
        &self.org_file
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    pub fn tags_mut(&mut self) -> &mut TagSet {
        &mut self.tags
    }

    /// Returns a copy of this record with the given tags.
    pub fn with_tags(mut self, tags: TagSet) -> Self {
        self.tags = tags;
        self
    }

    /// Full path of the note file inside `org_dir`.
    pub fn note_path(&self, org_dir: &Path) -> PathBuf {
        org_dir.join(&self.org_file)
    }
}
