//! NoteRegistry trait and error types.

use crate::domain::{NoteRecord, PathHash, Tag};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during registry operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A record with this hash already exists.
    #[error("a note record already exists for hash {hash}")]
    Duplicate { hash: String },

    /// No record exists for this hash.
    #[error("no note record for hash {hash}")]
    NotFound { hash: String },

    /// An update tried to change a record's hash.
    #[error("cannot replace record {expected} with a record for {actual}")]
    HashMismatch { expected: String, actual: String },

    /// The registry file could not be parsed.
    #[error("invalid registry file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The registry could not be serialized.
    #[error("failed to serialize registry: {0}")]
    Serialize(#[from] serde_json::Error),

    /// An I/O error occurred.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Atomic replacement of the registry file failed.
    #[error("failed to replace {path}: {source}")]
    AtomicWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Storage for note records keyed by path hash.
///
/// Every mutating call is persisted before it returns.
pub trait NoteRegistry {
    /// Retrieves a record by hash.
    fn get(&self, hash: &PathHash) -> Option<NoteRecord>;

    /// Returns true if a record exists for `hash`.
    fn contains(&self, hash: &PathHash) -> bool {
        self.get(hash).is_some()
    }

    /// Inserts a new record. Fails if the hash is already present.
    fn insert(&mut self, record: NoteRecord) -> RegistryResult<()>;

    /// Replaces the record stored under `hash`.
    fn update(&mut self, hash: &PathHash, record: NoteRecord) -> RegistryResult<()>;

    /// Removes a record by hash (idempotent). Returns whether one was removed.
    fn remove(&mut self, hash: &PathHash) -> RegistryResult<bool>;

    /// Records whose tag set contains at least one of `tags`.
    fn find_by_any_tag(&self, tags: &[Tag]) -> Vec<NoteRecord>;

    /// All records, in insertion order.
    fn all(&self) -> Vec<NoteRecord>;

    /// Number of records.
    fn len(&self) -> usize {
        self.all().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
