//! In-memory note registry.

use super::{NoteRegistry, RegistryError, RegistryResult};
use crate::domain::{NoteRecord, PathHash, Tag};

/// Note registry held entirely in memory and never persisted.
///
/// `JsonRegistry` keeps its records in one of these and writes them out
/// after each mutation.
#[derive(Debug, Default, Clone)]
pub struct MemoryRegistry {
    records: Vec<NoteRecord>,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records in insertion order, without cloning.
    pub fn records(&self) -> &[NoteRecord] {
        &self.records
    }

    fn position(&self, hash: &PathHash) -> Option<usize> {
        self.records.iter().position(|r| r.hash() == hash)
    }
}

impl From<Vec<NoteRecord>> for MemoryRegistry {
    fn from(records: Vec<NoteRecord>) -> Self {
        Self { records }
    }
}

impl NoteRegistry for MemoryRegistry {
    fn get(&self, hash: &PathHash) -> Option<NoteRecord> {
        self.position(hash).map(|i| self.records[i].clone())
    }

    fn contains(&self, hash: &PathHash) -> bool {
        self.position(hash).is_some()
    }

    fn insert(&mut self, record: NoteRecord) -> RegistryResult<()> {
        if self.contains(record.hash()) {
            return Err(RegistryError::Duplicate {
                hash: record.hash().to_string(),
            });
        }
        tracing::debug!(hash = %record.hash(), path = %record.path().display(), "inserting record");
        self.records.push(record);
        Ok(())
    }

    fn update(&mut self, hash: &PathHash, record: NoteRecord) -> RegistryResult<()> {
        if record.hash() != hash {
            return Err(RegistryError::HashMismatch {
                expected: hash.to_string(),
                actual: record.hash().to_string(),
            });
        }
        let index = self.position(hash).ok_or_else(|| RegistryError::NotFound {
            hash: hash.to_string(),
        })?;
        tracing::debug!(hash = %hash, "updating record");
        self.records[index] = record;
        Ok(())
    }

    fn remove(&mut self, hash: &PathHash) -> RegistryResult<bool> {
        let Some(index) = self.position(hash) else {
            return Ok(false);
        };
        tracing::debug!(hash = %hash, "removing record");
        self.records.remove(index);
        Ok(true)
    }

    fn find_by_any_tag(&self, tags: &[Tag]) -> Vec<NoteRecord> {
        self.records
            .iter()
            .filter(|r| r.tags().intersects(tags))
            .cloned()
            .collect()
    }

    fn all(&self) -> Vec<NoteRecord> {
        self.records.clone()
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
