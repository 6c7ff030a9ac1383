//! Whole-file JSON implementation of the note registry.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use super::{MemoryRegistry, NoteRegistry, RegistryError, RegistryResult};
use crate::domain::{NoteRecord, PathHash, Tag};

/// Name of the registry file inside the note directory.
pub const REGISTRY_FILE_NAME: &str = "org_lookup_db.json";

#[derive(Debug, Default, Serialize, Deserialize)]
struct RegistryFile {
    #[serde(default)]
    records: Vec<NoteRecord>,
}

/// Note registry backed by a single JSON file.
///
/// The file is read completely on open and rewritten through a temp file and
/// rename on every mutation. There is no locking: concurrent writers race and
/// the last one wins.
#[derive(Debug)]
pub struct JsonRegistry {
    path: PathBuf,
    inner: MemoryRegistry,
}

impl JsonRegistry {
    // ===========================================
    // Construction
    // ===========================================

    /// Opens the registry stored in `org_dir`.
    pub fn open_in_dir(org_dir: &Path) -> RegistryResult<Self> {
        Self::open(&org_dir.join(REGISTRY_FILE_NAME))
    }

    /// Opens or creates a registry at the given path.
    ///
    /// A missing or empty file yields an empty registry. The file itself is
    /// only created on the first mutation.
    pub fn open(path: &Path) -> RegistryResult<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
            Err(e) => {
                return Err(RegistryError::Io {
                    path: path.to_path_buf(),
                    source: e,
                });
            }
        };

        let file: RegistryFile = if contents.trim().is_empty() {
            RegistryFile::default()
        } else {
            serde_json::from_str(&contents).map_err(|e| RegistryError::Parse {
                path: path.to_path_buf(),
                source: e,
            })?
        };

        tracing::debug!(path = %path.display(), records = file.records.len(), "opened registry");

        Ok(Self {
            path: path.to_path_buf(),
            inner: MemoryRegistry::from(file.records),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    // ===========================================
    // Persistence
    // ===========================================

    fn persist(&self) -> RegistryResult<()> {
        let path = &self.path;
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        if !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| RegistryError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let file = RegistryFile {
            records: self.inner.records().to_vec(),
        };
        let content = serde_json::to_string_pretty(&file)?;

        let mut temp = NamedTempFile::new_in(parent).map_err(|e| RegistryError::Io {
            path: path.clone(),
            source: e,
        })?;
        temp.write_all(content.as_bytes())
            .map_err(|e| RegistryError::Io {
                path: path.clone(),
                source: e,
            })?;
        temp.persist(path).map_err(|e| RegistryError::AtomicWrite {
            path: path.clone(),
            source: e.error,
        })?;

        tracing::trace!(path = %path.display(), records = file.records.len(), "persisted registry");
        Ok(())
    }
}

impl NoteRegistry for JsonRegistry {
    fn get(&self, hash: &PathHash) -> Option<NoteRecord> {
        self.inner.get(hash)
    }

    fn contains(&self, hash: &PathHash) -> bool {
        self.inner.contains(hash)
    }

    fn insert(&mut self, record: NoteRecord) -> RegistryResult<()> {
        self.inner.insert(record)?;
        self.persist()
    }

    fn update(&mut self, hash: &PathHash, record: NoteRecord) -> RegistryResult<()> {
        self.inner.update(hash, record)?;
        self.persist()
    }

    fn remove(&mut self, hash: &PathHash) -> RegistryResult<bool> {
        if !self.inner.remove(hash)? {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    fn find_by_any_tag(&self, tags: &[Tag]) -> Vec<NoteRecord> {
        self.inner.find_by_any_tag(tags)
    }

    fn all(&self) -> Vec<NoteRecord> {
        self.inner.all()
    }

    fn len(&self) -> usize {
        self.inner.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TagSet;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn record(path: &str) -> NoteRecord {
        NoteRecord::new(PathHash::of_path(Path::new(path)), path, "org")
    }

    fn tagged(path: &str, tags: &[&str]) -> NoteRecord {
        let set = TagSet::from(
            tags.iter()
                .map(|t| Tag::new(t).unwrap())
                .collect::<Vec<_>>(),
        );
        record(path).with_tags(set)
    }

    fn tags(names: &[&str]) -> Vec<Tag> {
        names.iter().map(|t| Tag::new(t).unwrap()).collect()
    }

    // ===========================================
    // Open
    // ===========================================

    #[test]
    fn open_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let registry = JsonRegistry::open_in_dir(dir.path()).unwrap();
        assert!(registry.is_empty());
        assert!(!dir.path().join(REGISTRY_FILE_NAME).exists());
    }

    #[test]
    fn open_empty_file_is_empty() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(REGISTRY_FILE_NAME), "").unwrap();
        let registry = JsonRegistry::open_in_dir(dir.path()).unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn open_malformed_file_fails() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(REGISTRY_FILE_NAME), "{not json").unwrap();
        let err = JsonRegistry::open_in_dir(dir.path()).unwrap_err();
        assert!(matches!(err, RegistryError::Parse { .. }));
    }

    // ===========================================
    // Mutations
    // ===========================================

    #[test]
    fn failed_insert_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let mut registry = JsonRegistry::open_in_dir(dir.path()).unwrap();
        registry.insert(record("/a")).unwrap();
        std::fs::remove_file(registry.path()).unwrap();

        let err = registry.insert(record("/a")).unwrap_err();
        assert!(matches!(err, RegistryError::Duplicate { .. }));
        assert!(!registry.path().exists());
    }

    #[test]
    fn removing_absent_record_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let mut registry = JsonRegistry::open_in_dir(dir.path()).unwrap();
        assert!(!registry.remove(record("/a").hash()).unwrap());
        assert!(!registry.path().exists());
    }

    // ===========================================
    // Persistence
    // ===========================================

    #[test]
    fn mutations_persist_across_reopen() {
        let dir = TempDir::new().unwrap();
        {
            let mut registry = JsonRegistry::open_in_dir(dir.path()).unwrap();
            registry.insert(tagged("/a", &["x"])).unwrap();
            registry.insert(record("/b")).unwrap();
            registry.remove(record("/b").hash()).unwrap();
        }

        let registry = JsonRegistry::open_in_dir(dir.path()).unwrap();
        assert_eq!(registry.all(), vec![tagged("/a", &["x"])]);
    }

    #[test]
    fn file_uses_record_field_names() {
        let dir = TempDir::new().unwrap();
        let mut registry = JsonRegistry::open_in_dir(dir.path()).unwrap();
        registry.insert(tagged("/a", &["x"])).unwrap();

        let raw = std::fs::read_to_string(dir.path().join(REGISTRY_FILE_NAME)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let entry = &value["records"][0];
        assert_eq!(entry["path"], "/a");
        assert_eq!(entry["tags"][0], "x");
        assert!(entry["hash"].is_string());
        assert!(entry["org_file"].as_str().unwrap().ends_with(".org"));
    }

    #[test]
    fn stored_tags_load_verbatim() {
        let dir = TempDir::new().unwrap();
        let hash = PathHash::of_path(Path::new("/a"));
        let raw = format!(
            r#"{{"records": [{{"hash": "{hash}", "path": "/a", "org_file": "{hash}.org", "tags": ["needs review", "ok"]}}]}}"#
        );
        std::fs::write(dir.path().join(REGISTRY_FILE_NAME), raw).unwrap();

        let registry = JsonRegistry::open_in_dir(dir.path()).unwrap();
        let rec = registry.get(&hash).unwrap();
        let names: Vec<_> = rec.tags().iter().map(|t| t.as_str().to_string()).collect();
        assert_eq!(names, vec!["needs review", "ok"]);
        assert_eq!(registry.find_by_any_tag(&tags(&["ok"])).len(), 1);
    }
}
