//! Persistent note registry: the hash → record store

mod json;
mod memory;
mod repository;

pub use json::{JsonRegistry, REGISTRY_FILE_NAME};
pub use memory::MemoryRegistry;
pub use repository::{NoteRegistry, RegistryError, RegistryResult};
