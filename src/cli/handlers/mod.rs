//! Command handlers for the CLI.

mod info;
mod open;
mod search;
mod tag;


use std::path::PathBuf;

use crate::domain::NoteRecord;
use crate::registry::{JsonRegistry, NoteRegistry};
use crate::resolver::Resolution;

// Re-export public items
pub use info::handle_info;
pub use open::{CommandEditor, EditorLauncher, handle_open};
pub use search::{SearchQuery, handle_search};
pub use tag::handle_tag;

/// Exit code for a successful command.
pub const EXIT_SUCCESS: u8 = 0;

/// Exit code for bad command-line usage.
pub const EXIT_USAGE: u8 = 1;

// ===========================================
// Shared State
// ===========================================

/// Everything a command needs, built once per invocation.
#[derive(Debug)]
pub struct Context {
    /// Directory holding note files and the registry
    pub org_dir: PathBuf,
    /// Extension for notes created in this invocation
    pub ext: String,
    pub registry: JsonRegistry,
    /// Directory (and hash) the command applies to
    pub resolution: Resolution,
}

impl Context {
    /// The record owned by the resolved directory, if any.
    pub fn current_record(&self) -> Option<NoteRecord> {
        self.registry.get(&self.resolution.hash)
    }
}
