//! Directory → note resolution.
//!
//! A note belongs to a directory tree. Invoking the tool anywhere below a
//! directory that already owns a note lands in that note; otherwise the
//! invocation directory itself is used.

use std::io;
use std::path::{Path, PathBuf};

use crate::domain::PathHash;
use crate::registry::NoteRegistry;

/// The directory a command operates on and its identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub hash: PathHash,
    pub path: PathBuf,
}

/// Resolves `current_dir` to the nearest directory owning a note.
///
/// `current_dir` is canonicalized first. With `search_ancestors` false the
/// registry is never consulted. Otherwise the directory and each of its
/// ancestors are checked in order, nearest first; if none owns a note the
/// canonical `current_dir` is returned.
///
/// # Errors
///
/// Returns an error if `current_dir` cannot be canonicalized.
pub fn resolve<R: NoteRegistry + ?Sized>(
    current_dir: &Path,
    search_ancestors: bool,
    registry: &R,
) -> io::Result<Resolution> {
    let canonical = current_dir.canonicalize()?;
    let original = PathHash::of_path(&canonical);

    if search_ancestors
        && let Some(found) = find_owning_ancestor(&canonical, registry)
    {
        return Ok(found);
    }

    tracing::debug!(path = %canonical.display(), hash = %original, "using invocation directory");
    Ok(Resolution {
        hash: original,
        path: canonical,
    })
}

/// Walks from `start` up to the root, returning the first directory with a record.
fn find_owning_ancestor<R: NoteRegistry + ?Sized>(start: &Path, registry: &R) -> Option<Resolution> {
    for candidate in start.ancestors() {
        let hash = PathHash::of_path(candidate);
        tracing::trace!(candidate = %candidate.display(), hash = %hash, "checking directory");
        if registry.contains(&hash) {
            tracing::debug!(path = %candidate.display(), hash = %hash, "found owning directory");
            return Some(Resolution {
                hash,
                path: candidate.to_path_buf(),
            });
        }
    }
    None
}
