//! Default command: open the note in the editor, or prune it.

use anyhow::{Context as _, Result, bail};
use std::io;
use std::path::Path;
use std::process::Command;

use super::{Context, EXIT_SUCCESS};
use crate::cli::prompt::Prompter;
use crate::domain::NoteRecord;
use crate::registry::NoteRegistry;

/// Trait for launching an editor (allows mocking in tests).
pub trait EditorLauncher {
    /// Opens `path` and waits, returning the editor's exit code.
    fn open(&self, path: &Path) -> Result<u8>;
}

/// Runs a configured editor command with the note path appended.
#[derive(Debug, Clone)]
pub struct CommandEditor {
    command: String,
}

impl CommandEditor {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// Splits the command with shell quoting rules, e.g. `sh -c 'exit 7'`.
    pub(crate) fn argv(&self) -> Result<Vec<String>> {
        let Some(parts) = shlex::split(&self.command) else {
            bail!("editor command has unbalanced quotes: {}", self.command);
        };
        if parts.is_empty() {
            bail!("editor command is empty");
        }
        Ok(parts)
    }
}

impl EditorLauncher for CommandEditor {
    fn open(&self, path: &Path) -> Result<u8> {
        let argv = self.argv()?;
        let (cmd, args) = argv.split_at(1);

        tracing::debug!(editor = %self.command, path = %path.display(), "launching editor");
        let status = Command::new(&cmd[0])
            .args(args)
            .arg(path)
            .status()
            .with_context(|| format!("failed to launch editor '{}'", self.command))?;

        // Signals and codes that don't fit an exit status count as failure.
        let code = status
            .code()
            .and_then(|c| u8::try_from(c).ok())
            .unwrap_or(1);
        tracing::debug!(code, "editor exited");
        Ok(code)
    }
}

/// Opens the note for the resolved directory, creating its record first if
/// needed, or prunes it when `prune` is set.
///
/// The note file itself is never written here; the editor creates it.
pub fn handle_open<E: EditorLauncher, P: Prompter>(
    ctx: &mut Context,
    prune: bool,
    editor: &E,
    prompter: &mut P,
) -> Result<u8> {
    if prune {
        return prune_note(ctx, prompter);
    }

    let record = ensure_record(ctx)?;
    let note_path = record.note_path(&ctx.org_dir);
    editor.open(&note_path)
}

/// Returns the record for the resolved directory, inserting a new one if absent.
pub(crate) fn ensure_record(ctx: &mut Context) -> Result<NoteRecord> {
    if let Some(record) = ctx.current_record() {
        return Ok(record);
    }

    let record = NoteRecord::new(
        ctx.resolution.hash.clone(),
        ctx.resolution.path.clone(),
        &ctx.ext,
    );
    ctx.registry
        .insert(record.clone())
        .with_context(|| format!("failed to register {}", record.path().display()))?;
    Ok(record)
}

fn prune_note<P: Prompter>(ctx: &mut Context, prompter: &mut P) -> Result<u8> {
    let Some(record) = ctx.current_record() else {
        println!("No org file associated with this directory, nothing to prune.");
        return Ok(EXIT_SUCCESS);
    };

    if !prompter.confirm("Prune this org file? (yes/NO): ")? {
        println!("Prune cancelled...");
        return Ok(EXIT_SUCCESS);
    }

    let note_path = record.note_path(&ctx.org_dir);
    match std::fs::remove_file(&note_path) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            // Happens when the editor was opened but the note never saved.
            tracing::debug!(path = %note_path.display(), "org file missing during prune");
            println!("WARN: Tried to remove the org file, but it wasn't found.");
        }
        Err(e) => {
            return Err(e)
                .with_context(|| format!("failed to remove {}", note_path.display()));
        }
    }

    ctx.registry
        .remove(record.hash())
        .with_context(|| "failed to remove record")?;
    println!("Pruned this org file");
    Ok(EXIT_SUCCESS)
}
