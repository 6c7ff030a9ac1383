//! Tag command handler.

use anyhow::{Context as _, Result};

use super::{Context, EXIT_SUCCESS};
use crate::cli::error::CliError;
use crate::domain::{Tag, parse_tag_edits};
use crate::registry::NoteRegistry;

/// Lists the record's tags, or applies `param` edits (`a,.b` adds `a`, removes `b`).
///
/// # Errors
///
/// Fails with `CliError::NoRecord` when the directory has no note yet, and
/// with a usage error when an entry is not a valid tag.
pub fn handle_tag(ctx: &mut Context, param: Option<&str>) -> Result<u8> {
    let record = ctx.current_record().ok_or(CliError::NoRecord)?;

    let Some(param) = param else {
        if record.tags().is_empty() {
            println!("No tags associated with this org file.");
        } else {
            println!("The tags associated with this org file:");
            for tag in record.tags() {
                println!("\t{}", tag);
            }
        }
        return Ok(EXIT_SUCCESS);
    };

    let edits = parse_tag_edits(param).map_err(|e| CliError::usage(e.to_string()))?;

    let mut updated = record.clone();
    updated.tags_mut().apply(&edits);
    tracing::debug!(hash = %record.hash(), edits = edits.len(), "applying tag edits");

    ctx.registry
        .update(record.hash(), updated.clone())
        .with_context(|| "failed to save tags")?;

    let names: Vec<&str> = updated.tags().iter().map(Tag::as_str).collect();
    if names.is_empty() {
        println!("Tags updated; no tags remain.");
    } else {
        println!("Tags: {}", names.join(", "));
    }
    Ok(EXIT_SUCCESS)
}
