//! Info command handler.

use anyhow::Result;

use super::{Context, EXIT_SUCCESS};
use crate::cli::output::tag_list;

pub fn handle_info(ctx: &Context) -> Result<u8> {
    match ctx.current_record() {
        Some(record) => {
            println!("The information about this org file is as follows:");
            println!("  hash:     {}", record.hash());
            println!("  path:     {}", record.path().display());
            println!("  org file: {}", record.note_path(&ctx.org_dir).display());
            println!("  tags:     {}", tag_list(record.tags()));
        }
        None => {
            println!("There is no org file associated with this directory.");
        }
    }
    Ok(EXIT_SUCCESS)
}
