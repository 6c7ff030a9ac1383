//! Search command handler.

use anyhow::Result;

use super::{Context, EXIT_SUCCESS};
use crate::cli::error::CliError;
use crate::cli::output::{highlight_tags, stdout_styled};
use crate::domain::{Tag, parse_tag_list};
use crate::registry::NoteRegistry;

/// A parsed search parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// Records carrying any of these tags
    Tags(Vec<Tag>),
    /// Every record
    All,
}

impl SearchQuery {
    /// Parses `tag=a,b` or `all`.
    ///
    /// # Errors
    ///
    /// Returns a usage error for a missing parameter, an unknown search type,
    /// or a tag search without valid tags.
    pub fn parse(param: Option<&str>) -> Result<Self, CliError> {
        let Some(param) = param.map(str::trim).filter(|p| !p.is_empty()) else {
            return Err(CliError::search_usage("No search parameter found!"));
        };

        let (kind, value) = match param.split_once('=') {
            Some((kind, value)) => (kind.trim(), Some(value)),
            None => (param, None),
        };

        match kind {
            "tag" => {
                let tags = parse_tag_list(value.unwrap_or_default())
                    .map_err(|e| CliError::search_usage(e.to_string()))?;
                if tags.is_empty() {
                    return Err(CliError::search_usage("No tags to search with!"));
                }
                Ok(Self::Tags(tags))
            }
            "all" if value.is_none() => Ok(Self::All),
            _ => Err(CliError::search_usage(format!(
                "Unknown search type '{}'",
                param
            ))),
        }
    }
}

pub fn handle_search(ctx: &Context, param: Option<&str>) -> Result<u8> {
    match SearchQuery::parse(param)? {
        SearchQuery::Tags(tags) => {
            let records = ctx.registry.find_by_any_tag(&tags);
            tracing::debug!(matches = records.len(), "tag search");

            if records.is_empty() {
                println!("Found 0 records...");
                return Ok(EXIT_SUCCESS);
            }

            println!(
                "Found {} record(s) with the following tag(s):",
                records.len()
            );
            for tag in &tags {
                println!("\t{}", tag);
            }
            println!();

            let styled = stdout_styled();
            for record in &records {
                println!(
                    "Path: {} | {}",
                    record.path().display(),
                    highlight_tags(record.tags(), &tags, styled)
                );
            }
        }
        SearchQuery::All => {
            let records = ctx.registry.all();
            println!("There are {} org files being managed.\n", records.len());
            for record in &records {
                println!("Path: {}", record.path().display());
            }
        }
    }
    Ok(EXIT_SUCCESS)
}
