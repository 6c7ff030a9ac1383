//! Errors that end an invocation with a usage message.

use std::path::PathBuf;
use thiserror::Error;

/// Search syntax shown alongside search usage errors.
pub const SEARCH_USAGE: &str = "Please include one of the following:\n\
    \ttag=tags\tWhere 'tags' is a comma separated list of tags to search for.\n\
    \tall\t\tTo list all the org file records.";

#[derive(Debug, Error)]
pub enum CliError {
    /// Bad or missing command parameters.
    #[error("{message}")]
    Usage { message: String },

    /// Neither the config file nor $EDITOR names an editor.
    #[error(
        "no editor found: set `editor` in '{}' or the EDITOR environment variable \
         (re-run with -i to reconfigure)",
        .config_path.display()
    )]
    NoEditor { config_path: PathBuf },

    /// A command that needs an existing note was run where there is none.
    #[error(
        "no org file here; create tags after you have created an org file (after you first edit it)"
    )]
    NoRecord,
}

impl CliError {
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }

    /// Usage error for the search command, including the accepted syntax.
    pub fn search_usage(message: impl AsRef<str>) -> Self {
        Self::usage(format!("{}\n\n{}", message.as_ref(), SEARCH_USAGE))
    }
}
