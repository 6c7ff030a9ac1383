//! CLI command definitions and handlers

pub mod config;
pub mod error;
pub mod handlers;
pub mod help;
pub mod output;
pub mod prompt;

use clap::{ArgAction, Parser, ValueEnum};

/// torgo - org-file anywhere, managed
///
/// Opens the note for the current directory tree in your editor.
#[derive(Parser, Debug)]
#[command(name = "torgo", version, about, long_about = None)]
pub struct Cli {
    /// The command to run (omit to open the note)
    #[arg(value_enum)]
    pub command: Option<CommandName>,

    /// Optional parameter for the command, see --list
    pub param: Option<String>,

    /// List the commands available
    #[arg(short, long)]
    pub list: bool,

    /// Use this directory; don't look for an org file in parent directories
    #[arg(short, long)]
    pub this: bool,

    /// Force a re-init of the configuration
    #[arg(short, long)]
    pub init: bool,

    /// Prune the current org file (delete it)
    #[arg(short, long)]
    pub prune: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Named commands; running without one opens the note.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CommandName {
    /// Set, unset or list tags
    Tag,
    /// Print the record for this directory
    Info,
    /// Search records by tag, or list all
    Search,
}
