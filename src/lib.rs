//! torgo - one org file per directory tree, opened from anywhere inside it

pub mod cli;
pub mod domain;
pub mod logging;
pub mod registry;
pub mod resolver;

use anyhow::{Context as _, Result};
use clap::Parser;

use cli::{
    Cli, CommandName,
    config::Config,
    error::CliError,
    handlers::{CommandEditor, Context, EXIT_SUCCESS, EXIT_USAGE, handle_info, handle_open, handle_search, handle_tag},
    help::format_command_list,
    output::terminal_columns,
    prompt::TerminalPrompter,
};
use registry::JsonRegistry;

/// Main entry point for the CLI application.
///
/// Returns the process exit code: the editor's own code when a note is
/// opened, 1 for command-line usage errors, otherwise 0.
pub fn run() -> Result<u8> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            err.print()?;
            // --help and --version are reported on stdout as successes
            return Ok(if err.use_stderr() { EXIT_USAGE } else { EXIT_SUCCESS });
        }
    };

    if let Err(e) = logging::init_tracing(cli.verbose) {
        eprintln!("warning: failed to initialize logging: {e}");
    }

    if cli.list {
        print!("{}", format_command_list(terminal_columns()));
        return Ok(EXIT_SUCCESS);
    }

    let mut prompter = TerminalPrompter::stdio();
    let config_path = Config::config_path();
    let config = Config::load_or_init(&config_path, cli.init, &mut prompter)?;

    let editor = config
        .editor()
        .ok_or_else(|| CliError::NoEditor { config_path: config_path.clone() })?;

    let org_dir = config.org_dir();
    std::fs::create_dir_all(&org_dir)
        .with_context(|| format!("failed to create org directory: {}", org_dir.display()))?;

    let registry = JsonRegistry::open_in_dir(&org_dir)
        .with_context(|| format!("failed to open registry in {}", org_dir.display()))?;

    let cwd = std::env::current_dir().with_context(|| "failed to read current directory")?;
    let resolution = resolver::resolve(&cwd, !cli.this, &registry)
        .with_context(|| format!("failed to resolve {}", cwd.display()))?;

    let mut ctx = Context {
        org_dir,
        ext: config.ext(),
        registry,
        resolution,
    };

    match cli.command {
        Some(CommandName::Tag) => handle_tag(&mut ctx, cli.param.as_deref()),
        Some(CommandName::Info) => handle_info(&ctx),
        Some(CommandName::Search) => handle_search(&ctx, cli.param.as_deref()),
        None => handle_open(&mut ctx, cli.prune, &CommandEditor::new(editor), &mut prompter),
    }
}
