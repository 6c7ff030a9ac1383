//! Command list shown by `--list`.

use super::CommandName;
use super::output::wrap;

/// Metadata for a single command.
#[derive(Debug, Clone)]
pub struct CommandInfo {
    pub name: &'static str,
    pub description: &'static str,
}

impl CommandName {
    pub fn info(self) -> CommandInfo {
        match self {
            CommandName::Tag => CommandInfo {
                name: "tag",
                description: "Sets or unsets tags for the org file. The parameter is a comma \
                    separated list of tags to set or unset. With no parameter, lists the tags. \
                    A tag prefixed with a \".\" is unset.",
            },
            CommandName::Info => CommandInfo {
                name: "info",
                description: "Prints the information for the org file.",
            },
            CommandName::Search => CommandInfo {
                name: "search",
                description: "Search functionality. Use \"tag=\" followed by a comma separated \
                    list of tags to search. Use \"all\" to list all known org files.",
            },
        }
    }
}

/// All commands, sorted by name.
pub fn command_registry() -> Vec<CommandInfo> {
    let mut commands: Vec<CommandInfo> = [CommandName::Tag, CommandName::Info, CommandName::Search]
        .into_iter()
        .map(CommandName::info)
        .collect();
    commands.sort_by_key(|c| c.name);
    commands
}

/// Formats the command list for a terminal `columns` wide.
///
/// Names are right-aligned; descriptions wrap with continuation lines
/// indented past the name column.
pub fn format_command_list(columns: usize) -> String {
    let commands = command_registry();
    let key_len = commands.iter().map(|c| c.name.len()).max().unwrap_or(0);
    let desc_len = columns.saturating_sub(5 + key_len).max(20);
    let indent = " ".repeat(5 + key_len);

    let mut out = String::new();
    for cmd in &commands {
        let lines = wrap(cmd.description, desc_len);
        let mut lines = lines.iter();
        if let Some(first) = lines.next() {
            out.push_str(&format!("  {:>width$} : {}\n", cmd.name, first, width = key_len));
        }
        for line in lines {
            out.push_str(&format!("{}{}\n", indent, line));
        }
    }
    out
}
