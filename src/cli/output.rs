//! Terminal formatting helpers.

use std::io::IsTerminal;

use crate::domain::{Tag, TagSet};

const HIGHLIGHT: &str = "\x1b[1;33m";
const RESET: &str = "\x1b[0m";

/// Width used for wrapping when `$COLUMNS` is unset or invalid.
pub const DEFAULT_COLUMNS: usize = 70;

/// Whether stdout should receive ANSI styling.
pub fn stdout_styled() -> bool {
    std::io::stdout().is_terminal()
}

/// Renders `tags` as `[a, b]`, highlighting any that appear in `matched`.
pub fn highlight_tags(tags: &TagSet, matched: &[Tag], styled: bool) -> String {
    let rendered: Vec<String> = tags
        .iter()
        .map(|t| {
            if styled && matched.contains(t) {
                format!("{}{}{}", HIGHLIGHT, t, RESET)
            } else {
                t.to_string()
            }
        })
        .collect();
    format!("[{}]", rendered.join(", "))
}

/// Joins tags with commas, or returns `none`.
pub fn tag_list(tags: &TagSet) -> String {
    if tags.is_empty() {
        return "none".to_string();
    }
    tags.iter().map(Tag::as_str).collect::<Vec<_>>().join(", ")
}

/// Terminal width from `$COLUMNS`.
pub fn terminal_columns() -> usize {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|c| c.trim().parse::<usize>().ok())
        .filter(|c| *c > 0)
        .unwrap_or(DEFAULT_COLUMNS)
}

/// Greedy word wrap. Words longer than `width` get a line of their own.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}
