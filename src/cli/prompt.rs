//! Interactive prompts (configuration setup, confirmations).

use anyhow::Result;
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::path::PathBuf;

/// Settings collected by the interactive setup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValues {
    pub org_dir: PathBuf,
    pub editor: String,
    pub ext: String,
}

/// Source of interactive answers (allows scripting in tests).
pub trait Prompter {
    /// Asks a yes/no question. Only an explicit "yes" confirms.
    fn confirm(&mut self, prompt: &str) -> Result<bool>;

    /// Asks for every configuration setting, offering `defaults`.
    fn prompt_config(&mut self, defaults: &ConfigValues) -> Result<ConfigValues>;
}

/// Prompter reading answers line by line from a reader.
pub struct TerminalPrompter<R, W> {
    input: R,
    output: W,
}

impl TerminalPrompter<StdinLock<'static>, Stdout> {
    /// Prompter bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Returns the next line without its line terminator, or an empty string at
    /// end of input.
    fn read_answer(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        let answer = line
            .strip_suffix('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
            .unwrap_or(&line);
        Ok(answer.to_string())
    }

    /// Returns the trimmed next line.
    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        Ok(self.read_answer(prompt)?.trim().to_string())
    }

    fn ask_with_default(&mut self, prompt: &str, default: &str) -> io::Result<String> {
        let answer = self.ask(&format!("{}\n[{}] ", prompt, default))?;
        writeln!(self.output)?;
        if answer.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(answer)
        }
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        Ok(self.read_answer(prompt)? == "yes")
    }

    fn prompt_config(&mut self, defaults: &ConfigValues) -> Result<ConfigValues> {
        writeln!(self.output, "TORGO CONFIGURATION\n")?;
        writeln!(self.output, "Enter your settings; defaults are in brackets.\n")?;

        let org_dir =
            self.ask_with_default("Org directory:", &defaults.org_dir.to_string_lossy())?;
        let editor = self.ask_with_default(
            "Editor command (blank to use $EDITOR):",
            &defaults.editor,
        )?;
        let ext = self.ask_with_default("Extension for org files:", &defaults.ext)?;

        Ok(ConfigValues {
            org_dir: PathBuf::from(org_dir),
            editor,
            ext,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn prompter(input: &str) -> TerminalPrompter<Cursor<Vec<u8>>, Vec<u8>> {
        TerminalPrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn defaults() -> ConfigValues {
        ConfigValues {
            org_dir: PathBuf::from("/home/u/.torgo"),
            editor: String::new(),
            ext: "org".to_string(),
        }
    }

    #[test]
    fn confirm_accepts_only_exact_yes() {
        for input in ["yes\n", "yes\r\n", "yes"] {
            assert!(prompter(input).confirm("Prune? ").unwrap(), "input {:?}", input);
        }
    }

    #[test]
    fn confirm_rejects_everything_else() {
        let inputs = [
            "", "\n", "y\n", "no\n", "yess\n", "YES\n", "Yes\n", " yes\n", "yes \n",
        ];
        for input in inputs {
            assert!(!prompter(input).confirm("Prune? ").unwrap(), "input {:?}", input);
        }
    }

    #[test]
    fn confirm_writes_prompt() {
        let mut p = prompter("no\n");
        p.confirm("Prune this org file? (yes/NO): ").unwrap();
        assert_eq!(
            String::from_utf8(p.output).unwrap(),
            "Prune this org file? (yes/NO): "
        );
    }

    #[test]
    fn prompt_config_uses_defaults_for_blank_answers() {
        let values = prompter("\n\n\n").prompt_config(&defaults()).unwrap();
        assert_eq!(values, defaults());
    }

    #[test]
    fn prompt_config_takes_answers() {
        let values = prompter("/tmp/notes\nnvim\nmd\n")
            .prompt_config(&defaults())
            .unwrap();
        assert_eq!(
            values,
            ConfigValues {
                org_dir: PathBuf::from("/tmp/notes"),
                editor: "nvim".to_string(),
                ext: "md".to_string(),
            }
        );
    }
}
