//! Fluent wrapper around assert_cmd::Command.

// Allow dead code since this is a test utility shared by several test crates
#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};

/// Fluent wrapper around `assert_cmd::Command` for the `torgo` binary.
///
/// The environment is scrubbed of `EDITOR`, `TORGO_LOG` and `COLUMNS` so
/// results only depend on what the test sets up.
pub struct TorgoCommand {
    args: Vec<String>,
    config: Option<PathBuf>,
    cwd: Option<PathBuf>,
    stdin: Option<String>,
    env: Vec<(String, String)>,
}

impl TorgoCommand {
    /// Creates a new command for the `torgo` binary.
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            config: None,
            cwd: None,
            stdin: None,
            env: Vec::new(),
        }
    }

    /// Points `TORGO_CFG` at the given config file.
    pub fn config(mut self, path: &Path) -> Self {
        self.config = Some(path.to_path_buf());
        self
    }

    /// Runs the binary from `dir`.
    pub fn current_dir(mut self, dir: &Path) -> Self {
        self.cwd = Some(dir.to_path_buf());
        self
    }

    /// Feeds `input` to stdin.
    pub fn stdin(mut self, input: impl Into<String>) -> Self {
        self.stdin = Some(input.into());
        self
    }

    /// Sets an extra environment variable.
    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.env.push((key.to_string(), value.to_string()));
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Returns the current arguments (for testing).
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Runs the command and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("torgo").expect("Failed to find torgo binary");
        cmd.env_remove("EDITOR")
            .env_remove("TORGO_LOG")
            .env_remove("COLUMNS")
            .env_remove("TORGO_CFG");
        if let Some(config) = &self.config {
            cmd.env("TORGO_CFG", config);
        }
        for (key, value) in &self.env {
            cmd.env(key, value);
        }
        if let Some(cwd) = &self.cwd {
            cmd.current_dir(cwd);
        }
        // Never block on an interactive prompt.
        cmd.write_stdin(self.stdin.unwrap_or_default());
        cmd.args(&self.args);
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    /// Configures for the `tag` command with an optional parameter.
    pub fn tag(self, param: Option<&str>) -> Self {
        let cmd = self.args(["tag"]);
        match param {
            Some(p) => cmd.args([p]),
            None => cmd,
        }
    }

    /// Configures for the `info` command.
    pub fn info(self) -> Self {
        self.args(["info"])
    }

    /// Configures for the `search` command with a parameter.
    pub fn search(self, param: &str) -> Self {
        self.args(["search", param])
    }

    /// Adds `--this`.
    pub fn this(self) -> Self {
        self.args(["--this"])
    }

    /// Adds `--prune`.
    pub fn prune(self) -> Self {
        self.args(["--prune"])
    }
}

impl Default for TorgoCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_runs_binary() {
        TorgoCommand::new().args(["--help"]).assert().success();
    }

    #[test]
    fn test_command_shortcuts() {
        let cmd = TorgoCommand::new().tag(Some("a,b")).this();
        assert_eq!(cmd.get_args(), ["tag", "a,b", "--this"]);
    }
}
