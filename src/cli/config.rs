//! Configuration file support.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use super::prompt::{ConfigValues, Prompter};

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "TORGO_CFG";

/// Extension used for new notes when none is configured.
pub const DEFAULT_EXT: &str = "org";

/// Application configuration loaded from the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the note files and the registry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_dir: Option<PathBuf>,

    /// Editor command; empty means "use $EDITOR"
    #[serde(default)]
    pub editor: String,

    /// Extension for newly created notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ext: Option<String>,
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// `$TORGO_CFG` if set, otherwise `~/.config/torgo/config.toml`.
    pub fn config_path() -> PathBuf {
        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
            return PathBuf::from(path);
        }
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("torgo")
            .join("config.toml")
    }

    /// Loads the config file, returning `None` if it doesn't exist.
    pub fn load_from(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .map(Some)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Loads the config file, running interactive setup when it is missing
    /// or when `force_init` is set. A freshly set up config is saved.
    pub fn load_or_init<P: Prompter>(path: &Path, force_init: bool, prompter: &mut P) -> Result<Self> {
        let existing = Self::load_from(path)?;

        match existing {
            Some(config) if !force_init => Ok(config),
            existing => {
                let defaults = existing.unwrap_or_default().values();
                let values = prompter
                    .prompt_config(&defaults)
                    .with_context(|| "failed to read configuration")?;
                let config = Self::from(values);
                config.save_to(path)?;
                tracing::debug!(path = %path.display(), "wrote config file");
                Ok(config)
            }
        }
    }

    /// Writes the config file, creating its parent directory if needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create config directory: {}", parent.display()))?;

        let contents = toml::to_string_pretty(self).with_context(|| "failed to serialize config")?;

        let mut temp = NamedTempFile::new_in(parent)
            .with_context(|| format!("failed to write config file: {}", path.display()))?;
        temp.write_all(contents.as_bytes())
            .with_context(|| format!("failed to write config file: {}", path.display()))?;
        temp.persist(path)
            .with_context(|| format!("failed to write config file: {}", path.display()))?;
        Ok(())
    }

    /// Resolve the note directory.
    ///
    /// Falls back to `~/.torgo`.
    pub fn org_dir(&self) -> PathBuf {
        self.org_dir.clone().unwrap_or_else(default_org_dir)
    }

    /// Extension for new notes, `org` when unset or blank.
    pub fn ext(&self) -> String {
        self.ext
            .as_deref()
            .map(|e| e.trim().trim_start_matches('.'))
            .filter(|e| !e.is_empty())
            .unwrap_or(DEFAULT_EXT)
            .to_string()
    }

    /// Resolve the editor command.
    ///
    /// Precedence order:
    /// 1. Config file `editor` setting
    /// 2. $EDITOR environment variable
    pub fn editor(&self) -> Option<String> {
        self.editor_or(std::env::var("EDITOR").ok())
    }

    pub(crate) fn editor_or(&self, env_editor: Option<String>) -> Option<String> {
        Some(self.editor.trim().to_string())
            .filter(|e| !e.is_empty())
            .or_else(|| env_editor.map(|e| e.trim().to_string()).filter(|e| !e.is_empty()))
    }

    /// Current settings as prompt defaults.
    pub fn values(&self) -> ConfigValues {
        ConfigValues {
            org_dir: self.org_dir(),
            editor: self.editor.clone(),
            ext: self.ext(),
        }
    }
}

impl From<ConfigValues> for Config {
    fn from(values: ConfigValues) -> Self {
        Self {
            org_dir: Some(values.org_dir),
            editor: values.editor,
            ext: Some(values.ext),
        }
    }
}

fn default_org_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".torgo")
}
