//! Isolated test environment with temp directory.

use super::TorgoCommand;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use torgo::cli::config::Config;
use torgo::domain::{NoteRecord, PathHash};
use torgo::registry::{JsonRegistry, NoteRegistry, REGISTRY_FILE_NAME};

/// Isolated test environment.
///
/// Layout inside one temp directory (canonicalized):
/// - `config.toml`: config file passed through `TORGO_CFG`
/// - `org/`: note directory
/// - `work/`: project tree the commands run in
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    root: PathBuf,
}

impl TestEnv {
    /// Creates an environment whose editor is `touch`, so opening a note
    /// creates an empty note file.
    pub fn new() -> Self {
        Self::with_editor("touch")
    }

    /// Creates an environment with the given editor command.
    pub fn with_editor(editor: &str) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir
            .path()
            .canonicalize()
            .expect("Failed to canonicalize temp directory");
        std::fs::create_dir_all(root.join("work")).expect("Failed to create work dir");

        let env = Self {
            _temp_dir: temp_dir,
            root,
        };
        env.write_config(&Config {
            org_dir: Some(env.org_dir()),
            editor: editor.to_string(),
            ext: Some("org".to_string()),
        });
        env
    }

    /// Overwrites the config file.
    pub fn write_config(&self, config: &Config) {
        config
            .save_to(&self.config_path())
            .expect("Failed to write config");
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join("config.toml")
    }

    pub fn org_dir(&self) -> PathBuf {
        self.root.join("org")
    }

    pub fn registry_path(&self) -> PathBuf {
        self.org_dir().join(REGISTRY_FILE_NAME)
    }

    /// Creates (if needed) and returns `work/<rel>`.
    pub fn dir(&self, rel: &str) -> PathBuf {
        let work = self.root.join("work");
        let path = if rel.is_empty() { work } else { work.join(rel) };
        std::fs::create_dir_all(&path).expect("Failed to create directory");
        path
    }

    /// Opens the registry as the binary would see it.
    pub fn registry(&self) -> JsonRegistry {
        JsonRegistry::open_in_dir(&self.org_dir()).expect("Failed to open registry")
    }

    /// Record owned by exactly `dir`, if any.
    pub fn record_for(&self, dir: &Path) -> Option<NoteRecord> {
        self.registry().get(&PathHash::of_path(dir))
    }

    /// Note file path for `dir`'s record.
    pub fn note_path(&self, dir: &Path) -> PathBuf {
        self.org_dir().join(PathHash::of_path(dir).file_name("org"))
    }

    /// Creates a TorgoCommand running in `work/<rel>` with this config.
    pub fn cmd_in(&self, rel: &str) -> TorgoCommand {
        TorgoCommand::new()
            .config(&self.config_path())
            .current_dir(&self.dir(rel))
    }

    /// Creates a TorgoCommand running in `work/`.
    pub fn cmd(&self) -> TorgoCommand {
        self.cmd_in("")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.org_dir()
        };
        assert!(!path.exists(), "temp directory should be cleaned up on drop");
    }

    #[test]
    fn test_env_writes_config() {
        let env = TestEnv::new();
        let config = Config::load_from(&env.config_path()).unwrap().unwrap();
        assert_eq!(config.editor, "touch");
        assert_eq!(config.org_dir(), env.org_dir());
    }
}
