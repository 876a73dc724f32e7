use crate::error::{Result, TicklistError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const DEFAULT_CONFIG_PATH: &str = "./mem.txt";
const DEFAULT_TODO_FILE: &str = "./todo.txt";

/// Application configuration, stored as JSON at a fixed path (`./mem.txt` by default).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TicklistConfig {
    /// Where the todo/pass data file lives
    #[serde(default = "default_todo_file")]
    pub todo_file: PathBuf,
}

fn default_todo_file() -> PathBuf {
    PathBuf::from(DEFAULT_TODO_FILE)
}

impl Default for TicklistConfig {
    fn default() -> Self {
        Self {
            todo_file: default_todo_file(),
        }
    }
}

impl TicklistConfig {
    /// Load config from the given file, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_path = config_path.as_ref();

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path).map_err(TicklistError::Io)?;
        let config: TicklistConfig =
            serde_json::from_str(&content).map_err(TicklistError::Serialization)?;
        Ok(config)
    }

    /// Load config, writing the defaults first when the file does not exist yet.
    pub fn load_or_create<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_path = config_path.as_ref();

        if !config_path.exists() {
            info!(path = %config_path.display(), "creating default config");
            Self::default().save(config_path)?;
        }

        Self::load(config_path)
    }

    /// Save config to the given file
    pub fn save<P: AsRef<Path>>(&self, config_path: P) -> Result<()> {
        let config_path = config_path.as_ref();

        if let Some(parent) = config_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(TicklistError::Io)?;
            }
        }

        let content = serde_json::to_string_pretty(self).map_err(TicklistError::Serialization)?;
        fs::write(config_path, content).map_err(TicklistError::Io)?;
        Ok(())
    }

    /// Data file path, resolved against `base` when it is relative.
    pub fn todo_file_in(&self, base: &Path) -> PathBuf {
        if self.todo_file.is_relative() {
            base.join(&self.todo_file)
        } else {
            self.todo_file.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TicklistConfig::default();
        assert_eq!(config.todo_file, PathBuf::from("./todo.txt"));
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mem.txt");

        let config = TicklistConfig::load(&path).unwrap();
        assert_eq!(config, TicklistConfig::default());
        assert!(!path.exists());
    }

    #[test]
    fn test_load_or_create_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mem.txt");

        let config = TicklistConfig::load_or_create(&path).unwrap();
        assert_eq!(config, TicklistConfig::default());
        assert!(path.exists());

        let on_disk = fs::read_to_string(&path).unwrap();
        assert!(on_disk.contains("todo_file"));
    }

    #[test]
    fn test_load_or_create_keeps_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mem.txt");
        fs::write(&path, r#"{"todo_file": "elsewhere.json"}"#).unwrap();

        let config = TicklistConfig::load_or_create(&path).unwrap();
        assert_eq!(config.todo_file, PathBuf::from("elsewhere.json"));
    }

    #[test]
    fn test_missing_field_falls_back_to_default() {
        let config: TicklistConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, TicklistConfig::default());
    }

    #[test]
    fn test_garbage_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mem.txt");
        fs::write(&path, "not json").unwrap();

        let err = TicklistConfig::load(&path).unwrap_err();
        assert!(matches!(err, TicklistError::Serialization(_)));
    }

    #[test]
    fn test_todo_file_in_resolves_relative_paths() {
        let config = TicklistConfig {
            todo_file: PathBuf::from("data.json"),
        };
        assert_eq!(
            config.todo_file_in(Path::new("/tmp/base")),
            PathBuf::from("/tmp/base/data.json")
        );

        let absolute = TicklistConfig {
            todo_file: PathBuf::from("/var/data.json"),
        };
        assert_eq!(
            absolute.todo_file_in(Path::new("/tmp/base")),
            PathBuf::from("/var/data.json")
        );
    }
}
