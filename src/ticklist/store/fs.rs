use super::DataStore;
use crate::error::{Result, TicklistError};
use crate::model::ItemLists;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

pub struct FileStore {
    data_file: PathBuf,
}

impl FileStore {
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.data_file
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.data_file.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(TicklistError::Io)?;
            }
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let name = self
            .data_file
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("todo");
        self.data_file
            .with_file_name(format!(".{}-{}.tmp", name, Uuid::new_v4()))
    }
}

impl DataStore for FileStore {
    fn load_items(&self) -> Result<Option<ItemLists>> {
        if !self.data_file.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.data_file).map_err(TicklistError::Io)?;
        let lists: ItemLists =
            serde_json::from_str(&content).map_err(TicklistError::Serialization)?;
        Ok(Some(lists))
    }

    fn save_items(&mut self, lists: &ItemLists) -> Result<()> {
        self.ensure_parent()?;
        let content = serde_json::to_string_pretty(lists).map_err(TicklistError::Serialization)?;

        // Atomic write
        let tmp_file = self.tmp_path();
        fs::write(&tmp_file, content).map_err(TicklistError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, &self.data_file) {
            let _ = fs::remove_file(&tmp_file);
            return Err(TicklistError::Io(e));
        }

        debug!(
            path = %self.data_file.display(),
            todo = lists.todo.len(),
            pass = lists.pass.len(),
            "saved item lists"
        );
        Ok(())
    }
}
