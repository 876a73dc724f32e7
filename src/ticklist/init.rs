use crate::api::TicklistApi;
use crate::config::TicklistConfig;
use crate::error::{Result, TicklistError};
use crate::store::fs::FileStore;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Reads the config at `config_path` (creating it with defaults when it is
/// missing) and resolves the data file it points to.
///
/// A relative data file path is taken relative to the config file's
/// directory. An unparsable config falls back to the defaults in memory and
/// is left untouched on disk.
pub fn resolve_data_file<P: AsRef<Path>>(config_path: P) -> Result<PathBuf> {
    let config_path = config_path.as_ref();
    let config = match TicklistConfig::load_or_create(config_path) {
        Ok(config) => config,
        Err(TicklistError::Serialization(e)) => {
            warn!(path = %config_path.display(), error = %e, "unreadable config, using defaults");
            TicklistConfig::default()
        }
        Err(e) => return Err(e),
    };

    let base = config_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    Ok(config.todo_file_in(base))
}

/// Opens the file-backed API described by the config at `config_path`.
pub fn open<P: AsRef<Path>>(config_path: P) -> Result<TicklistApi<FileStore>> {
    let data_file = resolve_data_file(config_path)?;
    info!(path = %data_file.display(), "opening item lists");
    TicklistApi::open(FileStore::new(data_file))
}
