use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};

use super::KeyValueStore;

const STORE_FILE_NAME: &str = "storage.json";

/// A store persisted as a flat JSON object (`{"key": "value", ...}`).
///
/// Every operation re-reads the file so that two console processes sharing
/// a path observe each other's writes. A missing file reads as empty; a
/// corrupt one fails reads and is replaced by the next write.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config_dir>/storage.json`.
    pub fn in_dir(config_dir: &Path) -> Self {
        Self::new(config_dir.join(STORE_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> CoreResult<BTreeMap<String, String>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
                return Err(CoreError::PermissionDenied(self.path.clone()))
            }
            Err(e) => return Err(CoreError::Io(e)),
        };
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content).map_err(|e| CoreError::CorruptStore {
            path: self.path.clone(),
            reason: e.to_string(),
        })
    }

    /// Like [`FileStore::load`], but a corrupt file yields an empty map so
    /// the next write replaces it.
    fn load_for_write(&self) -> CoreResult<BTreeMap<String, String>> {
        match self.load() {
            Err(CoreError::CorruptStore { path, reason }) => {
                tracing::warn!("Overwriting corrupt store {}: {reason}", path.display());
                Ok(BTreeMap::new())
            }
            other => other,
        }
    }

    /// Writes to a sibling temp file and renames it over the target.
    fn persist(&self, entries: &BTreeMap<String, String>) -> CoreResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(entries).map_err(|e| CoreError::CorruptStore {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, content)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> CoreResult<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> CoreResult<()> {
        let mut entries = self.load_for_write()?;
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries)?;
        tracing::debug!("Store write: key={key}, path={}", self.path.display());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> CoreResult<()> {
        let mut entries = self.load_for_write()?;
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.persist(&entries)?;
        tracing::debug!("Store delete: key={key}, path={}", self.path.display());
        Ok(())
    }
}
