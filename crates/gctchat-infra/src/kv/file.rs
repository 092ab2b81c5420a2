//! JSON-file key-value store implementation.
//!
//! Implements `KvStore` from `gctchat-core` on top of a single JSON object
//! file. Each `set` rewrites the whole file through a temporary file in the
//! same directory followed by a rename, so readers never see a torn write.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use gctchat_core::storage::KvStore;
use gctchat_types::error::RepositoryError;
use serde_json::Value;
use tempfile::NamedTempFile;

/// File name of the state file inside the data directory.
pub const STATE_FILE_NAME: &str = "state.json";

/// File-backed implementation of `KvStore`.
///
/// A missing file is an empty store. Keys written by other tools are kept
/// when the file is rewritten.
#[derive(Debug, Clone)]
pub struct FileKvStore {
    path: PathBuf,
}

impl FileKvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The store at `{data_dir}/state.json`.
    pub fn in_data_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(STATE_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, Value>, RepositoryError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(BTreeMap::new());
            }
            Err(err) => {
                return Err(RepositoryError::Io(format!(
                    "failed to read {}: {err}",
                    self.path.display()
                )));
            }
        };

        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&content).map_err(|e| {
            RepositoryError::Corrupt(format!("{} is not a JSON object: {e}", self.path.display()))
        })
    }

    fn write_entries(&self, entries: &BTreeMap<String, Value>) -> Result<(), RepositoryError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir)
            .map_err(|e| RepositoryError::Io(format!("failed to create {}: {e}", dir.display())))?;

        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| RepositoryError::Corrupt(format!("failed to serialize state: {e}")))?;

        let mut tmp = NamedTempFile::new_in(dir)
            .map_err(|e| RepositoryError::Io(format!("failed to create temp file: {e}")))?;
        tmp.write_all(json.as_bytes())
            .and_then(|()| tmp.write_all(b"\n"))
            .map_err(|e| RepositoryError::Io(format!("failed to write temp file: {e}")))?;
        tmp.persist(&self.path).map_err(|e| {
            RepositoryError::Io(format!("failed to replace {}: {}", self.path.display(), e.error))
        })?;
        Ok(())
    }
}

impl KvStore for FileKvStore {
    fn get(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        match self.read_entries()?.remove(key) {
            None => Ok(None),
            Some(Value::String(value)) => Ok(Some(value)),
            Some(other) => Err(RepositoryError::Corrupt(format!(
                "value for '{key}' is not a string: {other}"
            ))),
        }
    }

    /// Write `value` under `key`.
    ///
    /// An unparsable state file is replaced rather than blocking the write;
    /// its other keys are lost.
    fn set(&mut self, key: &str, value: &str) -> Result<(), RepositoryError> {
        let mut entries = match self.read_entries() {
            Ok(entries) => entries,
            Err(RepositoryError::Corrupt(reason)) => {
                tracing::warn!(path = %self.path.display(), %reason, "replacing corrupt state file");
                BTreeMap::new()
            }
            Err(err) => return Err(err),
        };
        entries.insert(key.to_string(), Value::String(value.to_string()));
        self.write_entries(&entries)?;
        tracing::debug!(path = %self.path.display(), key, "state file updated");
        Ok(())
    }
}
