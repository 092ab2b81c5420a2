use std::collections::HashMap;

use gctchat_types::error::RepositoryError;

use super::KvStore;

/// Process-local `KvStore`. Values are lost when the process exits.
#[derive(Debug, Default, Clone)]
pub struct MemoryKvStore {
    entries: HashMap<String, String>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a raw value, bypassing any validation done by callers.
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }
}

impl KvStore for MemoryKvStore {
    fn get(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), RepositoryError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
