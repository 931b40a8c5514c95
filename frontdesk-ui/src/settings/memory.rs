//! In-memory settings backend using DashMap.

use async_trait::async_trait;
use dashmap::DashMap;

use super::{SettingsBackend, SettingsError};

/// An in-memory settings backend.
///
/// Nothing survives the process; intended for tests and ephemeral
/// sessions.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    store: DashMap<String, String>,
}

impl MemoryBackend {
    /// Creates a new empty backend.
    pub fn new() -> Self {
        Self {
            store: DashMap::new(),
        }
    }
}

#[async_trait]
impl SettingsBackend for MemoryBackend {
    async fn get_raw(&self, key: &str) -> Result<Option<String>, SettingsError> {
        Ok(self.store.get(key).map(|entry| entry.clone()))
    }

    async fn set_raw(&self, key: &str, value: String) -> Result<(), SettingsError> {
        self.store.insert(key.to_string(), value);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), SettingsError> {
        self.store.remove(key);
        Ok(())
    }
}
