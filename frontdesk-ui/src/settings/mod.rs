//! Typed key-value settings storage.
//!
//! One durable string-keyed store holds small JSON documents (currently
//! just the selected desk). Backends provide raw string storage; the
//! provider adds typed access via `serde_json`.

mod backend;
mod memory;
mod sqlite;

pub use backend::SettingsBackend;
pub use memory::MemoryBackend;
pub use sqlite::SqliteBackend;

use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// Settings error type.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("database error: {0}")]
    Database(#[from] async_sqlite::Error),
    #[error("serialization error: {0}")]
    Serialization(serde_json::Error),
    #[error("deserialization error: {0}")]
    Deserialization(serde_json::Error),
}

/// Typed settings provider.
///
/// Wraps a [`SettingsBackend`] with typed JSON serialization.
#[derive(Clone)]
pub struct SettingsProvider {
    backend: Arc<dyn SettingsBackend>,
}

impl SettingsProvider {
    /// Creates a new settings provider with the given backend.
    pub fn new(backend: impl SettingsBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Gets a typed value for a key.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, SettingsError> {
        match self.backend.get_raw(key).await? {
            Some(raw) => Ok(Some(
                serde_json::from_str(&raw).map_err(SettingsError::Deserialization)?,
            )),
            None => Ok(None),
        }
    }

    /// Sets a typed value for a key.
    pub async fn set<T: Serialize + Sync>(
        &self,
        key: &str,
        value: &T,
    ) -> Result<(), SettingsError> {
        let raw = serde_json::to_string(value).map_err(SettingsError::Serialization)?;
        self.backend.set_raw(key, raw).await
    }

    /// Checks whether a key is present.
    pub async fn contains(&self, key: &str) -> Result<bool, SettingsError> {
        Ok(self.backend.get_raw(key).await?.is_some())
    }

    /// Deletes a key.
    pub async fn delete(&self, key: &str) -> Result<(), SettingsError> {
        self.backend.delete(key).await
    }
}
