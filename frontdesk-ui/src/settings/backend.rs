//! Settings backend trait.

use async_trait::async_trait;

use super::SettingsError;

/// Backend trait for settings storage.
///
/// Implementations store raw JSON strings; the [`super::SettingsProvider`]
/// wraps this with typed serialization.
#[async_trait]
pub trait SettingsBackend: Send + Sync {
    /// Gets the raw string for a key.
    async fn get_raw(&self, key: &str) -> Result<Option<String>, SettingsError>;

    /// Sets the raw string for a key.
    async fn set_raw(&self, key: &str, value: String) -> Result<(), SettingsError>;

    /// Deletes a key.
    async fn delete(&self, key: &str) -> Result<(), SettingsError>;
}
