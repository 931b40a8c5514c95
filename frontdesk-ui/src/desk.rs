//! Desk registry.
//!
//! The hotel's desks are owned by the hotel entity; this registry tracks
//! which one the station is working at. The selection is a single
//! process-wide register persisted under one storage key, last write
//! wins, with a reactive subscription point for everything that depends
//! on the current desk (credential fetches, the push subscription).

use frontdesk_lib::model::{Desk, Hotel};
use tokio::sync::watch;

use crate::settings::{SettingsError, SettingsProvider};

/// Storage key of the persisted desk selection.
pub const CURRENT_DESK_KEY: &str = "CURRENT_DESK";

/// Tracks the currently selected desk across hotel updates.
///
/// Resolution runs on every hotel update: a persisted selection that
/// still exists in the live desk list wins (emitted from the live data,
/// not the cached copy), otherwise the first desk becomes the implicit
/// default, otherwise the selection is empty.
pub struct DeskRegistry {
    settings: SettingsProvider,
    selected: watch::Sender<Option<Desk>>,
}

impl DeskRegistry {
    /// Creates a registry backed by the given settings store.
    pub fn new(settings: SettingsProvider) -> Self {
        let (selected, _) = watch::channel(None);
        Self { settings, selected }
    }

    /// Subscribes to the selected desk.
    ///
    /// The receiver sees the current value immediately and every
    /// re-resolution afterwards; `None` means no desk is available.
    pub fn subscribe(&self) -> watch::Receiver<Option<Desk>> {
        self.selected.subscribe()
    }

    /// The currently selected desk, if any.
    pub fn selected_desk(&self) -> Option<Desk> {
        self.selected.borrow().clone()
    }

    /// The persisted selection, if any.
    pub async fn persisted_desk(&self) -> Result<Option<Desk>, SettingsError> {
        self.settings.get(CURRENT_DESK_KEY).await
    }

    /// Re-resolves the selection against a hotel update.
    pub async fn apply_hotel(&self, hotel: Option<&Hotel>) -> Result<(), SettingsError> {
        let resolved = match hotel {
            Some(hotel) if !hotel.desks.is_empty() => match self.persisted_desk().await? {
                // emit the live desk record, not the cached copy
                Some(saved) => hotel
                    .desk(&saved.id)
                    .cloned()
                    .or_else(|| hotel.desks.first().cloned()),
                None => hotel.desks.first().cloned(),
            },
            _ => None,
        };

        self.selected.send_replace(resolved);
        Ok(())
    }

    /// Persists a desk choice and emits it immediately, without waiting
    /// for the next hotel update.
    pub async fn select_desk(&self, desk: &Desk) -> Result<(), SettingsError> {
        self.settings.set(CURRENT_DESK_KEY, desk).await?;
        self.selected.send_replace(Some(desk.clone()));
        Ok(())
    }

    /// Propagates a desk rename into the persisted selection.
    ///
    /// Only the cached name changes, never the id; desks other than the
    /// persisted one are not the registry's concern. The live value
    /// refreshes on the next hotel update.
    pub async fn rename_desk(&self, id: &str, new_name: &str) -> Result<(), SettingsError> {
        if let Some(mut saved) = self.persisted_desk().await?
            && saved.id == id
        {
            saved.name = new_name.to_string();
            self.settings.set(CURRENT_DESK_KEY, &saved).await?;
        }
        Ok(())
    }

    /// Drops the persisted selection and empties the live value.
    pub async fn clear(&self) -> Result<(), SettingsError> {
        self.settings.delete(CURRENT_DESK_KEY).await?;
        self.selected.send_replace(None);
        Ok(())
    }
}
