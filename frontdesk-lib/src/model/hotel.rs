//! Hotel and desk DTOs

use serde::Deserialize;
use serde::Serialize;

/// A check-in station belonging to a hotel.
///
/// Desks are the scoping unit for the credential push channel: every
/// subscription is keyed by hotel and desk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Desk {
    /// Identifier, unique within the owning hotel.
    pub id: String,
    /// Display name shown at the reception.
    pub name: String,
}

impl Desk {
    /// Creates a new desk.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A hotel with its check-in desks.
///
/// Desk records are owned by the hotel entity; desk create/update/delete
/// calls go through the hotel resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    /// Caller-chosen identifier; the backend rejects duplicates.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Desks available for check-in, in backend order.
    #[serde(default)]
    pub desks: Vec<Desk>,
}

impl Hotel {
    /// Returns the desk with the given id, if the hotel has one.
    pub fn desk(&self, id: &str) -> Option<&Desk> {
        self.desks.iter().find(|desk| desk.id == id)
    }
}
