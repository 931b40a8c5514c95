//! Property-management-system forwarding payload

use serde::Deserialize;
use serde::Serialize;

use super::BookingData;
use super::CheckInCredential;

/// The payload forwarded to the property-management system once a
/// credential has been verified against a booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PmsData {
    pub booking_data: Option<BookingData>,
    pub check_in_credential: Option<CheckInCredential>,
}
