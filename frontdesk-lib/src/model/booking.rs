//! Booking record DTO

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// A booking record retrieved from the property-management backend.
///
/// Address fields describe the guest's company address and are the
/// counterpart of the scanned credential's identity address during
/// comparison. All person and address fields are optional: bookings arrive
/// from upstream systems with varying completeness.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingData {
    pub id: Option<Uuid>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company_name: Option<String>,
    pub company_address_street: Option<String>,
    pub company_address_zip_code: Option<String>,
    pub company_address_city: Option<String>,
    pub arrival_date: Option<DateTime<Utc>>,
    pub departure_date: Option<DateTime<Utc>>,
}
