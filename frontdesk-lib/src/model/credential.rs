//! Scanned check-in credential DTOs

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// Identity fields extracted from the scanned master identity document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasterId {
    pub first_name: Option<String>,
    pub family_name: Option<String>,
    pub address_street: Option<String>,
    pub address_zip_code: Option<String>,
    pub address_city: Option<String>,
    pub date_of_birth: Option<String>,
    pub nationality: Option<String>,
}

/// Company fields extracted from a scanned corporate credential.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorporateId {
    pub company_name: Option<String>,
    pub company_address_street: Option<String>,
    pub company_address_zip_code: Option<String>,
    pub company_address_city: Option<String>,
}

/// A scanned identity credential waiting for check-in verification at a
/// desk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInCredential {
    pub id: Uuid,
    /// When the document was scanned at the desk.
    pub scan_date: Option<DateTime<Utc>>,
    pub master_id: MasterId,
    pub corporate_id: Option<CorporateId>,
}
