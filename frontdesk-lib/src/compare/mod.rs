//! Credential/booking comparison engine
//!
//! Field-by-field fuzzy matching between a scanned identity credential and
//! a retrieved booking record. The result decides whether the credential
//! is eligible for automated forwarding; what to tell the user about a
//! mismatch is the caller's business, not this module's.

mod street;

pub use street::sanitize_for_comparison;

use crate::model::BookingData;
use crate::model::CheckInCredential;

/// Outcome of comparing a credential against a booking, one flag per
/// compared field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonResult {
    pub first_name_matches: bool,
    pub last_name_matches: bool,
    pub street_matches: bool,
    pub zip_code_matches: bool,
    pub city_matches: bool,
}

impl ComparisonResult {
    /// Returns `true` when every compared field matches, i.e. the
    /// credential is eligible for automated forwarding.
    pub fn all_match(&self) -> bool {
        self.first_name_matches
            && self.last_name_matches
            && self.street_matches
            && self.zip_code_matches
            && self.city_matches
    }
}

/// Compares the identity fields of a scanned credential against a booking
/// record.
///
/// Names, postal code and city compare case-folded; streets are
/// canonicalized through [`sanitize_for_comparison`] first, so spelling
/// and abbreviation variants of the same address match. A field absent on
/// *both* sides counts as matching; absent on one side only does not.
pub fn compare_fields(credential: &CheckInCredential, booking: &BookingData) -> ComparisonResult {
    let identity = &credential.master_id;

    ComparisonResult {
        first_name_matches: eq_ignore_case(
            booking.first_name.as_deref(),
            identity.first_name.as_deref(),
        ),
        last_name_matches: eq_ignore_case(
            booking.last_name.as_deref(),
            identity.family_name.as_deref(),
        ),
        street_matches: sanitize_for_comparison(booking.company_address_street.as_deref())
            == sanitize_for_comparison(identity.address_street.as_deref()),
        zip_code_matches: eq_ignore_case(
            booking.company_address_zip_code.as_deref(),
            identity.address_zip_code.as_deref(),
        ),
        city_matches: eq_ignore_case(
            booking.company_address_city.as_deref(),
            identity.address_city.as_deref(),
        ),
    }
}

fn eq_ignore_case(a: Option<&str>, b: Option<&str>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.to_lowercase() == b.to_lowercase(),
        (None, None) => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::model::MasterId;

    fn credential(first: &str, family: &str, street: &str) -> CheckInCredential {
        CheckInCredential {
            id: Uuid::new_v4(),
            scan_date: None,
            master_id: MasterId {
                first_name: Some(first.to_string()),
                family_name: Some(family.to_string()),
                address_street: Some(street.to_string()),
                address_zip_code: Some("10115".to_string()),
                address_city: Some("Berlin".to_string()),
                ..MasterId::default()
            },
            corporate_id: None,
        }
    }

    fn booking(first: &str, last: &str, street: &str) -> BookingData {
        BookingData {
            first_name: Some(first.to_string()),
            last_name: Some(last.to_string()),
            company_address_street: Some(street.to_string()),
            company_address_zip_code: Some("10115".to_string()),
            company_address_city: Some("berlin".to_string()),
            ..BookingData::default()
        }
    }

    #[test]
    fn test_full_match_across_case_and_street_spelling() {
        let credential = credential("Anna", "Muller", "Bahnhofstr. 5");
        let booking = booking("anna", "Muller", "Bahnhofstraße 5");

        let result = compare_fields(&credential, &booking);
        assert!(result.first_name_matches);
        assert!(result.last_name_matches);
        assert!(result.street_matches);
        assert!(result.zip_code_matches);
        assert!(result.city_matches);
        assert!(result.all_match());
    }

    #[test]
    fn test_single_field_mismatch_blocks_forwarding() {
        let credential = credential("Anna", "Muller", "Bahnhofstr. 5");
        let booking = booking("Anna", "Meier", "Bahnhofstr. 5");

        let result = compare_fields(&credential, &booking);
        assert!(!result.last_name_matches);
        assert!(result.first_name_matches);
        assert!(!result.all_match());
    }

    #[test]
    fn test_field_absent_on_both_sides_matches() {
        let mut credential = credential("Anna", "Muller", "Bahnhofstr. 5");
        let mut booking = booking("Anna", "Muller", "Bahnhofstr. 5");
        credential.master_id.address_city = None;
        booking.company_address_city = None;

        assert!(compare_fields(&credential, &booking).city_matches);
    }

    #[test]
    fn test_field_absent_on_one_side_does_not_match() {
        let mut credential = credential("Anna", "Muller", "Bahnhofstr. 5");
        let booking = booking("Anna", "Muller", "Bahnhofstr. 5");
        credential.master_id.address_street = None;

        let result = compare_fields(&credential, &booking);
        assert!(!result.street_matches);
        assert!(!result.all_match());
    }
}
