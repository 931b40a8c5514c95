//! Booking data comparison flow.

use frontdesk_lib::compare::{compare_fields, ComparisonResult};
use frontdesk_lib::model::{BookingData, CheckInCredential, PmsData};
use frontdesk_lib::FrontdeskClient;

use crate::notify::{Notification, NotificationSender};

/// Verdict headline when every compared field matches.
const DATASETS_COMPLETE: &str = "Datasets complete";

/// Verdict headline when at least one field differs.
const DATASETS_DIFFERENT: &str = "Datasets are different";

/// Compares a scanned credential against its booking and forwards the
/// verified pair to the property-management system.
///
/// The comparison engine only reports per-field matches; turning the
/// overall verdict into a warning or a confirmation happens here.
pub struct ComparisonFlow {
    client: FrontdeskClient,
    notifications: NotificationSender,
}

impl ComparisonFlow {
    /// Creates a comparison flow.
    pub fn new(client: FrontdeskClient, notifications: NotificationSender) -> Self {
        Self {
            client,
            notifications,
        }
    }

    /// Runs the field comparison and announces the verdict.
    pub fn review(
        &self,
        credential: &CheckInCredential,
        booking: &BookingData,
    ) -> ComparisonResult {
        let result = compare_fields(credential, booking);

        let notification = if result.all_match() {
            Notification::success(DATASETS_COMPLETE)
        } else {
            Notification::warning(DATASETS_DIFFERENT)
        };
        self.notifications.notify(notification);

        result
    }

    /// Forwards the credential/booking pair to the PMS.
    ///
    /// Returns `true` on success; failures surface the generic error
    /// notification and leave resubmission to the user.
    pub async fn forward_to_pms(
        &self,
        credential: &CheckInCredential,
        booking: &BookingData,
    ) -> bool {
        let data = PmsData {
            booking_data: Some(booking.clone()),
            check_in_credential: Some(credential.clone()),
        };

        match self.client.send_to_pms(&data).await {
            Ok(()) => true,
            Err(err) => {
                log::error!("PMS forwarding failed: {err}");
                self.notifications.notify(Notification::request_failed());
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use frontdesk_lib::auth::{SessionToken, StaticTokenProvider};
    use frontdesk_lib::model::MasterId;
    use frontdesk_lib::FrontdeskClient;
    use uuid::Uuid;

    use super::*;
    use crate::notify::{self, NotificationKind};

    fn flow() -> (ComparisonFlow, tokio::sync::mpsc::Receiver<Notification>) {
        let client = FrontdeskClient::builder()
            .url("http://localhost:8090")
            .token_provider(StaticTokenProvider::new(SessionToken::new("jwt")))
            .build()
            .unwrap();
        let (sender, receiver) = notify::channel(4);
        (ComparisonFlow::new(client, sender), receiver)
    }

    fn credential() -> CheckInCredential {
        CheckInCredential {
            id: Uuid::new_v4(),
            scan_date: None,
            master_id: MasterId {
                first_name: Some("Anna".to_string()),
                family_name: Some("Muller".to_string()),
                address_street: Some("Bahnhofstr. 5".to_string()),
                ..MasterId::default()
            },
            corporate_id: None,
        }
    }

    fn booking() -> BookingData {
        BookingData {
            first_name: Some("anna".to_string()),
            last_name: Some("Muller".to_string()),
            company_address_street: Some("Bahnhofstra\u{df}e 5".to_string()),
            ..BookingData::default()
        }
    }

    #[test]
    fn test_matching_datasets_announce_completion() {
        let (flow, mut notifications) = flow();

        let result = flow.review(&credential(), &booking());

        assert!(result.all_match());
        let notification = notifications.try_recv().unwrap();
        assert_eq!(notification.kind, NotificationKind::Success);
        assert_eq!(notification.title, "Datasets complete");
    }

    #[test]
    fn test_differing_datasets_announce_a_warning() {
        let (flow, mut notifications) = flow();
        let mut booking = booking();
        booking.company_address_city = Some("Berlin".to_string());

        let result = flow.review(&credential(), &booking);

        assert!(!result.all_match());
        let notification = notifications.try_recv().unwrap();
        assert_eq!(notification.kind, NotificationKind::Warning);
        assert_eq!(notification.title, "Datasets are different");
    }
}
