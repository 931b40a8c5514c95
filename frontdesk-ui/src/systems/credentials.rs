//! Credential overview for the selected desk.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use frontdesk_lib::model::{CheckInCredential, Desk};
use frontdesk_lib::stream::{CredentialEvent, CredentialSubscription};
use frontdesk_lib::FrontdeskClient;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::notify::{Notification, NotificationSender};
use crate::table::{Column, Entry, Row, SelectionMode, SortValue, TableDataset};

/// Column layout of the overview table: the credential id rides along
/// hidden in the first column.
const ID_COLUMN: usize = 0;

/// Drives the credential list for whatever desk is currently selected.
///
/// Listens to the desk registry: every resolution refetches the
/// credential list and replaces the push subscription, closing the old
/// one first so a desk switch can never deliver duplicate events. A push
/// event triggers a refetch; a stream error surfaces as a transient
/// notification and the subscription stays down until the next desk
/// resolution.
pub struct CredentialOverview {
    client: FrontdeskClient,
    hotel_id: String,
    table: TableDataset,
    notifications: NotificationSender,
    loading: Arc<AtomicBool>,
    cancel: CancellationToken,
}

impl CredentialOverview {
    /// Creates an overview for the given hotel.
    pub fn new(
        client: FrontdeskClient,
        hotel_id: impl Into<String>,
        notifications: NotificationSender,
    ) -> Self {
        let table = TableDataset::new(vec![
            Column::hidden("Id"),
            Column::new("First name"),
            Column::new("Last name"),
            Column::new("Company"),
            Column::new("Scan date"),
            Column::new("Scan time"),
        ])
        .with_selection_mode(SelectionMode::Single);

        Self {
            client,
            hotel_id: hotel_id.into(),
            table,
            notifications,
            loading: Arc::new(AtomicBool::new(false)),
            cancel: CancellationToken::new(),
        }
    }

    /// The table backing the overview grid.
    pub fn table(&self) -> &TableDataset {
        &self.table
    }

    /// Returns `true` while a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// The id of the selected credential, if a row is selected.
    pub fn selected_credential_id(&self) -> Option<Uuid> {
        let index = *self.table.selected_rows().first()?;
        let row = self.table.row_at(index)?;
        row.get(ID_COLUMN)?.value().parse().ok()
    }

    /// Runs the overview until shut down.
    ///
    /// `desks` is the desk registry subscription; the loop owns at most
    /// one push subscription at a time.
    pub async fn run(&self, mut desks: watch::Receiver<Option<Desk>>) {
        let mut subscription: Option<CredentialSubscription> = None;
        let mut current_desk: Option<String> = None;

        loop {
            tokio::select! {
                _ = self.cancel.cancelled() => break,
                changed = desks.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let desk = desks.borrow_and_update().clone();

                    // close before reopening; duplicate delivery is worse
                    // than a short gap
                    if let Some(old) = subscription.take() {
                        old.close();
                    }

                    match desk {
                        Some(desk) => {
                            self.refresh(&desk.id).await;
                            subscription = self.open_subscription(&desk.id).await;
                            current_desk = Some(desk.id);
                        }
                        None => {
                            self.table.clear();
                            current_desk = None;
                        }
                    }
                }
                event = next_event(&mut subscription) => {
                    match event {
                        Some(CredentialEvent::NewCredential) => {
                            if let Some(desk_id) = &current_desk {
                                self.refresh(desk_id).await;
                            }
                        }
                        Some(CredentialEvent::StreamError(message)) => {
                            log::warn!("credential stream error: {message}");
                            self.notifications.notify(Notification::request_failed());
                            subscription = None;
                        }
                        None => subscription = None,
                    }
                }
            }
        }

        if let Some(subscription) = subscription.take() {
            subscription.close();
        }
    }

    /// Shuts the overview down, closing the push subscription.
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }

    /// Refetches the credential list and rebuilds the table.
    async fn refresh(&self, desk_id: &str) {
        self.loading.store(true, Ordering::SeqCst);
        match self.client.credentials_for_desk(desk_id).await {
            Ok(credentials) => self.table.set_rows(build_rows(&credentials)),
            Err(err) => {
                log::error!("credential fetch failed: {err}");
                self.notifications.notify(Notification::request_failed());
            }
        }
        self.loading.store(false, Ordering::SeqCst);
    }

    async fn open_subscription(&self, desk_id: &str) -> Option<CredentialSubscription> {
        match self
            .client
            .subscribe_credentials(&self.hotel_id, desk_id)
            .await
        {
            Ok(subscription) => Some(subscription),
            Err(err) => {
                log::warn!("credential subscription failed: {err}");
                self.notifications.notify(Notification::request_failed());
                None
            }
        }
    }
}

impl Drop for CredentialOverview {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Waits on the active subscription, or forever when there is none.
async fn next_event(
    subscription: &mut Option<CredentialSubscription>,
) -> Option<CredentialEvent> {
    match subscription {
        Some(subscription) => subscription.next_event().await,
        None => std::future::pending().await,
    }
}

/// Builds table rows from a credential list.
///
/// The date and time columns display formatted text but carry the scan
/// timestamp as their sort key, so they sort chronologically instead of
/// lexically.
fn build_rows(credentials: &[CheckInCredential]) -> Vec<Row> {
    credentials
        .iter()
        .map(|credential| {
            let identity = &credential.master_id;
            let company = credential
                .corporate_id
                .as_ref()
                .and_then(|corporate| corporate.company_name.clone())
                .unwrap_or_default();

            vec![
                Entry::text(credential.id.to_string()),
                Entry::text(identity.first_name.clone().unwrap_or_default()),
                Entry::text(identity.family_name.clone().unwrap_or_default()),
                Entry::text(company),
                scan_stamp_entry(credential.scan_date, "%Y-%m-%d"),
                scan_stamp_entry(credential.scan_date, "%H:%M"),
            ]
        })
        .collect()
}

fn scan_stamp_entry(scan_date: Option<DateTime<Utc>>, format: &str) -> Entry {
    match scan_date {
        Some(stamp) => Entry::with_sort_value(
            stamp.format(format).to_string(),
            SortValue::Timestamp(stamp),
        ),
        None => Entry::text(""),
    }
}

#[cfg(test)]
mod tests {
    use frontdesk_lib::model::MasterId;

    use super::*;

    #[test]
    fn test_rows_carry_timestamp_sort_keys() {
        let scan = "2026-08-07T09:30:00Z".parse().unwrap();
        let credentials = vec![CheckInCredential {
            id: Uuid::new_v4(),
            scan_date: Some(scan),
            master_id: MasterId {
                first_name: Some("Anna".to_string()),
                family_name: Some("Muller".to_string()),
                ..MasterId::default()
            },
            corporate_id: None,
        }];

        let rows = build_rows(&credentials);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][1].value(), "Anna");
        assert_eq!(rows[0][4].value(), "2026-08-07");
        assert_eq!(rows[0][5].value(), "09:30");
        assert_eq!(rows[0][4].sort_value(), SortValue::Timestamp(scan));
    }
}
