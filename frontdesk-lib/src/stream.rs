//! Server-sent credential notifications
//!
//! The backend pushes a named event whenever a new check-in credential is
//! scanned at a desk. A subscription is a scoped resource: it owns the
//! reader task through a cancellation token, `close()` (or dropping the
//! subscription) tears the connection down, and switching desks means
//! closing the old subscription before opening the next one so no event
//! is ever delivered twice.

use futures::StreamExt;
use reqwest::Method;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::api::check_status;
use crate::error::ApiError;
use crate::error::Error;
use crate::FrontdeskClient;

/// Event name the backend uses for newly scanned credentials.
pub const NEW_CREDENTIAL_EVENT: &str = "NEW_CHECKIN_CREDENTIAL";

/// Notification delivered over a credential subscription.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialEvent {
    /// A new credential arrived at the subscribed desk; the caller should
    /// refetch its credential list.
    NewCredential,
    /// The stream failed. The subscription is finished; the caller
    /// surfaces a transient notification and may reopen on the next desk
    /// resolution.
    StreamError(String),
}

/// Handle to an open credential event stream.
pub struct CredentialSubscription {
    events: mpsc::Receiver<CredentialEvent>,
    cancel: CancellationToken,
}

impl CredentialSubscription {
    /// Waits for the next event.
    ///
    /// Returns `None` once the stream has ended (server closed the
    /// connection, an error was delivered, or the subscription was
    /// closed).
    pub async fn next_event(&mut self) -> Option<CredentialEvent> {
        self.events.recv().await
    }

    /// Closes the subscription, cancelling the reader task.
    pub fn close(&self) {
        self.cancel.cancel();
    }
}

impl Drop for CredentialSubscription {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

impl FrontdeskClient {
    /// Opens the credential event stream for a desk.
    ///
    /// The stream is keyed by hotel and desk; callers switching desks must
    /// close the previous subscription first.
    pub async fn subscribe_credentials(
        &self,
        hotel_id: &str,
        desk_id: &str,
    ) -> Result<CredentialSubscription, Error> {
        let path = format!(
            "/api/checkin-credentials/subscribe?hotelId={}&deskId={}",
            urlencoding::encode(hotel_id),
            urlencoding::encode(desk_id)
        );
        let response = self
            .request(Method::GET, &path)
            .await?
            .header("Accept", "text/event-stream")
            .send()
            .await
            .map_err(ApiError::from)?;
        let response = check_status(response).await?;

        let (tx, rx) = mpsc::channel(16);
        let cancel = CancellationToken::new();
        let reader_cancel = cancel.clone();

        tokio::spawn(async move {
            let mut body = response.bytes_stream();
            let mut parser = EventParser::default();

            loop {
                tokio::select! {
                    _ = reader_cancel.cancelled() => break,
                    chunk = body.next() => match chunk {
                        Some(Ok(bytes)) => {
                            for event in parser.push(&String::from_utf8_lossy(&bytes)) {
                                if event.announces_credential()
                                    && tx.send(CredentialEvent::NewCredential).await.is_err()
                                {
                                    return;
                                }
                            }
                        }
                        Some(Err(err)) => {
                            log::warn!("credential stream failed: {err}");
                            let _ = tx.send(CredentialEvent::StreamError(err.to_string())).await;
                            break;
                        }
                        None => break,
                    },
                }
            }
        });

        Ok(CredentialSubscription { events: rx, cancel })
    }
}

// =============================================================================
// Event-stream parsing
// =============================================================================

/// One dispatched server-sent event.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SseEvent {
    /// Value of the `event:` field, if the event was named.
    name: Option<String>,
    /// Concatenated `data:` lines.
    data: String,
}

impl SseEvent {
    /// Returns `true` if this event signals a newly scanned credential.
    ///
    /// Unnamed messages count too: the backend sends the arrival both as a
    /// default message and under [`NEW_CREDENTIAL_EVENT`].
    fn announces_credential(&self) -> bool {
        match self.name.as_deref() {
            None => true,
            Some(name) => name == NEW_CREDENTIAL_EVENT,
        }
    }
}

/// Incremental `text/event-stream` line parser.
///
/// Fed with arbitrary chunk boundaries; an event is dispatched at every
/// blank line, per the SSE framing rules. Comment lines (leading `:`) are
/// skipped.
#[derive(Debug, Default)]
struct EventParser {
    buffer: String,
    name: Option<String>,
    data: String,
}

impl EventParser {
    /// Consumes a chunk and returns the events completed by it.
    fn push(&mut self, chunk: &str) -> Vec<SseEvent> {
        self.buffer.push_str(chunk);

        let mut events = Vec::new();
        while let Some(newline) = self.buffer.find('\n') {
            let line: String = self.buffer.drain(..=newline).collect();
            if let Some(event) = self.take_line(line.trim_end_matches(['\n', '\r'])) {
                events.push(event);
            }
        }
        events
    }

    /// Processes one complete line; returns an event on blank-line
    /// dispatch.
    fn take_line(&mut self, line: &str) -> Option<SseEvent> {
        if line.is_empty() {
            if self.name.is_none() && self.data.is_empty() {
                return None;
            }
            return Some(SseEvent {
                name: self.name.take(),
                data: std::mem::take(&mut self.data),
            });
        }

        if line.starts_with(':') {
            return None;
        }

        let (field, value) = match line.split_once(':') {
            Some((field, value)) => (field, value.strip_prefix(' ').unwrap_or(value)),
            None => (line, ""),
        };

        match field {
            "event" => self.name = Some(value.to_string()),
            "data" => {
                if !self.data.is_empty() {
                    self.data.push('\n');
                }
                self.data.push_str(value);
            }
            _ => {}
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_event_dispatch() {
        let mut parser = EventParser::default();
        let events = parser.push("event: NEW_CHECKIN_CREDENTIAL\ndata: {}\n\n");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name.as_deref(), Some(NEW_CREDENTIAL_EVENT));
        assert!(events[0].announces_credential());
    }

    #[test]
    fn test_chunk_boundaries_inside_a_line() {
        let mut parser = EventParser::default();
        assert!(parser.push("event: NEW_CHECK").is_empty());
        assert!(parser.push("IN_CREDENTIAL\ndata: x\n").is_empty());
        let events = parser.push("\n");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].data, "x");
    }

    #[test]
    fn test_unnamed_message_announces_credential() {
        let mut parser = EventParser::default();
        let events = parser.push("data: ping\n\n");
        assert_eq!(events.len(), 1);
        assert!(events[0].name.is_none());
        assert!(events[0].announces_credential());
    }

    #[test]
    fn test_other_named_events_are_ignored_by_matcher() {
        let mut parser = EventParser::default();
        let events = parser.push("event: HEARTBEAT\ndata: {}\n\n");
        assert_eq!(events.len(), 1);
        assert!(!events[0].announces_credential());
    }

    #[test]
    fn test_comments_and_stray_blank_lines() {
        let mut parser = EventParser::default();
        assert!(parser.push(": keep-alive\n\n\n").is_empty());
    }

    #[test]
    fn test_multi_line_data() {
        let mut parser = EventParser::default();
        let events = parser.push("data: a\ndata: b\n\n");
        assert_eq!(events[0].data, "a\nb");
    }

    #[test]
    fn test_crlf_lines() {
        let mut parser = EventParser::default();
        let events = parser.push("event: NEW_CHECKIN_CREDENTIAL\r\n\r\n");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name.as_deref(), Some(NEW_CREDENTIAL_EVENT));
    }
}
