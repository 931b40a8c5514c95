//! Notification model and global channel.
//!
//! Everything that is not a field-level form error surfaces here: generic
//! request failures, transient stream errors, the lockout ticker and the
//! dataset-comparison verdicts. The channel is bounded; when the embedder
//! stops draining it, further notifications are dropped rather than
//! blocking a handler.

use std::time::Duration;

use tokio::sync::mpsc;

/// Default duration a notification stays on screen.
pub const DEFAULT_NOTIFICATION_DURATION: Duration = Duration::from_secs(4);

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

/// A user-visible notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Severity, driving the toast styling.
    pub kind: NotificationKind,
    /// Headline.
    pub title: String,
    /// Optional detail line under the headline.
    pub caption: Option<String>,
    /// How long to show the notification.
    pub duration: Duration,
}

impl Notification {
    fn new(kind: NotificationKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            caption: None,
            duration: DEFAULT_NOTIFICATION_DURATION,
        }
    }

    /// Creates an info notification.
    pub fn info(title: impl Into<String>) -> Self {
        Self::new(NotificationKind::Info, title)
    }

    /// Creates a success notification.
    pub fn success(title: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, title)
    }

    /// Creates a warning notification.
    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(NotificationKind::Warning, title)
    }

    /// Creates an error notification.
    pub fn error(title: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, title)
    }

    /// Creates the generic error notification shown for request failures
    /// that have no more specific handling. The user resubmits; nothing
    /// retries automatically.
    pub fn request_failed() -> Self {
        Self::error("An error has occurred. Please try again.")
    }

    /// Sets the detail line.
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Sets a custom duration.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

/// Sender half of the notification channel.
#[derive(Clone)]
pub struct NotificationSender {
    tx: mpsc::Sender<Notification>,
}

impl NotificationSender {
    /// Publishes a notification.
    ///
    /// Non-blocking; a full channel drops the notification.
    pub fn notify(&self, notification: Notification) {
        let _ = self.tx.try_send(notification);
    }
}

/// Creates the global notification channel pair.
pub fn channel(capacity: usize) -> (NotificationSender, mpsc::Receiver<Notification>) {
    let (tx, rx) = mpsc::channel(capacity);
    (NotificationSender { tx }, rx)
}
