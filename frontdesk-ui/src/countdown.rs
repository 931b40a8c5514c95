//! Countdown to a target instant.
//!
//! Computes a human-readable remaining-time string and exposes a
//! once-per-second tick until expiry. Used to gate the login form during
//! an IP lockout.

use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Remaining time until a countdown target, split into display units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemainingTime {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl RemainingTime {
    fn from_duration(diff: chrono::Duration) -> Self {
        Self {
            hours: diff.num_hours() % 24,
            minutes: diff.num_minutes() % 60,
            seconds: diff.num_seconds() % 60,
        }
    }
}

impl std::fmt::Display for RemainingTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} h, {} min, {} sec",
            self.hours, self.minutes, self.seconds
        )
    }
}

/// Computes the time remaining from `now` until `end`.
///
/// Returns `None` once the target has passed; a remaining time is never
/// negative.
pub fn remaining_until(end: DateTime<Utc>, now: DateTime<Utc>) -> Option<RemainingTime> {
    let diff = end - now;
    if diff < chrono::Duration::zero() {
        return None;
    }
    Some(RemainingTime::from_duration(diff))
}

/// A ticking countdown towards a target instant.
///
/// One tick per second recomputes the remaining time and publishes it;
/// the tick that finds the target passed stops the task, so `None` is the
/// terminal value and no negative duration is ever published. The
/// countdown is a scoped resource: [`Countdown::stop`] or dropping the
/// handle cancels the tick task.
pub struct Countdown {
    remaining: watch::Sender<Option<RemainingTime>>,
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

impl Countdown {
    /// Starts a countdown towards `end`.
    ///
    /// A target already in the past stops on the first tick.
    pub fn start(end: DateTime<Utc>) -> Self {
        let (remaining, _) = watch::channel(remaining_until(end, Utc::now()));
        let cancel = CancellationToken::new();

        let tick_sender = remaining.clone();
        let tick_cancel = cancel.clone();
        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(1));
            loop {
                tokio::select! {
                    _ = tick_cancel.cancelled() => break,
                    _ = interval.tick() => {
                        match remaining_until(end, Utc::now()) {
                            Some(time) => {
                                tick_sender.send_replace(Some(time));
                            }
                            None => {
                                tick_sender.send_replace(None);
                                break;
                            }
                        }
                    }
                }
            }
        });

        Self {
            remaining,
            cancel,
            task,
        }
    }

    /// Subscribes to the published remaining time.
    pub fn subscribe(&self) -> watch::Receiver<Option<RemainingTime>> {
        self.remaining.subscribe()
    }

    /// The most recently published remaining time; `None` once expired.
    pub fn remaining(&self) -> Option<RemainingTime> {
        *self.remaining.borrow()
    }

    /// Returns `true` while the tick task is alive.
    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }

    /// Stops the countdown.
    pub fn stop(&self) {
        self.cancel.cancel();
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
