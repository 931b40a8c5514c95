//! Login flow with lockout handling.

use std::sync::{Arc, Mutex, RwLock};

use chrono::{DateTime, Utc};
use frontdesk_lib::auth::{Credentials, LoginClient, SessionToken};
use frontdesk_lib::error::AuthError;
use tokio_util::sync::CancellationToken;

use crate::countdown::Countdown;
use crate::notify::{Notification, NotificationSender};
use crate::validation::{sanitize, ValidationResult, Validator};

/// Attempts granted after a lockout expires.
pub const MAX_LOGIN_ATTEMPTS: u32 = 3;

/// Headline of the per-tick lockout notification.
const LOCKOUT_TITLE: &str = "Login attempts exceeded. Please try again later.";

#[derive(Debug, Default, Clone, Copy)]
struct LoginState {
    /// End of the active lockout window, if any.
    blocked_until: Option<DateTime<Utc>>,
    /// Remaining attempts as last reported by the backend.
    remaining_attempts: Option<u32>,
}

/// Timers owned by an active lockout. Dropping the guard cancels both
/// the countdown tick and the deferred re-enable.
struct LockoutGuard {
    countdown: Countdown,
    cancel: CancellationToken,
}

impl Drop for LockoutGuard {
    fn drop(&mut self) {
        self.cancel.cancel();
        self.countdown.stop();
    }
}

/// Drives the login form: validation, authentication, the
/// remaining-attempts counter and the lockout countdown.
///
/// During a lockout the login action is disabled, the countdown
/// re-renders the remaining-time string once per second through the
/// notification channel, and a single deferred task re-enables login at
/// exactly the lockout duration. [`LoginSystem::shutdown`] (or dropping
/// the system) cancels both timers.
pub struct LoginSystem {
    login: LoginClient,
    notifications: NotificationSender,
    state: Arc<RwLock<LoginState>>,
    lockout: Mutex<Option<LockoutGuard>>,
}

impl LoginSystem {
    /// Creates a login system.
    pub fn new(login: LoginClient, notifications: NotificationSender) -> Self {
        Self {
            login,
            notifications,
            state: Arc::new(RwLock::new(LoginState::default())),
            lockout: Mutex::new(None),
        }
    }

    /// Validates the login form.
    ///
    /// Failures stay in the form; [`LoginSystem::login`] is only called
    /// once this returns valid.
    pub fn validate(username: &str, password: &str) -> ValidationResult {
        Validator::new()
            .field("username", username)
            .required("Username is required")
            .no_whitespace("Username must not contain whitespace")
            .field("password", password)
            .required("Password is required")
            .no_whitespace("Password must not contain whitespace")
            .validate()
    }

    /// Returns `true` while a lockout window is active.
    pub fn is_blocked(&self) -> bool {
        self.state
            .read()
            .map(|state| state.blocked_until.is_some_and(|until| until > Utc::now()))
            .unwrap_or(false)
    }

    /// Remaining attempts as last reported by the backend.
    pub fn remaining_attempts(&self) -> Option<u32> {
        self.state
            .read()
            .ok()
            .and_then(|state| state.remaining_attempts)
    }

    /// Attempts to log in with the given raw form values.
    ///
    /// Values are sanitized before submission. Credential rejections
    /// update the remaining-attempts counter; a lockout payload disables
    /// login and starts the countdown; anything else degrades to the
    /// generic error notification.
    pub async fn login(&self, username: &str, password: &str) -> Result<SessionToken, AuthError> {
        if let Some(until) = self.blocked_until()
            && until > Utc::now()
        {
            return Err(AuthError::LockedOut { until });
        }

        let credentials = Credentials {
            username: sanitize(username),
            password: sanitize(password),
        };

        match self.login.authenticate(&credentials).await {
            Ok(token) => {
                if let Ok(mut state) = self.state.write() {
                    *state = LoginState::default();
                }
                Ok(token)
            }
            Err(AuthError::AttemptsRemaining { remaining }) => {
                if let Ok(mut state) = self.state.write() {
                    state.remaining_attempts = Some(remaining);
                }
                Err(AuthError::AttemptsRemaining { remaining })
            }
            Err(AuthError::LockedOut { until }) => {
                self.block_until(until);
                Err(AuthError::LockedOut { until })
            }
            Err(err) => {
                log::error!("login failed: {err}");
                self.notifications.notify(Notification::request_failed());
                Err(err)
            }
        }
    }

    /// Cancels any lockout timers.
    pub fn shutdown(&self) {
        if let Ok(mut lockout) = self.lockout.lock() {
            lockout.take();
        }
    }

    fn blocked_until(&self) -> Option<DateTime<Utc>> {
        self.state.read().ok().and_then(|state| state.blocked_until)
    }

    /// Disables login until `until`, with a ticking notification and one
    /// deferred re-enable.
    fn block_until(&self, until: DateTime<Utc>) {
        if let Ok(mut state) = self.state.write() {
            state.blocked_until = Some(until);
            state.remaining_attempts = Some(0);
        }

        let countdown = Countdown::start(until);
        let cancel = CancellationToken::new();

        let tick_cancel = cancel.clone();
        let tick_notifications = self.notifications.clone();
        let mut ticks = countdown.subscribe();
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = tick_cancel.cancelled() => break,
                    changed = ticks.changed() => {
                        if changed.is_err() {
                            break;
                        }
                        let remaining = *ticks.borrow_and_update();
                        let Some(remaining) = remaining else { break };
                        tick_notifications.notify(
                            Notification::error(LOCKOUT_TITLE).with_caption(remaining.to_string()),
                        );
                    }
                }
            }
        });

        let unlock_cancel = cancel.clone();
        let unlock_state = Arc::clone(&self.state);
        let wait = (until - Utc::now()).to_std().unwrap_or_default();
        tokio::spawn(async move {
            tokio::select! {
                _ = unlock_cancel.cancelled() => {}
                _ = tokio::time::sleep(wait) => {
                    if let Ok(mut state) = unlock_state.write() {
                        state.blocked_until = None;
                        state.remaining_attempts = Some(MAX_LOGIN_ATTEMPTS);
                    }
                }
            }
        });

        // replacing the guard cancels any previous lockout's timers
        if let Ok(mut lockout) = self.lockout.lock() {
            *lockout = Some(LockoutGuard { countdown, cancel });
        }
    }
}

impl Drop for LoginSystem {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_plain_credentials() {
        assert!(LoginSystem::validate("reception", "hunter2!").is_valid());
    }

    #[test]
    fn test_validate_rejects_blank_and_whitespace() {
        let result = LoginSystem::validate("  ", "pass word");
        assert!(result.is_invalid());
        assert!(result.error_for("username").is_some());
        assert!(result.error_for("password").is_some());
    }
}
