// SPDX-License-Identifier: MPL-2.0
//! Notification seam.
//!
//! The session announces events (currently only a language change) through
//! an optional [`Notifier`]. When no notifier is installed the call is a
//! no-op, mirroring the original front-end's existence check on its
//! notification surface.

use std::time::Duration;

/// Visual severity of a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

/// How long a notification stays visible unless the caller says otherwise.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(5000);

/// Duration used for the language-changed confirmation toast.
pub const LANGUAGE_CHANGED_DURATION: Duration = Duration::from_millis(3000);

/// Receiver for transient user-facing messages.
pub trait Notifier {
    fn notify(&self, message: &str, severity: Severity, duration: Duration);
}
