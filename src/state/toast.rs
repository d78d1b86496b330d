//! Toast notifications raised by schedule mutations.
//!
//! DESIGN
//! ======
//! Only the latest toast is shown. Each `show` bumps `seq` so a pending
//! auto-hide timer can tell whether its toast was replaced in the meantime.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

use crate::config::DEFAULT_TOAST_DURATION_MS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// A user-facing message with its display duration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub duration_ms: u32,
    pub show: bool,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Error)
    }

    fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self { message: message.into(), kind, duration_ms: DEFAULT_TOAST_DURATION_MS, show: true }
    }

    #[must_use]
    pub fn with_duration(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }
}

/// Sink for notifications raised by actions.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub current: Option<Notification>,
    pub seq: u64,
}

impl ToastState {
    /// Replace the visible toast and return its sequence number.
    pub fn show(&mut self, notification: Notification) -> u64 {
        self.seq += 1;
        self.current = Some(notification);
        self.seq
    }

    /// Hide the toast if it is still the one numbered `seq`.
    pub fn hide(&mut self, seq: u64) {
        if self.seq == seq {
            if let Some(current) = self.current.as_mut() {
                current.show = false;
            }
        }
    }

    pub fn visible(&self) -> Option<&Notification> {
        self.current.as_ref().filter(|n| n.show)
    }
}

/// Notifier that writes into the shared toast signal, applying the
/// configured display duration.
#[derive(Clone, Copy, Debug)]
pub struct ToastSink {
    pub toasts: RwSignal<ToastState>,
    pub duration_ms: u32,
}

impl Notifier for ToastSink {
    fn notify(&self, notification: Notification) {
        let notification = notification.with_duration(self.duration_ms);
        self.toasts.update(|t| {
            t.show(notification);
        });
    }
}
