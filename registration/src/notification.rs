//! Toast notifications: one at a time, auto-dismissed after a fixed timeout.

use std::time::{Duration, Instant};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    pub deadline: Instant,
}

#[derive(Debug, Clone)]
pub struct NotificationCenter {
    current: Option<Notification>,
    timeout: Duration,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

impl NotificationCenter {
    pub fn new(timeout: Duration) -> Self {
        Self {
            current: None,
            timeout,
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    /// Shows `message`, replacing whatever is currently displayed.
    pub fn show(&mut self, message: impl Into<String>, severity: Severity) {
        self.show_at(message, severity, Instant::now());
    }

    pub fn show_at(&mut self, message: impl Into<String>, severity: Severity, now: Instant) {
        let message = message.into();
        log::debug!("Notification ({:?}): {}", severity, message);
        self.current = Some(Notification {
            message,
            severity,
            deadline: now + self.timeout,
        });
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Drops the notification once its deadline has passed. Returns true when
    /// one was removed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match &self.current {
            Some(n) if now >= n.deadline => {
                self.current = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expires_after_timeout() {
        let start = Instant::now();
        let mut center = NotificationCenter::new(Duration::from_secs(5));
        center.show_at("Saved", Severity::Success, start);

        assert!(!center.tick(start + Duration::from_secs(4)));
        assert!(center.is_visible());
        assert!(center.tick(start + Duration::from_secs(5)));
        assert!(!center.is_visible());
    }

    #[test]
    fn test_new_show_replaces_current() {
        let start = Instant::now();
        let mut center = NotificationCenter::default();
        center.show_at("first", Severity::Error, start);
        center.show_at("second", Severity::Success, start + Duration::from_secs(3));

        let current = center.current().unwrap();
        assert_eq!(current.message, "second");
        assert_eq!(current.severity, Severity::Success);
        assert_eq!(current.deadline, start + Duration::from_secs(3) + DEFAULT_TIMEOUT);

        // the replaced toast's deadline no longer applies
        assert!(!center.tick(start + DEFAULT_TIMEOUT));
    }

    #[test]
    fn test_dismiss() {
        let mut center = NotificationCenter::default();
        center.show("oops", Severity::Error);
        center.dismiss();
        assert!(center.current().is_none());
        assert!(!center.tick(Instant::now()));
    }
}
