//! Transient notifications.

use recipient_picker_core::Error;

/// How long a notification stays on screen.
pub const NOTIFICATION_TIMEOUT_SECS: u64 = 3;

/// Notification severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// An operation was rejected.
    Error,
    /// An operation succeeded and is worth confirming.
    Success,
}

/// A message shown briefly above the panels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Identifies the notification so a stale dismiss timer can be ignored.
    pub id: u64,
    /// Text to display.
    pub text: String,
    /// Severity.
    pub kind: NotificationKind,
}

/// Hands out notifications with increasing ids.
#[derive(Debug, Clone, Default)]
pub struct Notifier {
    next_id: u64,
    current: Option<Notification>,
}

impl Notifier {
    /// The notification currently showing, if any.
    #[must_use]
    pub const fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Shows a notification, replacing any current one. Returns its id.
    pub fn show(&mut self, text: impl Into<String>, kind: NotificationKind) -> u64 {
        self.next_id += 1;
        self.current = Some(Notification {
            id: self.next_id,
            text: text.into(),
            kind,
        });
        self.next_id
    }

    /// Shows a store error.
    pub fn error(&mut self, error: &Error) -> u64 {
        let text = match error {
            Error::InvalidFormat(_) => "Invalid email format!".to_string(),
            Error::DuplicateEmail(_) => "Email already exists!".to_string(),
            other => other.to_string(),
        };
        self.show(text, NotificationKind::Error)
    }

    /// Clears the notification if it is still the one with `id`.
    pub fn dismiss(&mut self, id: u64) {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_error_text() {
        let mut notifier = Notifier::default();
        notifier.error(&Error::InvalidFormat("x".into()));
        assert_eq!(
            notifier.current().map(|n| n.text.as_str()),
            Some("Invalid email format!")
        );

        notifier.error(&Error::DuplicateEmail("brian@qwerty.com".into()));
        assert_eq!(
            notifier.current().map(|n| n.text.as_str()),
            Some("Email already exists!")
        );
    }

    #[test]
    fn test_stale_dismiss_is_ignored() {
        let mut notifier = Notifier::default();
        let first = notifier.show("first", NotificationKind::Success);
        let second = notifier.show("second", NotificationKind::Error);

        notifier.dismiss(first);
        assert_eq!(notifier.current().map(|n| n.id), Some(second));

        notifier.dismiss(second);
        assert!(notifier.current().is_none());
    }
}
