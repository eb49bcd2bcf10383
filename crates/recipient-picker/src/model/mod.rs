//! View-side models for the recipient picker.

mod notification;
mod panels;
mod settings;

pub use notification::{NOTIFICATION_TIMEOUT_SECS, Notification, NotificationKind, Notifier};
pub use panels::{PanelState, Section};
pub use settings::AppSettings;
