//! Message types for application events.
//!
//! In the Elm architecture, Messages are events that trigger state changes.

use recipient_picker_core::RecipientStore;

use crate::model::{AppSettings, Section};

/// Application messages (events).
#[derive(Debug, Clone)]
pub enum Message {
    // Startup
    /// Recipient store built from the seed file.
    StoreLoaded(Result<RecipientStore, String>),
    /// Settings loaded.
    SettingsLoaded(Result<AppSettings, String>),
    /// Settings saved.
    SettingsSaved(Result<(), String>),

    // Search
    /// Search input changed (filter only).
    SearchChanged(String),
    /// Search input submitted (filter, and add if new).
    SearchSubmitted,

    // Recipient moves
    /// Select every available email of a domain.
    SelectDomain(String),
    /// Select one available email.
    SelectEmail(String),
    /// Return a whole-domain selection to the available pool.
    RemoveDomain(String),
    /// Return one selected email to the available pool.
    RemoveEmail(String),

    // UI Events
    /// Expand or collapse a section.
    ToggleSection(Section),
    /// Toggle between light and dark theme.
    ToggleTheme,
    /// Notification timer fired.
    DismissNotification(u64),

    // Keyboard Events
    /// Keyboard shortcut pressed.
    KeyPressed(KeyboardAction),
    /// Key with no binding.
    KeyIgnored,
}

/// Keyboard actions that can be triggered by shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardAction {
    /// Clear the search filter (Escape).
    ClearSearch,
    /// Toggle theme (Ctrl+D).
    ToggleTheme,
}
