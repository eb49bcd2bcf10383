//! Recipient Picker - move email addresses between an available pool and a
//! selected set.
//!
//! Built with Rust and the iced GUI framework on top of `recipient-picker-core`.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod message;
mod model;
mod style;
mod view;

use std::time::Duration;

use iced::keyboard::{self, Key, Modifiers};
use iced::widget::{column, container, row, text};
use iced::{Element, Length, Subscription, Task};
use recipient_picker_core::{Error, RecipientStore, SearchOutcome, default_seed};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use message::{KeyboardAction, Message};
use model::{AppSettings, NOTIFICATION_TIMEOUT_SECS, NotificationKind, Notifier, PanelState};
use style::widgets::{ThemeMode, background_style, palette};

fn main() -> iced::Result {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "recipient_picker=debug,recipient_picker_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Recipient Picker");

    iced::application(
        RecipientPicker::new,
        RecipientPicker::update,
        RecipientPicker::view,
    )
    .title("Recipient Picker")
    .subscription(RecipientPicker::subscription)
    .run()
}

/// Main application state.
#[derive(Default)]
struct RecipientPicker {
    /// Available pool, selected set and search filter.
    store: RecipientStore,
    /// Which sections are expanded.
    panels: PanelState,
    /// Transient error/success messages.
    notifier: Notifier,
    /// Current theme mode (light/dark).
    theme_mode: ThemeMode,
    /// Whether the seed is still loading.
    is_loading: bool,
}

impl RecipientPicker {
    /// Create new application instance.
    fn new() -> (Self, Task<Message>) {
        let app = Self {
            is_loading: true,
            ..Self::default()
        };
        app.apply_theme();
        let settings_task = Task::perform(load_settings(), Message::SettingsLoaded);
        let store_task = Task::perform(load_store(), Message::StoreLoaded);
        (app, Task::batch([settings_task, store_task]))
    }

    /// Applies the current theme mode to the global palette.
    fn apply_theme(&self) {
        palette::set_theme(self.theme_mode);
    }

    /// Update state based on message.
    #[allow(clippy::needless_pass_by_value)]
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::StoreLoaded(result) => {
                self.is_loading = false;
                match result {
                    Ok(store) => self.store = store,
                    Err(e) => {
                        warn!("Failed to load recipients: {}", e);
                        self.store = RecipientStore::from_seed(&default_seed()).unwrap_or_default();
                        let id = self.notifier.show(
                            format!("Failed to load recipients: {e}"),
                            NotificationKind::Error,
                        );
                        return dismiss_after(id);
                    }
                }
            }
            Message::SettingsLoaded(result) => match result {
                Ok(settings) => {
                    self.theme_mode = settings.theme_mode;
                    self.apply_theme();
                }
                Err(e) => warn!("Failed to load settings: {}", e),
            },
            Message::SettingsSaved(result) => {
                if let Err(e) = result {
                    warn!("Failed to save settings: {}", e);
                }
            }
            Message::SearchChanged(query) => {
                self.store.set_filter(query);
            }
            Message::SearchSubmitted => {
                let term = self.store.filter().to_string();
                return match self.store.search(&term) {
                    Ok(SearchOutcome::Found) => Task::none(),
                    Ok(SearchOutcome::Added(recipient)) => {
                        info!("Added recipient {}", recipient);
                        let id = self
                            .notifier
                            .show(format!("Added {recipient}"), NotificationKind::Success);
                        dismiss_after(id)
                    }
                    Err(e) => self.notify_error(&e),
                };
            }
            Message::SelectDomain(domain) => {
                let result = self.store.select_domain(&domain);
                return self.report(result);
            }
            Message::SelectEmail(email) => {
                let result = self.store.select_email(&email);
                return self.report(result);
            }
            Message::RemoveDomain(domain) => {
                let result = self.store.remove_domain(&domain);
                return self.report(result);
            }
            Message::RemoveEmail(email) => {
                let result = self.store.remove_email(&email);
                return self.report(result);
            }
            Message::ToggleSection(section) => {
                self.panels.toggle(section);
            }
            Message::ToggleTheme => return self.toggle_theme(),
            Message::DismissNotification(id) => {
                self.notifier.dismiss(id);
            }
            Message::KeyPressed(action) => return self.handle_keyboard_action(action),
            Message::KeyIgnored => {}
        }
        Task::none()
    }

    /// Handle keyboard shortcut actions.
    fn handle_keyboard_action(&mut self, action: KeyboardAction) -> Task<Message> {
        match action {
            KeyboardAction::ClearSearch => {
                self.store.set_filter(String::new());
                Task::none()
            }
            KeyboardAction::ToggleTheme => self.toggle_theme(),
        }
    }

    /// Switches theme and persists the choice.
    fn toggle_theme(&mut self) -> Task<Message> {
        self.theme_mode = self.theme_mode.toggled();
        self.apply_theme();

        let settings = AppSettings {
            theme_mode: self.theme_mode,
        };
        Task::perform(save_settings(settings), Message::SettingsSaved)
    }

    /// Turns a failed store operation into a notification.
    fn report(&mut self, result: recipient_picker_core::Result<()>) -> Task<Message> {
        match result {
            Ok(()) => Task::none(),
            Err(e) => self.notify_error(&e),
        }
    }

    fn notify_error(&mut self, error: &Error) -> Task<Message> {
        let id = self.notifier.error(error);
        dismiss_after(id)
    }

    /// Render current state as UI.
    fn view(&self) -> Element<'_, Message> {
        let mut content = column![view::view_header(self.theme_mode)];

        if let Some(notification) = self.notifier.current() {
            content = content.push(
                container(view::view_notification(notification)).padding([10, 20]),
            );
        }

        let body: Element<'_, Message> = if self.is_loading {
            container(text("Loading recipients...").size(14))
                .padding(20)
                .into()
        } else {
            row![
                view::view_available_panel(&self.store, &self.panels),
                view::view_selected_panel(&self.store, &self.panels),
            ]
            .spacing(20)
            .padding(20)
            .height(Length::Fill)
            .into()
        };

        container(content.push(body))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(background_style)
            .into()
    }

    /// Subscribe to keyboard events for shortcuts.
    #[allow(clippy::unused_self)] // Required signature for iced subscription
    fn subscription(&self) -> Subscription<Message> {
        keyboard::listen().map(|event| {
            if let keyboard::Event::KeyPressed { key, modifiers, .. } = event {
                handle_key_press(&key, modifiers).unwrap_or(Message::KeyIgnored)
            } else {
                Message::KeyIgnored
            }
        })
    }
}

/// Handle keyboard shortcuts and return appropriate message.
fn handle_key_press(key: &Key, modifiers: Modifiers) -> Option<Message> {
    let ctrl = modifiers.command(); // Ctrl on Linux/Windows, Cmd on macOS

    match key {
        // Escape: clear search filter
        Key::Named(keyboard::key::Named::Escape) => {
            Some(Message::KeyPressed(KeyboardAction::ClearSearch))
        }
        // Ctrl+D: toggle theme
        Key::Character(c) if ctrl && c.as_str() == "d" => {
            Some(Message::KeyPressed(KeyboardAction::ToggleTheme))
        }
        _ => None,
    }
}

/// Schedules a notification to disappear.
fn dismiss_after(id: u64) -> Task<Message> {
    Task::perform(
        async move {
            tokio::time::sleep(Duration::from_secs(NOTIFICATION_TIMEOUT_SECS)).await;
            id
        },
        Message::DismissNotification,
    )
}

/// Build the recipient store from the seed file (or the built-in seed).
async fn load_store() -> Result<RecipientStore, String> {
    let path = recipient_picker_core::seed_path();
    let seed = recipient_picker_core::load_seed(&path)
        .await
        .map_err(|e| e.to_string())?;

    RecipientStore::from_seed(&seed).map_err(|e| e.to_string())
}

/// Directory holding the settings file.
fn config_dir() -> std::path::PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("recipient-picker")
}

/// Load application settings from file.
async fn load_settings() -> Result<AppSettings, String> {
    let settings_path = config_dir().join("settings.json");

    if !settings_path.exists() {
        return Ok(AppSettings::default());
    }

    let contents = tokio::fs::read_to_string(&settings_path)
        .await
        .map_err(|e| e.to_string())?;

    serde_json::from_str(&contents).map_err(|e| e.to_string())
}

/// Save application settings to file.
async fn save_settings(settings: AppSettings) -> Result<(), String> {
    let config_dir = config_dir();

    tokio::fs::create_dir_all(&config_dir)
        .await
        .map_err(|e| e.to_string())?;

    let settings_path = config_dir.join("settings.json");
    let contents = serde_json::to_string_pretty(&settings).map_err(|e| e.to_string())?;

    tokio::fs::write(&settings_path, contents)
        .await
        .map_err(|e| e.to_string())?;

    tracing::info!("Settings saved to {:?}", settings_path);
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::Section;

    fn loaded_app() -> RecipientPicker {
        RecipientPicker {
            store: RecipientStore::from_seed(&default_seed()).unwrap(),
            ..RecipientPicker::default()
        }
    }

    #[test]
    fn test_select_and_remove_email() {
        let mut app = loaded_app();
        let _ = app.update(Message::SelectEmail("jane@awesome.com".into()));
        assert_eq!(app.store.email_recipients(), ["jane@awesome.com"]);

        let _ = app.update(Message::RemoveEmail("jane@awesome.com".into()));
        assert!(app.store.email_recipients().is_empty());
        assert!(app.notifier.current().is_none());
    }

    #[test]
    fn test_search_submit_invalid_shows_error() {
        let mut app = loaded_app();
        let _ = app.update(Message::SearchChanged("ann".into()));
        let _ = app.update(Message::SearchSubmitted);

        let notification = app.notifier.current().unwrap();
        assert_eq!(notification.kind, NotificationKind::Error);
        assert_eq!(notification.text, "Invalid email format!");
        assert_eq!(app.store.filter(), "ann");
    }

    #[test]
    fn test_search_submit_adds_new_email() {
        let mut app = loaded_app();
        let _ = app.update(Message::SearchChanged("new@domain.com".into()));
        let _ = app.update(Message::SearchSubmitted);

        assert_eq!(app.store.available()["domain.com"], vec!["new@domain.com"]);
        assert_eq!(
            app.notifier.current().map(|n| n.kind),
            Some(NotificationKind::Success)
        );
    }

    #[test]
    fn test_rejected_move_shows_error() {
        let mut app = loaded_app();
        let _ = app.update(Message::RemoveDomain("awesome.com".into()));
        assert_eq!(
            app.notifier.current().map(|n| n.kind),
            Some(NotificationKind::Error)
        );
    }

    #[test]
    fn test_escape_clears_filter() {
        let mut app = loaded_app();
        let _ = app.update(Message::SearchChanged("qwerty".into()));
        let _ = app.update(Message::KeyPressed(KeyboardAction::ClearSearch));
        assert_eq!(app.store.filter(), "");
    }

    #[test]
    fn test_toggle_section() {
        let mut app = loaded_app();
        let section = Section::Available("qwerty.com".into());
        let _ = app.update(Message::ToggleSection(section.clone()));
        assert!(app.panels.is_open(&section));
    }

    #[test]
    fn test_key_bindings() {
        assert!(matches!(
            handle_key_press(
                &Key::Named(keyboard::key::Named::Escape),
                Modifiers::empty()
            ),
            Some(Message::KeyPressed(KeyboardAction::ClearSearch))
        ));
        assert!(handle_key_press(&Key::Character("x".into()), Modifiers::empty()).is_none());
    }
}
