//! Header bar and notification banner.

use iced::widget::{Space, button, container, row, text};
use iced::{Element, Length};

use crate::message::Message;
use crate::model::{Notification, NotificationKind};
use crate::style::widgets::{
    ThemeMode, error_notification_style, header_style, palette, secondary_button_style,
    success_notification_style,
};

/// Renders the application header.
pub fn view_header(theme_mode: ThemeMode) -> Element<'static, Message> {
    let title = text("Recipient Picker")
        .size(22)
        .font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..Default::default()
        })
        .style(|_theme| {
            let p = palette::current();
            text::Style {
                color: Some(p.primary),
            }
        });

    // Shows the mode the button switches to
    let theme_icon = match theme_mode {
        ThemeMode::Light => "\u{263E}",
        ThemeMode::Dark => "\u{2600}",
    };

    let theme_btn = button(text(theme_icon).size(18).style(|_theme| {
        let p = palette::current();
        text::Style {
            color: Some(p.text_secondary),
        }
    }))
    .padding([8, 12])
    .style(secondary_button_style)
    .on_press(Message::ToggleTheme);

    let content = row![title, Space::new().width(Length::Fill), theme_btn]
        .align_y(iced::Alignment::Center)
        .padding([10, 20]);

    container(content)
        .width(Length::Fill)
        .style(header_style)
        .into()
}

/// Renders a notification banner with a dismiss button.
pub fn view_notification(notification: &Notification) -> Element<'static, Message> {
    let style = match notification.kind {
        NotificationKind::Error => error_notification_style,
        NotificationKind::Success => success_notification_style,
    };

    container(
        row![
            text(notification.text.clone()).size(14),
            Space::new().width(Length::Fill),
            button(text("\u{2715}").size(12))
                .padding([2, 8])
                .style(secondary_button_style)
                .on_press(Message::DismissNotification(notification.id)),
        ]
        .align_y(iced::Alignment::Center),
    )
    .width(Length::Fill)
    .padding([10, 16])
    .style(style)
    .into()
}
