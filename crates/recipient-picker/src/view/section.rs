//! Collapsible section header shared by both panels.

use iced::widget::{Space, button, row, text};
use iced::{Element, Length};

use crate::message::Message;
use crate::model::Section;
use crate::style::widgets::{palette, section_button_style};

/// Renders a full-width header that toggles `section` when pressed.
pub fn section_header(
    label: impl Into<String>,
    count: usize,
    open: bool,
    section: Section,
) -> Element<'static, Message> {
    let p = palette::current();
    let label: String = label.into();

    let chevron = if open { "\u{25BE}" } else { "\u{25B8}" };

    let content = row![
        text(chevron).size(12).color(p.text_secondary),
        text(label).size(14).color(p.text_primary),
        Space::new().width(Length::Fill),
        text(count.to_string()).size(12).color(p.text_muted),
    ]
    .spacing(8)
    .align_y(iced::Alignment::Center);

    button(content)
        .width(Length::Fill)
        .padding([8, 12])
        .style(section_button_style)
        .on_press(Message::ToggleSection(section))
        .into()
}

/// Renders one email address with an action button on the right.
pub fn email_row(
    email: &str,
    action_label: &'static str,
    style: fn(&iced::Theme, button::Status) -> button::Style,
    on_press: Message,
) -> Element<'static, Message> {
    let p = palette::current();

    row![
        text(email.to_string()).size(14).color(p.text_primary),
        Space::new().width(Length::Fill),
        button(text(action_label).size(13))
            .padding([4, 8])
            .style(style)
            .on_press(on_press),
    ]
    .spacing(8)
    .align_y(iced::Alignment::Center)
    .into()
}
