//! Container style functions with theme support.

use iced::widget::container;
use iced::{Background, Border};

use super::palette;
use super::shadows;
use super::shadows::radius;

/// Header bar style with bottom border.
pub fn header_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface)),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::NONE.into(),
        },
        shadow: shadows::none(),
        ..Default::default()
    }
}

/// Window background behind the two panels.
pub fn background_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.background)),
        ..Default::default()
    }
}

/// Recipient panel - bordered card.
pub fn panel_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface_elevated)),
        border: Border {
            color: p.border_medium,
            width: 1.0,
            radius: radius::MEDIUM.into(),
        },
        shadow: shadows::subtle(),
        ..Default::default()
    }
}

/// Body of an expanded section.
pub fn section_body_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface)),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::SMALL.into(),
        },
        ..Default::default()
    }
}

/// Error notification banner.
pub fn error_notification_style(_theme: &iced::Theme) -> container::Style {
    notification_style(palette::current().accent_red)
}

/// Success notification banner.
pub fn success_notification_style(_theme: &iced::Theme) -> container::Style {
    notification_style(palette::current().accent_green)
}

fn notification_style(accent: iced::Color) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface_elevated)),
        text_color: Some(accent),
        border: Border {
            color: accent,
            width: 1.0,
            radius: radius::MEDIUM.into(),
        },
        shadow: shadows::glow(accent),
        ..Default::default()
    }
}
