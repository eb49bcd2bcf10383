//! Widget styles for the recipient panels.

#![allow(clippy::needless_update)] // Explicit struct updates for clarity

mod buttons;
mod containers;
mod inputs;
pub mod palette;
mod shadows;

pub use palette::ThemeMode;

pub use containers::{
    background_style, error_notification_style, header_style, panel_style, section_body_style,
    success_notification_style,
};

pub use buttons::{
    danger_button_style, danger_link_button_style, link_button_style, primary_button_style,
    secondary_button_style, section_button_style,
};

pub use inputs::{scrollable_style, search_input_style};
