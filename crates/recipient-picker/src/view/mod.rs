//! View components for the application.

mod available;
mod header;
mod section;
mod selected;

pub use available::view_available_panel;
pub use header::{view_header, view_notification};
pub use selected::view_selected_panel;
