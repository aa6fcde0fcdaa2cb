//! Ratatui widgets for the interactive browser.
//!
//! Views borrow the screen or a view model and only map it onto widgets.
//! Cursor and input state live in `components`.

pub mod components;
pub mod header;
pub mod status_bar;
pub mod table;

pub use header::HeaderView;
pub use status_bar::StatusBarView;
pub use table::ListTableView;

use crate::presentation::view_models::StatusLevel;
use ratatui::style::Color;

pub(crate) fn status_level_to_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Success => Color::Green,
        StatusLevel::Info => Color::Cyan,
        StatusLevel::Warning => Color::Yellow,
        StatusLevel::Error => Color::Red,
    }
}
