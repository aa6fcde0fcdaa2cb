pub mod list;
pub mod tabs;
pub mod tui;

pub use list::{ListPageView, MinimalListView};
pub use tabs::TabListView;
