pub mod browse;
pub mod common;
pub mod list;
pub mod result;
pub mod tabs;

use std::fmt;

use crate::types::ViewStyle;

pub use browse::BrowseStatusViewModel;
pub use common::{Guidance, StatusBadge, StatusLevel};
pub use list::{DispatchViewModel, IntentViewModel, ListPageViewModel};
pub use result::CommandResultViewModel;
pub use tabs::{TabEntryViewModel, TabListViewModel};

/// Bridge from a view model to its text view.
pub trait CreateView {
    fn create_view<'a>(&'a self, style: ViewStyle) -> Box<dyn fmt::Display + 'a>;
}
