//! Concrete list pages.

mod channels;
mod menus;
mod staff;

pub use channels::ChannelsList;
pub use menus::{MenuSortField, MenusList};
pub use staff::{StaffFilterKey, StaffList, StaffSortField};
