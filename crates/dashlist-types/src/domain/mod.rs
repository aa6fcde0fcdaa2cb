mod channel;
mod menu;
mod staff;

pub use channel::Channel;
pub use menu::{Menu, MenuItemRef};
pub use staff::StaffMember;
