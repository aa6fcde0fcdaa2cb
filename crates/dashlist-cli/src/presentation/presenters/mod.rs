pub mod browse;
pub mod list;
pub mod tabs;

pub use browse::present_browse_status;
pub use list::{present_dispatch, present_list_page};
pub use tabs::{present_tab_change, present_tab_list};
