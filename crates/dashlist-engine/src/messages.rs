//! Messages shared by every list page.

use crate::translate::Message;

pub const CONFIGURATION: Message = Message::new("sectionNames.configuration", "Configuration");

pub const ACTIONS: Message = Message::new("list.column.actions", "Actions");

pub const DELETE: Message = Message::new("list.action.delete", "Delete");

pub const CUSTOM_FILTER: Message = Message::new("filterBar.customFilter", "Custom Filter");

pub const SELECTED_COUNT: Message = Message::new("list.bulk.selected", "{count} selected");

pub const DELETE_SELECTED: Message = Message::new("list.bulk.delete", "Delete selected");
