//! Rendered form of a list page.
//!
//! A `ListScreen` is a plain snapshot: every string is already translated
//! and every control already knows whether it is enabled. Renderers only
//! lay it out.

use dashlist_types::{EntityId, SortDirection, TabSelection};
use serde::Serialize;

use crate::events::RowControl;
use crate::variant::ColumnRole;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadState {
    Loading,
    Empty,
    Loaded,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionButton {
    pub label: String,
    pub test_id: &'static str,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabButton {
    pub selection: TabSelection,
    pub label: String,
    pub current: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterChoice {
    pub value: String,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterField {
    pub key: &'static str,
    pub label: String,
    pub choices: Vec<FilterChoice>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterBar {
    pub tabs: Vec<TabButton>,
    pub search_placeholder: String,
    pub search: String,
    pub fields: Vec<FilterField>,
    pub active_filter_count: usize,
}

impl FilterBar {
    pub fn current_tab(&self) -> Option<&TabButton> {
        self.tabs.iter().find(|tab| tab.current)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BulkToolbar {
    pub selected: usize,
    pub label: String,
    pub remove_label: String,
    pub remove_enabled: bool,
    pub all_selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnHeader {
    pub role: ColumnRole,
    pub label: String,
    pub sortable: bool,
    pub sort: Option<SortDirection>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowAction {
    pub control: RowControl,
    pub label: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Cell {
    Skeleton,
    Text { text: String },
    Checkbox { checked: bool, enabled: bool },
    Actions { actions: Vec<RowAction> },
    Span { colspan: usize, text: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowKind {
    Skeleton,
    Empty,
    Entity,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub kind: RowKind,
    pub id: Option<EntityId>,
    pub navigable: bool,
    pub selected: bool,
    pub cells: Vec<Cell>,
}

impl Row {
    pub(crate) fn skeleton(column_count: usize) -> Self {
        Self {
            kind: RowKind::Skeleton,
            id: None,
            navigable: false,
            selected: false,
            cells: vec![Cell::Skeleton; column_count],
        }
    }

    pub(crate) fn empty(column_count: usize, message: String) -> Self {
        Self {
            kind: RowKind::Empty,
            id: None,
            navigable: false,
            selected: false,
            cells: vec![Cell::Span {
                colspan: column_count,
                text: message,
            }],
        }
    }

    /// Row controls offered in the actions cell.
    pub fn actions(&self) -> &[RowAction] {
        self.cells
            .iter()
            .find_map(|cell| match cell {
                Cell::Actions { actions } => Some(actions.as_slice()),
                _ => None,
            })
            .unwrap_or(&[])
    }

    pub fn has_control(&self, control: RowControl) -> bool {
        self.actions().iter().any(|action| action.control == control)
    }

    /// Text of the data cells, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.cells
            .iter()
            .filter_map(|cell| match cell {
                Cell::Text { text } | Cell::Span { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub column_count: usize,
    pub columns: Vec<ColumnHeader>,
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationBar {
    pub has_next: bool,
    pub has_previous: bool,
    pub rows_per_page: u16,
    pub choices: Vec<u16>,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListScreen {
    pub list: &'static str,
    pub state: LoadState,
    pub disabled: bool,
    pub back: String,
    pub title: String,
    pub create: ActionButton,
    pub limit_text: Option<String>,
    pub limit_alert: Option<Notice>,
    pub error: Option<String>,
    pub filter_bar: Option<FilterBar>,
    pub bulk: Option<BulkToolbar>,
    pub table: Table,
    pub pagination: Option<PaginationBar>,
}

impl ListScreen {
    pub fn rows(&self) -> &[Row] {
        &self.table.rows
    }

    pub fn entity_rows(&self) -> impl Iterator<Item = &Row> {
        self.table
            .rows
            .iter()
            .filter(|row| row.kind == RowKind::Entity)
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }
}
