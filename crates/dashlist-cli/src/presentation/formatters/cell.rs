//! Plain-text forms of table cells, shared by the console and TUI views.

use dashlist_engine::{Cell, ColumnHeader, RowAction};
use dashlist_types::SortDirection;

pub const SKELETON: &str = "...";

pub fn cell_text(cell: &Cell) -> String {
    match cell {
        Cell::Skeleton => SKELETON.to_string(),
        Cell::Text { text } | Cell::Span { text, .. } => text.clone(),
        Cell::Checkbox { checked: true, .. } => "[x]".to_string(),
        Cell::Checkbox { checked: false, .. } => "[ ]".to_string(),
        Cell::Actions { actions } => actions
            .iter()
            .map(action_text)
            .collect::<Vec<_>>()
            .join(" "),
    }
}

/// `[Delete]` when enabled, `(Delete)` when not.
pub fn action_text(action: &RowAction) -> String {
    if action.enabled {
        format!("[{}]", action.label)
    } else {
        format!("({})", action.label)
    }
}

/// Header label with the active sort arrow.
pub fn header_text(header: &ColumnHeader) -> String {
    match header.sort {
        Some(SortDirection::Asc) => format!("{} ↑", header.label),
        Some(SortDirection::Desc) => format!("{} ↓", header.label),
        None => header.label.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashlist_engine::{ColumnRole, RowControl};

    #[test]
    fn test_action_text() {
        let cell = Cell::Actions {
            actions: vec![RowAction {
                control: RowControl::Remove,
                label: "Delete".to_string(),
                enabled: false,
            }],
        };
        assert_eq!(cell_text(&cell), "(Delete)");
    }

    #[test]
    fn test_header_arrow() {
        let header = ColumnHeader {
            role: ColumnRole::Data,
            label: "Name".to_string(),
            sortable: true,
            sort: Some(SortDirection::Desc),
        };
        assert_eq!(header_text(&header), "Name ↓");
    }
}
