use dashlist_engine::{ColumnRole, ListScreen, RowKind};
use ratatui::{
    layout::Constraint,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
};

use crate::presentation::formatters::{cell_text, header_text};

pub struct ListTableView<'a> {
    screen: &'a ListScreen,
}

impl<'a> ListTableView<'a> {
    pub fn new(screen: &'a ListScreen) -> Self {
        Self { screen }
    }

    /// Table widget to render with the component's `TableState`.
    pub fn build_table(&self) -> Table<'a> {
        let table = &self.screen.table;

        let header = Row::new(
            table
                .columns
                .iter()
                .map(|column| Cell::from(header_text(column))),
        )
        .style(Style::default().add_modifier(Modifier::BOLD));

        let rows = table.rows.iter().map(|row| {
            let style = match row.kind {
                RowKind::Skeleton | RowKind::Empty => Style::default().fg(Color::DarkGray),
                RowKind::Entity if row.selected => Style::default().fg(Color::Cyan),
                RowKind::Entity => Style::default(),
            };
            Row::new(row.cells.iter().map(|cell| Cell::from(cell_text(cell)))).style(style)
        });

        let widths: Vec<Constraint> = table
            .columns
            .iter()
            .map(|column| match column.role {
                ColumnRole::Selection => Constraint::Length(3),
                ColumnRole::Data => Constraint::Fill(1),
                ColumnRole::Actions => Constraint::Length(10),
            })
            .collect();

        let title = match &self.screen.pagination {
            Some(bar) => format!(" {} rows per page ", bar.rows_per_page),
            None => String::new(),
        };

        Table::new(rows, widths)
            .header(header)
            .block(Block::default().borders(Borders::ALL).title(title))
            .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
    }
}
