use std::fmt;

use dashlist_engine::{Cell, FilterBar, ListScreen, PaginationBar, Propagation, Row};

use crate::presentation::formatters::{cell_text, header_text, pad_right};
use crate::presentation::view_models::{
    CreateView, DispatchViewModel, IntentViewModel, ListPageViewModel,
};
use crate::types::ViewStyle;

const COLUMN_GAP: &str = "  ";

impl CreateView for ListPageViewModel {
    fn create_view<'a>(&'a self, style: ViewStyle) -> Box<dyn fmt::Display + 'a> {
        match style {
            ViewStyle::Minimal => Box::new(MinimalListView::new(self)),
            ViewStyle::Standard => Box::new(ListPageView::new(self)),
        }
    }
}

// --------------------------------------------------------
// Minimal: one entity id per line
// --------------------------------------------------------

pub struct MinimalListView<'a> {
    data: &'a ListPageViewModel,
}

impl<'a> MinimalListView<'a> {
    pub fn new(data: &'a ListPageViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for MinimalListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.data.screen.entity_rows() {
            if let Some(id) = &row.id {
                writeln!(f, "{}", id)?;
            }
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Standard: header, notices, filter bar, table, pagination
// --------------------------------------------------------

pub struct ListPageView<'a> {
    data: &'a ListPageViewModel,
}

impl<'a> ListPageView<'a> {
    pub fn new(data: &'a ListPageViewModel) -> Self {
        Self { data }
    }

    fn fmt_header(&self, f: &mut fmt::Formatter, screen: &ListScreen) -> fmt::Result {
        writeln!(f, "< {}", screen.back)?;
        match &screen.limit_text {
            Some(counter) => writeln!(f, "{} ({})", screen.title, counter)?,
            None => writeln!(f, "{}", screen.title)?,
        }
        if screen.create.enabled {
            writeln!(f, "[{}]", screen.create.label)
        } else {
            writeln!(f, "[{}] disabled", screen.create.label)
        }
    }

    fn fmt_notices(&self, f: &mut fmt::Formatter, screen: &ListScreen) -> fmt::Result {
        if let Some(alert) = &screen.limit_alert {
            writeln!(f)?;
            writeln!(f, "! {}", alert.title)?;
            writeln!(f, "  {}", alert.body)?;
        }
        if let Some(error) = &screen.error {
            writeln!(f)?;
            writeln!(f, "! Error: {}", error)?;
        }
        Ok(())
    }

    fn fmt_filter_bar(&self, f: &mut fmt::Formatter, bar: &FilterBar) -> fmt::Result {
        writeln!(f)?;

        let tabs: Vec<String> = bar
            .tabs
            .iter()
            .map(|tab| {
                if tab.current {
                    format!("*{}*", tab.label)
                } else {
                    tab.label.clone()
                }
            })
            .collect();
        writeln!(f, "Tabs: {}", tabs.join(" | "))?;

        if bar.search.is_empty() {
            writeln!(f, "Search: ({})", bar.search_placeholder)?;
        } else {
            writeln!(f, "Search: \"{}\"", bar.search)?;
        }

        for field in &bar.fields {
            let choices: Vec<String> = field
                .choices
                .iter()
                .map(|choice| {
                    let mark = if choice.active { "x" } else { " " };
                    format!("[{}] {}", mark, choice.label)
                })
                .collect();
            writeln!(f, "{}: {}", field.label, choices.join("  "))?;
        }
        Ok(())
    }

    fn fmt_table(&self, f: &mut fmt::Formatter, screen: &ListScreen) -> fmt::Result {
        let table = &screen.table;
        let headers: Vec<String> = table.columns.iter().map(header_text).collect();

        let rows: Vec<TextRow> = table.rows.iter().map(TextRow::from_row).collect();

        let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
        for row in &rows {
            if let TextRow::Cells(cells) = row {
                for (width, cell) in widths.iter_mut().zip(cells) {
                    *width = (*width).max(cell.chars().count());
                }
            }
        }

        writeln!(f, "{}", join_padded(&headers, &widths))?;
        let total = widths.iter().sum::<usize>() + COLUMN_GAP.len() * widths.len().saturating_sub(1);
        writeln!(f, "{}", "-".repeat(total))?;

        for row in &rows {
            match row {
                TextRow::Span(text) => writeln!(f, "{}", text)?,
                TextRow::Cells(cells) => writeln!(f, "{}", join_padded(cells, &widths))?,
            }
        }
        Ok(())
    }

    fn fmt_pagination(&self, f: &mut fmt::Formatter, bar: &PaginationBar) -> fmt::Result {
        let control = |label: &str, available: bool| {
            if available && bar.enabled {
                format!("[{}]", label)
            } else {
                format!("({})", label)
            }
        };

        writeln!(f)?;
        writeln!(
            f,
            "Rows per page: {}  {} {}",
            bar.rows_per_page,
            control("< Previous", bar.has_previous),
            control("Next >", bar.has_next)
        )
    }

    fn fmt_dispatch(&self, f: &mut fmt::Formatter, dispatch: &DispatchViewModel) -> fmt::Result {
        writeln!(f)?;
        match dispatch.propagation {
            Propagation::Stopped => writeln!(f, "Event {} (propagation stopped)", dispatch.event)?,
            Propagation::Continue => writeln!(f, "Event {}", dispatch.event)?,
        }

        if dispatch.intents.is_empty() {
            writeln!(f, "  no intents")?;
        }
        for intent in &dispatch.intents {
            writeln!(f, "  -> {}", IntentLine(intent))?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for ListPageView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let screen = &self.data.screen;

        self.fmt_header(f, screen)?;
        self.fmt_notices(f, screen)?;

        if let Some(bar) = &screen.filter_bar {
            self.fmt_filter_bar(f, bar)?;
        }

        if let Some(bulk) = &screen.bulk {
            writeln!(f)?;
            let remove = if bulk.remove_enabled {
                format!("[{}]", bulk.remove_label)
            } else {
                format!("({})", bulk.remove_label)
            };
            writeln!(f, "{}  {}", bulk.label, remove)?;
        }

        writeln!(f)?;
        self.fmt_table(f, screen)?;

        if let Some(bar) = &screen.pagination {
            self.fmt_pagination(f, bar)?;
        }

        if let Some(dispatch) = &self.data.dispatch {
            self.fmt_dispatch(f, dispatch)?;
        }

        Ok(())
    }
}

enum TextRow {
    Cells(Vec<String>),
    /// Full-width message row.
    Span(String),
}

impl TextRow {
    fn from_row(row: &Row) -> Self {
        match row.cells.as_slice() {
            [Cell::Span { text, .. }] => TextRow::Span(text.clone()),
            cells => TextRow::Cells(cells.iter().map(cell_text).collect()),
        }
    }
}

fn join_padded(cells: &[String], widths: &[usize]) -> String {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| pad_right(cell, *width))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);
    line.trim_end().to_string()
}

struct IntentLine<'a>(&'a IntentViewModel);

impl<'a> fmt::Display for IntentLine<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let intent = self.0;
        write!(f, "{}", intent.intent)?;
        match &intent.value {
            serde_json::Value::Null => {}
            serde_json::Value::String(text) => write!(f, " {}", text)?,
            other => write!(f, " {}", other)?,
        }
        write!(f, ": {}", intent.outcome)
    }
}
