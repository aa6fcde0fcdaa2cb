//! Browse Component
//!
//! Owns the row cursor and the text input of the interactive list, turns
//! key presses into list UI events and leaves everything else to the page.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use dashlist_engine::{ClickTarget, FilterBar, ListScreen, RowControl, UiEvent};
use dashlist_types::{FilterSet, QueryField, TabSelection};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, TableState},
};

use crate::presentation::view_models::BrowseStatusViewModel;
use crate::presentation::views::tui::{HeaderView, ListTableView, StatusBarView};

/// What the browser asks its renderer to do.
#[derive(Debug, Clone, PartialEq)]
pub enum BrowseAction<K: Ord> {
    Event(UiEvent<K>),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputKind {
    Search,
    TabName,
}

#[derive(Debug, Clone)]
struct Input {
    kind: InputKind,
    text: String,
}

pub struct BrowseComponent {
    table: TableState,
    input: Option<Input>,
}

impl BrowseComponent {
    pub fn new() -> Self {
        Self {
            table: TableState::default().with_selected(Some(0)),
            input: None,
        }
    }

    /// Row under the cursor.
    pub fn cursor(&self) -> usize {
        self.table.selected().unwrap_or(0)
    }

    pub fn is_editing(&self) -> bool {
        self.input.is_some()
    }

    pub fn handle_input<K: QueryField>(
        &mut self,
        key: KeyEvent,
        screen: &ListScreen,
    ) -> Option<BrowseAction<K>> {
        if self.input.is_some() {
            return self.handle_text_input(key);
        }

        let row_count = screen.rows().len();
        let cursor = self.cursor();
        let event = match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Some(BrowseAction::Quit),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Some(BrowseAction::Quit);
            }
            KeyCode::Char('j') | KeyCode::Down => {
                self.next(row_count);
                return None;
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.previous();
                return None;
            }
            KeyCode::Home => {
                self.table.select(Some(0));
                return None;
            }
            KeyCode::Enter => UiEvent::Click(ClickTarget::row(cursor)),
            KeyCode::Char('d') | KeyCode::Delete => {
                UiEvent::Click(ClickTarget::row_control(cursor, RowControl::Remove))
            }
            KeyCode::Char(' ') => {
                UiEvent::Click(ClickTarget::row_control(cursor, RowControl::Select))
            }
            KeyCode::Char('a') => UiEvent::Click(ClickTarget::SelectAll),
            KeyCode::Char('D') => UiEvent::Click(ClickTarget::BulkRemove),
            KeyCode::Char('c') => UiEvent::Click(ClickTarget::Create),
            KeyCode::Char('b') | KeyCode::Backspace => UiEvent::Click(ClickTarget::Back),
            KeyCode::Char('n') | KeyCode::Right => UiEvent::Click(ClickTarget::NextPage),
            KeyCode::Char('p') | KeyCode::Left => UiEvent::Click(ClickTarget::PreviousPage),
            KeyCode::Char(digit @ '1'..='9') => {
                let index = digit as usize - '1' as usize;
                UiEvent::Click(ClickTarget::ColumnHeader(index))
            }
            KeyCode::Char('r') => UiEvent::RowsPerPage(next_rows_per_page(screen)?),
            KeyCode::Char('t') => UiEvent::TabSelect(next_tab(screen.filter_bar.as_ref()?)),
            KeyCode::Char('x') => {
                let bar = screen.filter_bar.as_ref()?;
                let id = bar.current_tab()?.selection.saved_id()?;
                UiEvent::TabDelete(id)
            }
            KeyCode::Char('f') => UiEvent::FilterApply(next_filter(screen.filter_bar.as_ref()?)),
            KeyCode::Char('/') => {
                let search = screen
                    .filter_bar
                    .as_ref()
                    .map(|bar| bar.search.clone())
                    .unwrap_or_default();
                self.start_input(InputKind::Search, search);
                return None;
            }
            KeyCode::Char('S') => {
                screen.filter_bar.as_ref()?;
                self.start_input(InputKind::TabName, String::new());
                return None;
            }
            _ => return None,
        };

        Some(BrowseAction::Event(event))
    }

    fn handle_text_input<K: QueryField>(&mut self, key: KeyEvent) -> Option<BrowseAction<K>> {
        let input = self.input.as_mut()?;

        match key.code {
            KeyCode::Esc => {
                self.input = None;
                None
            }
            KeyCode::Enter => {
                let input = self.input.take()?;
                let event = match input.kind {
                    InputKind::Search => UiEvent::SearchInput(input.text),
                    InputKind::TabName => UiEvent::TabSave(input.text),
                };
                Some(BrowseAction::Event(event))
            }
            KeyCode::Backspace => {
                input.text.pop();
                None
            }
            KeyCode::Char(ch) => {
                input.text.push(ch);
                None
            }
            _ => None,
        }
    }

    pub fn render(
        &mut self,
        f: &mut Frame,
        area: Rect,
        screen: &ListScreen,
        status: &BrowseStatusViewModel,
    ) {
        // Keep the cursor inside the table when rows disappear.
        let row_count = screen.rows().len();
        match self.table.selected() {
            Some(selected) if row_count > 0 && selected >= row_count => {
                self.table.select(Some(row_count - 1));
            }
            None if row_count > 0 => self.table.select(Some(0)),
            _ => {}
        }

        let chunks = Layout::vertical([
            Constraint::Length(HeaderView::height(screen)),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(area);

        f.render_widget(HeaderView::new(screen), chunks[0]);

        let table = ListTableView::new(screen).build_table();
        f.render_stateful_widget(table, chunks[1], &mut self.table);

        match &self.input {
            Some(input) => {
                let title = match input.kind {
                    InputKind::Search => " Search (⏎ apply, Esc cancel) ",
                    InputKind::TabName => " Save tab as (⏎ save, Esc cancel) ",
                };
                let prompt = Paragraph::new(format!("{}_", input.text))
                    .style(Style::default().fg(Color::Cyan))
                    .block(Block::default().borders(Borders::ALL).title(title));
                f.render_widget(prompt, chunks[2]);
            }
            None => f.render_widget(StatusBarView::new(status), chunks[2]),
        }
    }

    fn start_input(&mut self, kind: InputKind, text: String) {
        self.input = Some(Input { kind, text });
    }

    fn next(&mut self, row_count: usize) {
        if row_count == 0 {
            return;
        }
        let next = match self.table.selected() {
            Some(i) if i + 1 < row_count => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.table.select(Some(next));
    }

    fn previous(&mut self) {
        let prev = self.table.selected().map_or(0, |i| i.saturating_sub(1));
        self.table.select(Some(prev));
    }
}

impl Default for BrowseComponent {
    fn default() -> Self {
        Self::new()
    }
}

/// Tab after the current one, wrapping to "All". Custom is never picked.
fn next_tab(bar: &FilterBar) -> TabSelection {
    let selectable: Vec<TabSelection> = bar
        .tabs
        .iter()
        .map(|tab| tab.selection)
        .filter(|selection| *selection != TabSelection::Custom)
        .collect();

    let current = bar
        .current_tab()
        .and_then(|tab| selectable.iter().position(|s| *s == tab.selection));

    match current {
        Some(index) => selectable
            .get(index + 1)
            .copied()
            .unwrap_or(TabSelection::All),
        None => selectable.first().copied().unwrap_or(TabSelection::All),
    }
}

/// Cycle the first filter field: none, each choice in turn, none again.
fn next_filter<K: QueryField>(bar: &FilterBar) -> FilterSet<K> {
    let mut filters = FilterSet::new();
    let Some(field) = bar.fields.first() else {
        return filters;
    };
    let Some(key) = K::parse(field.key) else {
        return filters;
    };

    let active = field.choices.iter().position(|choice| choice.active);
    let next = match active {
        Some(index) => field.choices.get(index + 1),
        None => field.choices.first(),
    };
    if let Some(choice) = next {
        filters.insert(key, choice.value.clone());
    }
    filters
}

fn next_rows_per_page(screen: &ListScreen) -> Option<u16> {
    let bar = screen.pagination.as_ref()?;
    let index = bar
        .choices
        .iter()
        .position(|rows| *rows == bar.rows_per_page)
        .map_or(0, |index| (index + 1) % bar.choices.len());
    bar.choices.get(index).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashlist_engine::{ListProps, StaffFilterKey, StaffList, StaffSortField, render_screen};
    use dashlist_types::{ListQueryState, StaffMember, Tab, TabId};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn staff_screen(query: ListQueryState<StaffSortField, StaffFilterKey>) -> ListScreen {
        let props = ListProps::<StaffList>::loaded(vec![
            StaffMember::new("1", "Ada", "Lovelace", "ada@example.com"),
            StaffMember::new("2", "Alan", "Turing", "alan@example.com"),
        ])
        .with_query(query)
        .with_tabs(vec![Tab::new(TabId::new(1), "Active")
            .with_filters(FilterSet::new().with(StaffFilterKey::Status, "active"))]);
        render_screen(&props)
    }

    #[test]
    fn test_delete_targets_row_under_cursor() {
        let screen = staff_screen(ListQueryState::new());
        let mut component = BrowseComponent::new();

        assert_eq!(component.handle_input::<StaffFilterKey>(key(KeyCode::Down), &screen), None);
        assert_eq!(
            component.handle_input::<StaffFilterKey>(key(KeyCode::Char('d')), &screen),
            Some(BrowseAction::Event(UiEvent::Click(ClickTarget::row_control(
                1,
                RowControl::Remove
            ))))
        );
    }

    #[test]
    fn test_search_prompt_submits_text() {
        let screen = staff_screen(ListQueryState::new());
        let mut component = BrowseComponent::new();

        component.handle_input::<StaffFilterKey>(key(KeyCode::Char('/')), &screen);
        assert!(component.is_editing());
        for ch in "ada".chars() {
            component.handle_input::<StaffFilterKey>(key(KeyCode::Char(ch)), &screen);
        }
        // 'q' is text while the prompt is open.
        component.handle_input::<StaffFilterKey>(key(KeyCode::Char('q')), &screen);
        component.handle_input::<StaffFilterKey>(key(KeyCode::Backspace), &screen);

        assert_eq!(
            component.handle_input::<StaffFilterKey>(key(KeyCode::Enter), &screen),
            Some(BrowseAction::Event(UiEvent::SearchInput("ada".to_string())))
        );
        assert!(!component.is_editing());
    }

    #[test]
    fn test_tab_key_cycles_saved_tabs() {
        let all = staff_screen(ListQueryState::new());
        let bar = all.filter_bar.as_ref().unwrap();
        assert_eq!(next_tab(bar), TabSelection::Saved(TabId::new(1)));

        let saved = staff_screen(ListQueryState::new().with_tab(TabSelection::Saved(TabId::new(1))));
        assert_eq!(next_tab(saved.filter_bar.as_ref().unwrap()), TabSelection::All);
    }

    #[test]
    fn test_filter_key_cycles_status() {
        let screen = staff_screen(ListQueryState::new());
        let filters = next_filter::<StaffFilterKey>(screen.filter_bar.as_ref().unwrap());
        assert!(filters.contains(StaffFilterKey::Status, "active"));

        let screen = staff_screen(
            ListQueryState::new()
                .with_filters(FilterSet::new().with(StaffFilterKey::Status, "deactivated")),
        );
        let filters = next_filter::<StaffFilterKey>(screen.filter_bar.as_ref().unwrap());
        assert!(filters.is_empty());
    }

    #[test]
    fn test_rows_per_page_wraps() {
        let screen = staff_screen(ListQueryState::new());
        assert_eq!(next_rows_per_page(&screen), Some(30));
    }
}
