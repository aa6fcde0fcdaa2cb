//! Outbound notifications of a list page.
//!
//! Each intent is a fire-and-forget request to the caller. The page never
//! waits for, or checks, what the caller does with it.

use dashlist_types::{EntityId, FilterSet, Sort, SortDirection, TabId, TabSelection};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "intent", content = "value", rename_all = "snake_case")]
pub enum ListIntent<S, K: Ord> {
    Add,
    Back,
    /// Row navigation to the entity's detail view.
    Open(EntityId),
    Remove(EntityId),
    BulkRemove(Vec<EntityId>),
    ToggleSelection(EntityId),
    SetSelection(Vec<EntityId>),
    SortChange(Sort<S>),
    FilterChange(FilterSet<K>),
    SearchChange(String),
    TabChange(TabSelection),
    TabSave(String),
    TabDelete(TabId),
    /// Cursor to fetch the page after.
    NextPage(String),
    /// Cursor to fetch the page before.
    PreviousPage(String),
    RowsPerPage(u16),
}

impl<S: Copy, K: Ord + Copy> ListIntent<S, K> {
    /// Invoke the matching callback.
    pub fn deliver(&self, callbacks: &mut dyn ListCallbacks<S, K>) {
        match self {
            ListIntent::Add => callbacks.on_add(),
            ListIntent::Back => callbacks.on_back(),
            ListIntent::Open(id) => callbacks.on_open(id),
            ListIntent::Remove(id) => callbacks.on_remove(id),
            ListIntent::BulkRemove(ids) => callbacks.on_bulk_remove(ids),
            ListIntent::ToggleSelection(id) => callbacks.on_toggle_selection(id),
            ListIntent::SetSelection(ids) => callbacks.on_selection_change(ids),
            ListIntent::SortChange(sort) => callbacks.on_sort_change(sort.field, sort.direction),
            ListIntent::FilterChange(filters) => callbacks.on_filter_change(filters),
            ListIntent::SearchChange(query) => callbacks.on_search_change(query),
            ListIntent::TabChange(tab) => callbacks.on_tab_change(*tab),
            ListIntent::TabSave(name) => callbacks.on_tab_save(name),
            ListIntent::TabDelete(tab) => callbacks.on_tab_delete(*tab),
            ListIntent::NextPage(after) => callbacks.on_next_page(after),
            ListIntent::PreviousPage(before) => callbacks.on_previous_page(before),
            ListIntent::RowsPerPage(rows) => callbacks.on_rows_per_page_change(*rows),
        }
    }

    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            ListIntent::Add => "add",
            ListIntent::Back => "back",
            ListIntent::Open(_) => "open",
            ListIntent::Remove(_) => "remove",
            ListIntent::BulkRemove(_) => "bulk_remove",
            ListIntent::ToggleSelection(_) => "toggle_selection",
            ListIntent::SetSelection(_) => "set_selection",
            ListIntent::SortChange(_) => "sort_change",
            ListIntent::FilterChange(_) => "filter_change",
            ListIntent::SearchChange(_) => "search_change",
            ListIntent::TabChange(_) => "tab_change",
            ListIntent::TabSave(_) => "tab_save",
            ListIntent::TabDelete(_) => "tab_delete",
            ListIntent::NextPage(_) => "next_page",
            ListIntent::PreviousPage(_) => "previous_page",
            ListIntent::RowsPerPage(_) => "rows_per_page",
        }
    }
}

/// Callbacks a caller wires into a list page.
///
/// Every method defaults to a no-op, so a caller only implements what its
/// page uses and an unwired callback is never an error.
pub trait ListCallbacks<S, K: Ord> {
    fn on_add(&mut self) {}
    fn on_back(&mut self) {}
    fn on_open(&mut self, _id: &EntityId) {}
    fn on_remove(&mut self, _id: &EntityId) {}
    fn on_bulk_remove(&mut self, _ids: &[EntityId]) {}
    fn on_toggle_selection(&mut self, _id: &EntityId) {}
    fn on_selection_change(&mut self, _ids: &[EntityId]) {}
    fn on_sort_change(&mut self, _field: S, _direction: SortDirection) {}
    fn on_filter_change(&mut self, _filters: &FilterSet<K>) {}
    fn on_search_change(&mut self, _query: &str) {}
    fn on_tab_change(&mut self, _tab: TabSelection) {}
    fn on_tab_save(&mut self, _name: &str) {}
    fn on_tab_delete(&mut self, _tab: TabId) {}
    fn on_next_page(&mut self, _after: &str) {}
    fn on_previous_page(&mut self, _before: &str) {}
    fn on_rows_per_page_change(&mut self, _rows: u16) {}
}

/// Callback sink that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCallbacks;

impl<S, K: Ord> ListCallbacks<S, K> for NoCallbacks {}

/// Callback sink that records every notification as an intent.
pub type IntentLog<S, K> = Vec<ListIntent<S, K>>;

impl<S: Copy, K: Ord + Clone> ListCallbacks<S, K> for Vec<ListIntent<S, K>> {
    fn on_add(&mut self) {
        self.push(ListIntent::Add);
    }

    fn on_back(&mut self) {
        self.push(ListIntent::Back);
    }

    fn on_open(&mut self, id: &EntityId) {
        self.push(ListIntent::Open(id.clone()));
    }

    fn on_remove(&mut self, id: &EntityId) {
        self.push(ListIntent::Remove(id.clone()));
    }

    fn on_bulk_remove(&mut self, ids: &[EntityId]) {
        self.push(ListIntent::BulkRemove(ids.to_vec()));
    }

    fn on_toggle_selection(&mut self, id: &EntityId) {
        self.push(ListIntent::ToggleSelection(id.clone()));
    }

    fn on_selection_change(&mut self, ids: &[EntityId]) {
        self.push(ListIntent::SetSelection(ids.to_vec()));
    }

    fn on_sort_change(&mut self, field: S, direction: SortDirection) {
        self.push(ListIntent::SortChange(Sort::new(field, direction)));
    }

    fn on_filter_change(&mut self, filters: &FilterSet<K>) {
        self.push(ListIntent::FilterChange(filters.clone()));
    }

    fn on_search_change(&mut self, query: &str) {
        self.push(ListIntent::SearchChange(query.to_string()));
    }

    fn on_tab_change(&mut self, tab: TabSelection) {
        self.push(ListIntent::TabChange(tab));
    }

    fn on_tab_save(&mut self, name: &str) {
        self.push(ListIntent::TabSave(name.to_string()));
    }

    fn on_tab_delete(&mut self, tab: TabId) {
        self.push(ListIntent::TabDelete(tab));
    }

    fn on_next_page(&mut self, after: &str) {
        self.push(ListIntent::NextPage(after.to_string()));
    }

    fn on_previous_page(&mut self, before: &str) {
        self.push(ListIntent::PreviousPage(before.to_string()));
    }

    fn on_rows_per_page_change(&mut self, rows: u16) {
        self.push(ListIntent::RowsPerPage(rows));
    }
}
