//! Caller-side reducer for list intents.
//!
//! Callers that keep their query state in memory can feed every intent
//! through `ListState` instead of re-deriving tab and pagination rules.

use dashlist_types::{
    EntityId, FilterSet, ListQueryState, Sort, SortDirection, Tab, TabId, TabSelection,
};

use tracing::warn;

use crate::intent::{ListCallbacks, ListIntent};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState<S, K: Ord> {
    pub query: ListQueryState<S, K>,
    pub tabs: Vec<Tab<K>>,
    pub selected: Vec<EntityId>,
}

impl<S, K: Ord> Default for ListState<S, K> {
    fn default() -> Self {
        Self {
            query: ListQueryState::default(),
            tabs: Vec::new(),
            selected: Vec::new(),
        }
    }
}

impl<S: Copy + PartialEq, K: Ord + Copy> ListState<S, K> {
    pub fn new(query: ListQueryState<S, K>, tabs: Vec<Tab<K>>) -> Self {
        Self {
            query,
            tabs,
            selected: Vec::new(),
        }
    }

    /// Apply one intent. Returns false for intents that leave the state
    /// untouched (navigation, creation).
    pub fn apply(&mut self, intent: &ListIntent<S, K>) -> bool {
        let before = self.clone();
        intent.deliver(self);
        *self != before
    }

    pub fn tab(&self, id: TabId) -> Option<&Tab<K>> {
        self.tabs.iter().find(|tab| tab.id == id)
    }

    /// Id a newly saved tab would get, `None` once ids are exhausted.
    pub fn next_tab_id(&self) -> Option<TabId> {
        match self.tabs.iter().map(|tab| tab.id).max() {
            Some(max) => max.next(),
            None => Some(TabId::new(1)),
        }
    }

    /// Whether saving under `name` can succeed: it replaces a tab with the
    /// same label or there is an id left for a new one.
    pub fn can_save_tab(&self, name: &str) -> bool {
        let name = name.trim();
        !name.is_empty()
            && (self.tabs.iter().any(|tab| tab.label == name) || self.next_tab_id().is_some())
    }

    /// Re-derive the current tab after filters or search changed.
    fn refresh_tab(&mut self) {
        if !self.query.is_filtered() {
            self.query.tab = TabSelection::All;
            return;
        }

        let filters = &self.query.filters;
        let search = self.query.search.as_str();

        if let Some(current) = self.query.tab.saved_id().and_then(|id| self.tab(id))
            && current.matches(filters, search)
        {
            return;
        }

        self.query.tab = self
            .tabs
            .iter()
            .find(|tab| tab.matches(filters, search))
            .map_or(TabSelection::Custom, |tab| TabSelection::Saved(tab.id));
    }
}

impl<S: Copy + PartialEq, K: Ord + Copy> ListCallbacks<S, K> for ListState<S, K> {
    fn on_remove(&mut self, id: &EntityId) {
        self.selected.retain(|selected| selected != id);
    }

    fn on_bulk_remove(&mut self, _ids: &[EntityId]) {
        self.selected.clear();
    }

    fn on_toggle_selection(&mut self, id: &EntityId) {
        if let Some(pos) = self.selected.iter().position(|selected| selected == id) {
            self.selected.remove(pos);
        } else {
            self.selected.push(id.clone());
        }
    }

    fn on_selection_change(&mut self, ids: &[EntityId]) {
        self.selected = ids.to_vec();
    }

    fn on_sort_change(&mut self, field: S, direction: SortDirection) {
        self.query.sort = Some(Sort::new(field, direction));
        self.query.pagination.reset();
    }

    fn on_filter_change(&mut self, filters: &FilterSet<K>) {
        self.query.filters = filters.clone();
        self.query.pagination.reset();
        self.refresh_tab();
    }

    fn on_search_change(&mut self, query: &str) {
        self.query.search = query.to_string();
        self.query.pagination.reset();
        self.refresh_tab();
    }

    fn on_tab_change(&mut self, tab: TabSelection) {
        match tab {
            TabSelection::All => {
                self.query.tab = TabSelection::All;
                self.query.filters = FilterSet::new();
                self.query.search.clear();
            }
            TabSelection::Saved(id) => {
                let Some(saved) = self.tab(id).cloned() else {
                    return;
                };
                self.query.tab = tab;
                self.query.filters = saved.filters;
                self.query.search = saved.search;
            }
            TabSelection::Custom => return,
        }
        self.query.pagination.reset();
    }

    fn on_tab_save(&mut self, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            return;
        }

        let filters = self.query.filters.clone();
        let search = self.query.search.clone();

        let id = match self.tabs.iter_mut().find(|tab| tab.label == name) {
            Some(existing) => {
                existing.filters = filters;
                existing.search = search;
                existing.id
            }
            None => {
                let Some(id) = self.next_tab_id() else {
                    warn!(label = name, "no tab id left, tab not saved");
                    return;
                };
                self.tabs
                    .push(Tab::new(id, name).with_filters(filters).with_search(search));
                id
            }
        };

        self.query.tab = TabSelection::Saved(id);
    }

    fn on_tab_delete(&mut self, tab: TabId) {
        self.tabs.retain(|saved| saved.id != tab);
        if self.query.tab == TabSelection::Saved(tab) {
            self.on_tab_change(TabSelection::All);
        }
    }

    fn on_next_page(&mut self, after: &str) {
        self.query.pagination.after = Some(after.to_string());
        self.query.pagination.before = None;
    }

    fn on_previous_page(&mut self, before: &str) {
        self.query.pagination.before = Some(before.to_string());
        self.query.pagination.after = None;
    }

    fn on_rows_per_page_change(&mut self, rows: u16) {
        self.query.pagination.rows_per_page = rows;
        self.query.pagination.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashlist_types::QueryField;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
    enum Key {
        Status,
    }

    impl QueryField for Key {
        const ALL: &'static [Self] = &[Key::Status];

        fn as_str(&self) -> &'static str {
            "status"
        }
    }

    type State = ListState<Key, Key>;

    fn active() -> FilterSet<Key> {
        FilterSet::new().with(Key::Status, "active")
    }

    #[test]
    fn test_filter_change_without_matching_tab_is_custom() {
        let mut state = State::default();
        state.query.pagination.after = Some("c1".to_string());

        assert!(state.apply(&ListIntent::FilterChange(active())));
        assert_eq!(state.query.tab, TabSelection::Custom);
        assert!(state.query.pagination.is_first_page());
    }

    #[test]
    fn test_save_then_delete_active_tab_falls_back_to_all() {
        let mut state = State::default();
        state.apply(&ListIntent::FilterChange(active()));
        state.apply(&ListIntent::TabSave("Active".to_string()));

        assert_eq!(state.tabs.len(), 1);
        assert_eq!(state.query.tab, TabSelection::Saved(TabId::new(1)));

        state.apply(&ListIntent::TabDelete(TabId::new(1)));
        assert!(state.tabs.is_empty());
        assert_eq!(state.query.tab, TabSelection::All);
        assert!(state.query.filters.is_empty());
    }

    #[test]
    fn test_saving_existing_label_overwrites() {
        let mut state = State::default();
        state.apply(&ListIntent::TabSave("Mine".to_string()));
        state.apply(&ListIntent::FilterChange(active()));
        state.apply(&ListIntent::TabSave("Mine".to_string()));

        assert_eq!(state.tabs.len(), 1);
        assert_eq!(state.tabs[0].filters, active());
    }

    #[test]
    fn test_save_is_refused_when_ids_run_out() {
        let full = Tab::new(TabId::new(u32::MAX), "Last");
        let mut state = State::new(ListQueryState::new(), vec![full.clone()]);
        state.apply(&ListIntent::FilterChange(active()));

        assert_eq!(state.next_tab_id(), None);
        assert!(!state.can_save_tab("New"));
        state.apply(&ListIntent::TabSave("New".to_string()));
        assert_eq!(state.tabs, vec![full]);
        assert_eq!(state.query.tab, TabSelection::Custom);

        // Replacing the existing label needs no new id.
        assert!(state.can_save_tab("Last"));
        state.apply(&ListIntent::TabSave("Last".to_string()));
        assert_eq!(state.tabs[0].filters, active());
        assert_eq!(state.query.tab, TabSelection::Saved(TabId::new(u32::MAX)));
    }

    #[test]
    fn test_navigation_does_not_change_state() {
        let mut state = State::default();
        assert!(!state.apply(&ListIntent::Add));
        assert!(!state.apply(&ListIntent::Open(EntityId::new("1"))));
    }

    #[test]
    fn test_toggle_selection() {
        let mut state = State::default();
        let id = EntityId::new("m1");
        state.apply(&ListIntent::ToggleSelection(id.clone()));
        assert_eq!(state.selected, vec![id.clone()]);
        state.apply(&ListIntent::ToggleSelection(id));
        assert!(state.selected.is_empty());
    }
}
