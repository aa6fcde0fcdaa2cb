use crate::filter::FilterSet;
use crate::page::Pagination;
use crate::sort::{Sort, SortDirection};
use crate::tab::TabSelection;
use serde::{Deserialize, Serialize};

/// Query state of one list page, owned by the caller.
///
/// List pages only read it; changes come back to the caller as intents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQueryState<S, K: Ord> {
    pub sort: Option<Sort<S>>,
    #[serde(default)]
    pub filters: FilterSet<K>,
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub tab: TabSelection,
    #[serde(default)]
    pub pagination: Pagination,
}

impl<S, K: Ord> Default for ListQueryState<S, K> {
    fn default() -> Self {
        Self {
            sort: None,
            filters: FilterSet::default(),
            search: String::new(),
            tab: TabSelection::All,
            pagination: Pagination::default(),
        }
    }
}

impl<S: Copy + PartialEq, K: Ord + Copy> ListQueryState<S, K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sort(mut self, sort: Sort<S>) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn with_filters(mut self, filters: FilterSet<K>) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_tab(mut self, tab: TabSelection) -> Self {
        self.tab = tab;
        self
    }

    pub fn with_pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = pagination;
        self
    }

    /// Filters or a search term narrow the list.
    pub fn is_filtered(&self) -> bool {
        !self.filters.is_empty() || !self.search.is_empty()
    }

    /// Direction the list is sorted by `field`, if that is the active field.
    pub fn direction_for(&self, field: S) -> Option<SortDirection> {
        self.sort
            .filter(|sort| sort.field == field)
            .map(|sort| sort.direction)
    }
}
