use dashlist_types::{FilterSet, ListEntity, QueryField, ResourceKind};
use std::fmt;

use crate::screen::FilterField;
use crate::translate::{Message, Translate};

/// Placeholder rows shown while entities are loading.
pub const DEFAULT_SKELETON_ROWS: usize = 1;

/// Whether a row may offer its remove action.
///
/// Some kinds must keep at least one entity (a shop always has a channel),
/// so the rule is chosen per list rather than applied globally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalPolicy {
    /// Every row can be removed.
    Always,
    /// Rows can be removed only while more than one entity is listed.
    KeepLastOne,
    /// The list never offers removal.
    Never,
}

impl RemovalPolicy {
    pub fn allows(&self, total: usize) -> bool {
        match self {
            RemovalPolicy::Always => total > 0,
            RemovalPolicy::KeepLastOne => total > 1,
            RemovalPolicy::Never => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnRole {
    /// Leading checkbox column of lists with bulk actions.
    Selection,
    Data,
    /// Trailing column holding row controls.
    Actions,
}

/// Declared table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column<S> {
    pub role: ColumnRole,
    pub label: Option<Message>,
    pub sort: Option<S>,
}

impl<S> Column<S> {
    pub const fn selection() -> Self {
        Self {
            role: ColumnRole::Selection,
            label: None,
            sort: None,
        }
    }

    pub const fn data(label: Message, sort: Option<S>) -> Self {
        Self {
            role: ColumnRole::Data,
            label: Some(label),
            sort,
        }
    }

    pub const fn actions(label: Message) -> Self {
        Self {
            role: ColumnRole::Actions,
            label: Some(label),
            sort: None,
        }
    }
}

/// Usage counter and limit-reached notice for a capped kind.
#[derive(Debug, Clone, Copy)]
pub struct LimitSpec {
    pub kind: ResourceKind,
    /// Receives `count` and `max`.
    pub counter: Message,
    pub reached_title: Message,
    pub reached_body: Message,
}

#[derive(Debug, Clone, Copy)]
pub struct FilterBarSpec {
    pub all_tab: Message,
    pub search_placeholder: Message,
}

/// Static description of a list page.
#[derive(Debug, Clone, Copy)]
pub struct PageSpec {
    /// Wire name of the list (`channels`, `staff`, ...).
    pub list: &'static str,
    pub title: Message,
    pub create: Message,
    pub create_test_id: &'static str,
    pub no_results: Message,
    pub limit: Option<LimitSpec>,
    pub filter_bar: Option<FilterBarSpec>,
}

/// One concrete list page.
///
/// `NUMBER_OF_COLUMNS` is written out by hand and sizes the skeleton and
/// empty rows; it must equal `COLUMNS.len()`.
pub trait ListVariant: fmt::Debug + Clone + Copy + Default + Send + Sync + 'static {
    type Entity: ListEntity + Clone + fmt::Debug;
    type SortField: QueryField;
    type FilterKey: QueryField;

    const PAGE: PageSpec;
    const COLUMNS: &'static [Column<Self::SortField>];
    const NUMBER_OF_COLUMNS: usize;
    const SKELETON_ROWS: usize = DEFAULT_SKELETON_ROWS;
    const REMOVAL_POLICY: RemovalPolicy;
    const PAGINATED: bool = false;

    /// Text of the data columns, in column order.
    fn cells(entity: &Self::Entity, t: &dyn Translate) -> Vec<String>;

    /// Filter fields offered by the filter bar.
    fn filter_fields(_filters: &FilterSet<Self::FilterKey>, _t: &dyn Translate) -> Vec<FilterField> {
        Vec::new()
    }

    fn supports_bulk() -> bool {
        Self::COLUMNS
            .iter()
            .any(|column| column.role == ColumnRole::Selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removal_policy() {
        assert!(!RemovalPolicy::KeepLastOne.allows(1));
        assert!(RemovalPolicy::KeepLastOne.allows(2));
        assert!(RemovalPolicy::Always.allows(1));
        assert!(!RemovalPolicy::Always.allows(0));
        assert!(!RemovalPolicy::Never.allows(5));
    }
}
