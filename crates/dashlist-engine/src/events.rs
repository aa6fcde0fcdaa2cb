//! UI events and how they reach handlers.
//!
//! A click on a row travels through the handlers of everything under the
//! pointer, innermost first: the embedded control (if any), then the row.
//! Control handlers consume the click, so a row never navigates when one of
//! its controls was hit.

use dashlist_types::{FilterSet, TabId, TabSelection};
use serde::Serialize;

use crate::intent::ListIntent;

/// Control embedded in a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowControl {
    Remove,
    Select,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Create,
    Back,
    /// Header of the column at this index.
    ColumnHeader(usize),
    NextPage,
    PreviousPage,
    /// Header checkbox of lists with bulk actions.
    SelectAll,
    BulkRemove,
    Row {
        index: usize,
        control: Option<RowControl>,
    },
}

impl ClickTarget {
    pub fn row(index: usize) -> Self {
        ClickTarget::Row {
            index,
            control: None,
        }
    }

    pub fn row_control(index: usize, control: RowControl) -> Self {
        ClickTarget::Row {
            index,
            control: Some(control),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent<K: Ord> {
    Click(ClickTarget),
    SearchInput(String),
    FilterApply(FilterSet<K>),
    TabSelect(TabSelection),
    TabSave(String),
    TabDelete(TabId),
    RowsPerPage(u16),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Propagation {
    #[default]
    Continue,
    Stopped,
}

/// Handler reached by a row click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RowHandler {
    Control(RowControl),
    Row,
}

/// Handlers a row click passes through, innermost first.
pub(crate) fn row_route(control: Option<RowControl>) -> Vec<RowHandler> {
    control
        .map(RowHandler::Control)
        .into_iter()
        .chain(std::iter::once(RowHandler::Row))
        .collect()
}

/// Outcome of routing one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dispatch<S, K: Ord> {
    pub intents: Vec<ListIntent<S, K>>,
    pub propagation: Propagation,
}

impl<S, K: Ord> Default for Dispatch<S, K> {
    fn default() -> Self {
        Self {
            intents: Vec::new(),
            propagation: Propagation::Continue,
        }
    }
}

impl<S, K: Ord> Dispatch<S, K> {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn one(intent: ListIntent<S, K>) -> Self {
        Self {
            intents: vec![intent],
            propagation: Propagation::Continue,
        }
    }

    pub(crate) fn push(&mut self, intent: ListIntent<S, K>) {
        self.intents.push(intent);
    }

    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }

    pub fn stopped(&self) -> bool {
        self.propagation == Propagation::Stopped
    }
}
