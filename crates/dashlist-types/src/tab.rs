use crate::error::{Error, Result};
use crate::filter::FilterSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable identifier of a saved tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(u32);

impl TabId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    /// The following id, `None` once ids are exhausted.
    pub fn next(&self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which tab of the filter bar is current.
///
/// `All` is the sentinel for "no filters"; `Custom` marks active filters
/// that match no saved tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TabSelection {
    #[default]
    All,
    Saved(TabId),
    Custom,
}

impl TabSelection {
    pub fn is_all(&self) -> bool {
        matches!(self, TabSelection::All)
    }

    pub fn saved_id(&self) -> Option<TabId> {
        match self {
            TabSelection::Saved(id) => Some(*id),
            _ => None,
        }
    }
}

impl fmt::Display for TabSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TabSelection::All => f.write_str("all"),
            TabSelection::Saved(id) => write!(f, "{}", id),
            TabSelection::Custom => f.write_str("custom"),
        }
    }
}

impl FromStr for TabSelection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "all" => Ok(TabSelection::All),
            "custom" => Ok(TabSelection::Custom),
            other => other
                .parse::<u32>()
                .map(|id| TabSelection::Saved(TabId::new(id)))
                .map_err(|_| Error::invalid("tab", s)),
        }
    }
}

/// A saved filter preset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(deserialize = "K: Ord + Deserialize<'de>"))]
pub struct Tab<K: Ord> {
    pub id: TabId,
    pub label: String,
    #[serde(default)]
    pub filters: FilterSet<K>,
    #[serde(default)]
    pub search: String,
}

impl<K: Ord + Copy> Tab<K> {
    pub fn new(id: TabId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            filters: FilterSet::new(),
            search: String::new(),
        }
    }

    pub fn with_filters(mut self, filters: FilterSet<K>) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// True when this preset describes exactly the given query.
    pub fn matches(&self, filters: &FilterSet<K>, search: &str) -> bool {
        &self.filters == filters && self.search == search
    }
}
