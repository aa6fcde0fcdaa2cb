use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

/// Opaque entity identifier as issued by the API (e.g. `Q2hhbm5lbDox`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for EntityId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A record that can be shown as one row of a list page.
pub trait ListEntity {
    fn id(&self) -> &EntityId;

    /// Human readable name, used for the primary column and confirmations.
    fn display_name(&self) -> String;
}

/// Sort fields and filter keys of a list page.
///
/// Both are closed enums with a stable wire name, so they can travel through
/// URLs, CLI flags and the tab store without losing their type.
pub trait QueryField:
    Copy + Eq + Ord + Hash + fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    const ALL: &'static [Self];

    fn as_str(&self) -> &'static str;

    fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|field| field.as_str() == value)
    }
}

/// Sort field of a list that cannot be sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum NoSortField {}

impl QueryField for NoSortField {
    const ALL: &'static [Self] = &[];

    fn as_str(&self) -> &'static str {
        match *self {}
    }
}

/// Filter key of a list without a filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum NoFilterKey {}

impl QueryField for NoFilterKey {
    const ALL: &'static [Self] = &[];

    fn as_str(&self) -> &'static str {
        match *self {}
    }
}
