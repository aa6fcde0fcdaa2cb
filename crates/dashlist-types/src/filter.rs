use crate::entity::QueryField;
use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Active filters of a list: each key maps to the chosen values.
///
/// Values are kept sorted and free of duplicates, so two sets with the same
/// choices compare equal. A key with no values is not active and is never
/// stored, deserialized sets included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FilterSet<K: Ord>(BTreeMap<K, Vec<String>>);

fn normalize(values: &mut Vec<String>) {
    values.sort();
    values.dedup();
}

impl<'de, K: Ord + Deserialize<'de>> Deserialize<'de> for FilterSet<K> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = BTreeMap::<K, Vec<String>>::deserialize(deserializer)?;
        let filters = raw
            .into_iter()
            .filter_map(|(key, mut values)| {
                normalize(&mut values);
                (!values.is_empty()).then_some((key, values))
            })
            .collect();
        Ok(Self(filters))
    }
}

impl<K: Ord> Default for FilterSet<K> {
    fn default() -> Self {
        Self(BTreeMap::new())
    }
}

impl<K: Ord + Copy> FilterSet<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of active keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, key: K) -> &[String] {
        self.0.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn set(&mut self, key: K, mut values: Vec<String>) {
        normalize(&mut values);
        if values.is_empty() {
            self.0.remove(&key);
        } else {
            self.0.insert(key, values);
        }
    }

    /// Add one value to a key, ignoring duplicates.
    pub fn insert(&mut self, key: K, value: impl Into<String>) {
        let value = value.into();
        let values = self.0.entry(key).or_default();
        if let Err(pos) = values.binary_search(&value) {
            values.insert(pos, value);
        }
    }

    pub fn with(mut self, key: K, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn remove(&mut self, key: K) {
        self.0.remove(&key);
    }

    pub fn contains(&self, key: K, value: &str) -> bool {
        self.get(key).iter().any(|v| v == value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (K, &[String])> {
        self.0.iter().map(|(key, values)| (*key, values.as_slice()))
    }
}

impl<K: QueryField> FilterSet<K> {
    /// Parse a `key=value[,value...]` assignment.
    pub fn parse_assignment(spec: &str, list: &'static str) -> Result<(K, Vec<String>)> {
        let (key, values) = spec
            .split_once('=')
            .ok_or_else(|| Error::invalid("filter", spec))?;

        let key = K::parse(key.trim()).ok_or_else(|| Error::UnknownField {
            list,
            field: key.trim().to_string(),
        })?;

        let values: Vec<String> = values
            .split(',')
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .collect();

        if values.is_empty() {
            return Err(Error::invalid("filter", spec));
        }

        Ok((key, values))
    }
}

impl<K: QueryField> fmt::Display for FilterSet<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(key, values)| format!("{}={}", key.as_str(), values.join(",")))
            .collect();
        f.write_str(&parts.join(" "))
    }
}
