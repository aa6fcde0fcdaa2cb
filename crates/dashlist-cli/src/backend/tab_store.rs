use anyhow::{Context, Result};
use dashlist_types::{FilterSet, QueryField, Tab, TabId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::warn;

pub const TABS_FILE: &str = "tabs.toml";

/// Saved tab as written to disk. Filter keys stay strings so one file can
/// hold the tabs of every list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredTab {
    pub id: u32,
    pub label: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub search: String,
    #[serde(default)]
    pub filters: BTreeMap<String, Vec<String>>,
}

impl StoredTab {
    fn from_tab<K: QueryField>(tab: &Tab<K>) -> Self {
        Self {
            id: tab.id.get(),
            label: tab.label.clone(),
            search: tab.search.clone(),
            filters: tab
                .filters
                .iter()
                .map(|(key, values)| (key.as_str().to_string(), values.to_vec()))
                .collect(),
        }
    }

    fn to_tab<K: QueryField>(&self, list: &str) -> Tab<K> {
        let mut filters = FilterSet::new();
        for (key, values) in &self.filters {
            match K::parse(key) {
                Some(key) => filters.set(key, values.clone()),
                None => warn!(list, tab = self.id, key = %key, "skipping unknown filter key"),
            }
        }

        Tab::new(TabId::new(self.id), self.label.clone())
            .with_filters(filters)
            .with_search(self.search.clone())
    }
}

/// Saved tabs of every list, keyed by list name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabStore {
    #[serde(default)]
    lists: BTreeMap<String, Vec<StoredTab>>,
}

impl TabStore {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let store = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(store)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    pub fn tabs<K: QueryField>(&self, list: &str) -> Vec<Tab<K>> {
        self.lists
            .get(list)
            .map(|tabs| tabs.iter().map(|tab| tab.to_tab(list)).collect())
            .unwrap_or_default()
    }

    pub fn set_tabs<K: QueryField>(&mut self, list: &str, tabs: &[Tab<K>]) {
        if tabs.is_empty() {
            self.lists.remove(list);
        } else {
            self.lists.insert(
                list.to_string(),
                tabs.iter().map(StoredTab::from_tab).collect(),
            );
        }
    }

    pub fn stored(&self, list: &str) -> &[StoredTab] {
        self.lists.get(list).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashlist_engine::StaffFilterKey;
    use tempfile::TempDir;

    #[test]
    fn test_tabs_survive_a_save() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(TABS_FILE);

        let tabs = vec![
            Tab::new(TabId::new(1), "Active")
                .with_filters(FilterSet::new().with(StaffFilterKey::Status, "active")),
            Tab::new(TabId::new(2), "Ada").with_search("ada"),
        ];

        let mut store = TabStore::default();
        store.set_tabs("staff", &tabs);
        store.save_to(&path).unwrap();

        let loaded = TabStore::load_from(&path).unwrap();
        assert_eq!(loaded.tabs::<StaffFilterKey>("staff"), tabs);
        assert!(loaded.stored("menus").is_empty());
    }

    #[test]
    fn test_unknown_filter_keys_are_skipped() {
        let store: TabStore = toml::from_str(
            r#"
[[lists.staff]]
id = 3
label = "Odd"

[lists.staff.filters]
status = ["deactivated"]
role = ["owner"]
"#,
        )
        .unwrap();

        let tabs = store.tabs::<StaffFilterKey>("staff");
        assert_eq!(tabs.len(), 1);
        assert_eq!(tabs[0].filters.len(), 1);
        assert!(tabs[0].filters.contains(StaffFilterKey::Status, "deactivated"));
    }

    #[test]
    fn test_clearing_tabs_drops_the_list() {
        let mut store = TabStore::default();
        store.set_tabs("staff", &[Tab::<StaffFilterKey>::new(TabId::new(1), "All mine")]);
        store.set_tabs::<StaffFilterKey>("staff", &[]);

        assert_eq!(store, TabStore::default());
    }
}
