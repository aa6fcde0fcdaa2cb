use crate::backend::TabStore;
use crate::backend::tab_store::TABS_FILE;
use crate::config::{CONFIG_FILE, Config};
use anyhow::Result;
use dashlist_engine::Catalog;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

pub struct ExecutionContext {
    data_dir: PathBuf,
    config: OnceCell<Config>,
    tab_store: OnceCell<TabStore>,
    catalog: OnceCell<Catalog>,
}

impl ExecutionContext {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            config: OnceCell::new(),
            tab_store: OnceCell::new(),
            catalog: OnceCell::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config(&self) -> Result<&Config> {
        self.config
            .get_or_try_init(|| Config::load_from(&self.data_dir.join(CONFIG_FILE)))
    }

    /// Message catalog built from the configured overrides.
    pub fn catalog(&self) -> Result<&Catalog> {
        self.catalog
            .get_or_try_init(|| Ok(self.config()?.catalog()))
    }

    pub fn tab_store(&self) -> Result<&TabStore> {
        self.tab_store
            .get_or_try_init(|| TabStore::load_from(&self.tabs_path()))
    }

    pub fn save_tab_store(&self, store: &TabStore) -> Result<()> {
        store.save_to(&self.tabs_path())
    }

    fn tabs_path(&self) -> PathBuf {
        self.data_dir.join(TABS_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_lazy_loading() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE),
            "rows_per_page = 10\n\n[locale_overrides]\n\"staff.create\" = \"Invite\"\n",
        )
        .unwrap();

        let ctx = ExecutionContext::new(temp_dir.path().to_path_buf());
        assert!(ctx.config.get().is_none(), "Config should not be loaded initially");

        assert_eq!(ctx.config().unwrap().rows_per_page(), 10);
        assert_eq!(ctx.catalog().unwrap().len(), 1);
        assert!(ctx.tab_store.get().is_none(), "Tabs should load on first use");
    }

    #[test]
    fn test_tab_store_path() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = ExecutionContext::new(temp_dir.path().to_path_buf());

        ctx.save_tab_store(&TabStore::default()).unwrap();

        assert!(temp_dir.path().join(TABS_FILE).exists());
        assert_eq!(ctx.data_dir(), temp_dir.path());
    }
}
