use anyhow::{Context, Result, anyhow};
use dashlist_engine::Catalog;
use dashlist_types::{DEFAULT_ROWS_PER_PAGE, ROWS_PER_PAGE_CHOICES};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::warn;

pub const CONFIG_FILE: &str = "config.toml";

/// Resolve the data directory:
/// 1. Explicit `--data-dir` (with tilde expansion)
/// 2. DASHLIST_PATH environment variable (with tilde expansion)
/// 3. ~/.dashlist
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("DASHLIST_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    dirs::home_dir()
        .map(|home| home.join(".dashlist"))
        .ok_or_else(|| anyhow!("Could not determine data directory: no home directory found"))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub rows_per_page: Option<u16>,

    #[serde(default)]
    pub log_level: Option<String>,

    /// Message id -> replacement text.
    #[serde(default)]
    pub locale_overrides: HashMap<String, String>,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Configured page size, falling back to the default for values the
    /// list settings do not offer.
    pub fn rows_per_page(&self) -> u16 {
        match self.rows_per_page {
            Some(rows) if ROWS_PER_PAGE_CHOICES.contains(&rows) => rows,
            Some(rows) => {
                warn!(
                    rows,
                    fallback = DEFAULT_ROWS_PER_PAGE,
                    "rows_per_page is not one of the offered choices"
                );
                DEFAULT_ROWS_PER_PAGE
            }
            None => DEFAULT_ROWS_PER_PAGE,
        }
    }

    pub fn catalog(&self) -> Catalog {
        Catalog::from(self.locale_overrides.clone())
    }
}
