use anyhow::{Context, Result};
use dashlist_types::{Channel, Limits, Menu, StaffMember};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Snapshot of what the API would return for the list pages.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fixture {
    #[serde(default)]
    pub limits: Option<Limits>,
    #[serde(default)]
    pub channels: Vec<Channel>,
    #[serde(default)]
    pub staff_members: Vec<StaffMember>,
    #[serde(default)]
    pub menus: Vec<Menu>,
}

impl Fixture {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read fixture {}", path.display()))?;
        let fixture = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse fixture {}", path.display()))?;
        Ok(fixture)
    }
}
