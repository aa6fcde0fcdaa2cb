use crate::entity::{EntityId, ListEntity};
use serde::{Deserialize, Serialize};

/// Sales channel as listed on the channels page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub currency_code: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Channel {
    pub fn new(id: impl Into<EntityId>, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: id.into(),
            slug: name.to_lowercase().replace(' ', "-"),
            name,
            currency_code: String::new(),
            is_active: true,
        }
    }
}

impl ListEntity for Channel {
    fn id(&self) -> &EntityId {
        &self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}
