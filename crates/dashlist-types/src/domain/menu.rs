use crate::entity::{EntityId, ListEntity};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItemRef {
    pub id: EntityId,
}

/// Navigation menu as listed on the navigation page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Menu {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub items: Vec<MenuItemRef>,
}

impl Menu {
    pub fn new(id: impl Into<EntityId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            items: Vec::new(),
        }
    }

    pub fn with_items(mut self, count: usize) -> Self {
        self.items = (1..=count)
            .map(|n| MenuItemRef {
                id: EntityId::new(format!("{}-item-{}", self.id, n)),
            })
            .collect();
        self
    }

    pub fn items_count(&self) -> usize {
        self.items.len()
    }
}

impl ListEntity for Menu {
    fn id(&self) -> &EntityId {
        &self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}
