use crate::entity::{EntityId, ListEntity};
use serde::{Deserialize, Serialize};

/// Staff account as listed on the staff members page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffMember {
    pub id: EntityId,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl StaffMember {
    pub fn new(
        id: impl Into<EntityId>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            is_active: true,
            avatar_url: None,
        }
    }

    pub fn deactivated(mut self) -> Self {
        self.is_active = false;
        self
    }
}

impl ListEntity for StaffMember {
    fn id(&self) -> &EntityId {
        &self.id
    }

    /// Full name, falling back to the email for accounts without one.
    fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.email.clone()
        } else {
            full.to_string()
        }
    }
}
