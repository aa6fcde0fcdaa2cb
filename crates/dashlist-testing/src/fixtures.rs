//! API-shaped fixture payloads for the list pages.

use dashlist_types::{Channel, Limits, Menu, ResourceKind, StaffMember};
use serde_json::{Value, json};

#[derive(Debug, Clone, Default)]
pub struct FixtureBuilder {
    limits: Option<Limits>,
    channels: Vec<Channel>,
    staff_members: Vec<StaffMember>,
    menus: Vec<Menu>,
}

impl FixtureBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Two channels on a plan that allows two.
    pub fn channels_at_limit() -> Self {
        Self::new()
            .with_limit(ResourceKind::Channels, 2, 2)
            .with_channel("1", "A")
            .with_channel("2", "B")
    }

    /// Five staff members, one deactivated.
    pub fn staff_roster() -> Self {
        Self::new()
            .with_limit(ResourceKind::StaffUsers, 5, 10)
            .with_staff(StaffMember::new("s1", "Ada", "Lovelace", "ada@example.com"))
            .with_staff(StaffMember::new("s2", "Alan", "Turing", "alan@example.com"))
            .with_staff(StaffMember::new("s3", "Grace", "Hopper", "grace@example.com"))
            .with_staff(
                StaffMember::new("s4", "Charles", "Babbage", "charles@example.com").deactivated(),
            )
            .with_staff(StaffMember::new("s5", "Edsger", "Dijkstra", "edsger@example.com"))
    }

    /// `count` menus named `menu-1..`, menu n holding n items.
    pub fn menus(count: usize) -> Self {
        (1..=count).fold(Self::new(), |builder, n| {
            builder.with_menu(Menu::new(format!("m{:02}", n), format!("menu-{}", n)).with_items(n))
        })
    }

    pub fn with_limit(mut self, kind: ResourceKind, current: u64, allowed: u64) -> Self {
        let limits = self.limits.take().unwrap_or_default();
        self.limits = Some(limits.with_usage(kind, current, allowed));
        self
    }

    pub fn with_channel(mut self, id: &str, name: &str) -> Self {
        self.channels.push(Channel::new(id, name));
        self
    }

    pub fn with_staff(mut self, member: StaffMember) -> Self {
        self.staff_members.push(member);
        self
    }

    pub fn with_menu(mut self, menu: Menu) -> Self {
        self.menus.push(menu);
        self
    }

    pub fn build(&self) -> Value {
        json!({
            "limits": self.limits,
            "channels": self.channels,
            "staffMembers": self.staff_members,
            "menus": self.menus,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_uses_api_keys() {
        let payload = FixtureBuilder::channels_at_limit().build();

        assert_eq!(payload["limits"]["currentUsage"]["channels"], 2);
        assert_eq!(payload["limits"]["allowedUsage"]["channels"], 2);
        assert_eq!(payload["channels"][1]["name"], "B");
        assert_eq!(payload["staffMembers"], json!([]));
    }

    #[test]
    fn test_menus_are_ordered_by_id() {
        let payload = FixtureBuilder::menus(12).build();
        let menus = payload["menus"].as_array().unwrap();

        assert_eq!(menus.len(), 12);
        assert_eq!(menus[0]["id"], "m01");
        assert_eq!(menus[11]["items"].as_array().unwrap().len(), 12);
    }
}
