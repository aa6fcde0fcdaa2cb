use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Resource kinds the shop plan can cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResourceKind {
    Channels,
    Orders,
    ProductVariants,
    StaffUsers,
    Warehouses,
}

impl ResourceKind {
    /// Key used by the limits payload.
    pub fn as_key(&self) -> &'static str {
        match self {
            ResourceKind::Channels => "channels",
            ResourceKind::Orders => "orders",
            ResourceKind::ProductVariants => "productVariants",
            ResourceKind::StaffUsers => "staffUsers",
            ResourceKind::Warehouses => "warehouses",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}

/// Usage numbers keyed by resource kind.
///
/// Keys are kept as strings so payloads carrying kinds this build does not
/// know about still deserialize. A missing key and an explicit `null` both
/// read as "no value".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UsageTable(BTreeMap<String, Option<u64>>);

impl UsageTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: ResourceKind) -> Option<u64> {
        self.0.get(kind.as_key()).copied().flatten()
    }

    pub fn set(&mut self, kind: ResourceKind, value: Option<u64>) {
        self.0.insert(kind.as_key().to_string(), value);
    }

    pub fn with(mut self, kind: ResourceKind, value: u64) -> Self {
        self.set(kind, Some(value));
        self
    }
}

/// Snapshot of plan limits, refreshed by the caller on every fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Limits {
    #[serde(default)]
    pub current_usage: UsageTable,
    #[serde(default)]
    pub allowed_usage: UsageTable,
}

impl Limits {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record both the used and the allowed amount for one kind.
    pub fn with_usage(mut self, kind: ResourceKind, current: u64, allowed: u64) -> Self {
        self.current_usage.set(kind, Some(current));
        self.allowed_usage.set(kind, Some(allowed));
        self
    }

    /// Current usage, zero when the payload does not report it.
    pub fn current(&self, kind: ResourceKind) -> u64 {
        self.current_usage.get(kind).unwrap_or(0)
    }

    /// Allowed usage, `None` meaning the kind is not capped.
    pub fn allowed(&self, kind: ResourceKind) -> Option<u64> {
        self.allowed_usage.get(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limits_deserialize_graphql_shape() {
        let json = r#"{
            "currentUsage": {"channels": 2, "staffUsers": 4},
            "allowedUsage": {"channels": 2, "staffUsers": null}
        }"#;

        let limits: Limits = serde_json::from_str(json).unwrap();

        assert_eq!(limits.current(ResourceKind::Channels), 2);
        assert_eq!(limits.allowed(ResourceKind::Channels), Some(2));
        assert_eq!(limits.current(ResourceKind::StaffUsers), 4);
        assert_eq!(limits.allowed(ResourceKind::StaffUsers), None);
    }

    #[test]
    fn test_limits_tolerate_unknown_and_missing_keys() {
        let json = r#"{"currentUsage": {"giftCards": 9}}"#;

        let limits: Limits = serde_json::from_str(json).unwrap();

        assert_eq!(limits.current(ResourceKind::Warehouses), 0);
        assert_eq!(limits.allowed(ResourceKind::Warehouses), None);
        assert_eq!(limits.allowed_usage, UsageTable::new());
    }

    #[test]
    fn test_with_usage_builder() {
        let limits = Limits::new().with_usage(ResourceKind::Orders, 5, 10);

        assert_eq!(limits.current(ResourceKind::Orders), 5);
        assert_eq!(limits.allowed(ResourceKind::Orders), Some(10));
        assert_eq!(ResourceKind::ProductVariants.to_string(), "productVariants");
    }
}
