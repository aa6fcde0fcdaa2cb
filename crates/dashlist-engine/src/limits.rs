use dashlist_types::{Limits, ResourceKind};

/// True when the plan caps `kind`. A missing snapshot or a missing key both
/// mean unlimited.
pub fn has_limits(limits: Option<&Limits>, kind: ResourceKind) -> bool {
    limits.is_some_and(|limits| limits.allowed(kind).is_some())
}

/// True when `kind` is capped and the cap is used up.
pub fn is_limit_reached(limits: Option<&Limits>, kind: ResourceKind) -> bool {
    match limits {
        Some(limits) => match limits.allowed(kind) {
            Some(allowed) => limits.current(kind) >= allowed,
            None => false,
        },
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashlist_types::UsageTable;

    #[test]
    fn test_no_snapshot_is_unlimited() {
        assert!(!has_limits(None, ResourceKind::Channels));
        assert!(!is_limit_reached(None, ResourceKind::Channels));
    }

    #[test]
    fn test_missing_key_is_unlimited() {
        let limits = Limits::new().with_usage(ResourceKind::StaffUsers, 10, 10);

        assert!(!has_limits(Some(&limits), ResourceKind::Channels));
        assert!(!is_limit_reached(Some(&limits), ResourceKind::Channels));
    }

    #[test]
    fn test_reached_at_and_above_cap() {
        let at_cap = Limits::new().with_usage(ResourceKind::Channels, 2, 2);
        let above = Limits::new().with_usage(ResourceKind::Channels, 3, 2);
        let below = Limits::new().with_usage(ResourceKind::Channels, 1, 2);

        assert!(is_limit_reached(Some(&at_cap), ResourceKind::Channels));
        assert!(is_limit_reached(Some(&above), ResourceKind::Channels));
        assert!(!is_limit_reached(Some(&below), ResourceKind::Channels));
        assert!(has_limits(Some(&below), ResourceKind::Channels));
    }

    #[test]
    fn test_zero_cap_with_no_usage_reported() {
        let limits = Limits {
            current_usage: UsageTable::new(),
            allowed_usage: UsageTable::new().with(ResourceKind::Warehouses, 0),
        };

        assert!(is_limit_reached(Some(&limits), ResourceKind::Warehouses));
    }
}
