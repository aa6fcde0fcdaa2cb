use dashlist_engine::{ListScreen, LoadState};

use crate::presentation::view_models::{BrowseStatusViewModel, StatusLevel};

/// Status line after the last routed event. `notes` are the outcomes of
/// the intents it produced; an event that produced none is reported too.
pub fn present_browse_status(
    screen: &ListScreen,
    total: usize,
    notes: &[String],
) -> BrowseStatusViewModel {
    let (message, level) = if let Some(error) = &screen.error {
        (error.clone(), StatusLevel::Error)
    } else if !notes.is_empty() {
        (notes.join(", "), StatusLevel::Success)
    } else if let Some(alert) = &screen.limit_alert {
        (alert.title.clone(), StatusLevel::Warning)
    } else if screen.state == LoadState::Loading {
        (format!("Loading {}", screen.list), StatusLevel::Info)
    } else {
        ("ready".to_string(), StatusLevel::Info)
    };

    BrowseStatusViewModel {
        list: screen.list.to_string(),
        shown: screen.entity_rows().count(),
        total,
        message,
        level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashlist_engine::{ChannelsList, ListProps, render_screen};
    use dashlist_types::{Channel, Limits, ResourceKind};

    #[test]
    fn test_notes_win_over_limit_notice() {
        let props = ListProps::<ChannelsList>::loaded(vec![Channel::new("1", "A")])
            .with_limits(Limits::new().with_usage(ResourceKind::Channels, 1, 1));
        let screen = render_screen(&props);

        let idle = present_browse_status(&screen, 1, &[]);
        assert_eq!(idle.level, StatusLevel::Warning);
        assert_eq!(idle.message, "Channel limit reached");

        let after = present_browse_status(&screen, 1, &["open 1".to_string()]);
        assert_eq!(after.level, StatusLevel::Success);
        assert_eq!(after.message, "open 1");
        assert_eq!(after.shown, 1);
    }
}
