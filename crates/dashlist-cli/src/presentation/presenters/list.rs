use dashlist_engine::{Dispatch, ListIntent, ListScreen, LoadState};
use dashlist_types::{PageInfo, TabSelection};
use serde::Serialize;

use crate::presentation::view_models::{
    CommandResultViewModel, DispatchViewModel, Guidance, IntentViewModel, ListPageViewModel,
    StatusBadge,
};

/// `command` is the invocation that produced this page, used in tips.
pub fn present_list_page(
    screen: ListScreen,
    total: usize,
    page_info: Option<&PageInfo>,
    dispatch: Option<DispatchViewModel>,
    command: &str,
) -> CommandResultViewModel<ListPageViewModel> {
    let badge = page_badge(&screen, total);
    let mut suggestions = Vec::new();

    if screen.limit_alert.is_some() {
        suggestions.push(Guidance::new(format!(
            "Remove one of the listed {} or raise the plan limit to create more",
            screen.list
        )));
    }

    if let Some(cursor) = page_info
        .filter(|info| info.has_next_page)
        .and_then(|info| info.end_cursor.as_deref())
    {
        suggestions.push(
            Guidance::new("Show the next page").with_command(format!("{} --after {}", command, cursor)),
        );
    }

    let custom_filters = screen
        .filter_bar
        .as_ref()
        .and_then(|bar| bar.current_tab())
        .is_some_and(|tab| tab.selection == TabSelection::Custom);
    if custom_filters {
        suggestions.push(
            Guidance::new("Save the current filters as a tab")
                .with_command(format!("{} --event save-tab:NAME", command)),
        );
    }

    let content = ListPageViewModel {
        screen,
        total,
        dispatch,
    };

    let mut result = CommandResultViewModel::new(content).with_badge(badge);
    for guide in suggestions {
        result = result.with_suggestion(guide);
    }
    result
}

fn page_badge(screen: &ListScreen, total: usize) -> StatusBadge {
    if let Some(error) = &screen.error {
        return StatusBadge::error(error.clone());
    }
    if let Some(alert) = &screen.limit_alert {
        return StatusBadge::warning(alert.title.clone());
    }

    match screen.state {
        LoadState::Loading => StatusBadge::info(format!("Loading {}", screen.list)),
        LoadState::Empty => StatusBadge::info(format!("No {} to show", screen.list)),
        LoadState::Loaded => StatusBadge::success(format!("{} {} found", total, screen.list)),
    }
}

/// Pair each intent of a dispatch with what the caller did about it.
pub fn present_dispatch<S, K>(
    event: &str,
    dispatch: &Dispatch<S, K>,
    outcomes: Vec<String>,
) -> DispatchViewModel
where
    S: Copy + Serialize,
    K: Ord + Copy + Serialize,
{
    let intents = dispatch
        .intents
        .iter()
        .zip(outcomes)
        .map(|(intent, outcome)| present_intent(intent, outcome))
        .collect();

    DispatchViewModel {
        event: event.to_string(),
        propagation: dispatch.propagation,
        intents,
    }
}

fn present_intent<S, K>(intent: &ListIntent<S, K>, outcome: String) -> IntentViewModel
where
    S: Copy + Serialize,
    K: Ord + Copy + Serialize,
{
    let value = serde_json::to_value(intent)
        .ok()
        .and_then(|json| json.get("value").cloned())
        .unwrap_or(serde_json::Value::Null);

    IntentViewModel {
        intent: intent.name(),
        value,
        outcome,
    }
}
