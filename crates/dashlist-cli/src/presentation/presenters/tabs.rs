use crate::backend::StoredTab;
use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, StatusBadge, TabEntryViewModel, TabListViewModel,
};

pub fn present_tab_list(list: &str, tabs: &[StoredTab]) -> CommandResultViewModel<TabListViewModel> {
    let content = tab_list(list, tabs);

    if content.tabs.is_empty() {
        CommandResultViewModel::new(content)
            .with_badge(StatusBadge::info("No saved tabs"))
            .with_suggestion(
                Guidance::new("Save the current filters under a name")
                    .with_command(format!("dashlist tabs save {} NAME --filter KEY=VALUE", list)),
            )
    } else {
        let label = format!("{} saved tab(s)", content.tabs.len());
        CommandResultViewModel::new(content).with_badge(StatusBadge::success(label))
    }
}

/// Result of a save or delete: the outcome note plus the tabs left.
pub fn present_tab_change(
    list: &str,
    tabs: &[StoredTab],
    outcome: String,
) -> CommandResultViewModel<TabListViewModel> {
    CommandResultViewModel::new(tab_list(list, tabs))
        .with_badge(StatusBadge::success(outcome))
        .with_suggestion(
            Guidance::new("Open the list on a saved tab")
                .with_command(format!("dashlist {} --fixture FILE --tab ID", list)),
        )
}

fn tab_list(list: &str, tabs: &[StoredTab]) -> TabListViewModel {
    TabListViewModel {
        list: list.to_string(),
        tabs: tabs
            .iter()
            .map(|tab| TabEntryViewModel {
                id: tab.id,
                label: tab.label.clone(),
                search: tab.search.clone(),
                filters: tab.filters.clone(),
            })
            .collect(),
    }
}
