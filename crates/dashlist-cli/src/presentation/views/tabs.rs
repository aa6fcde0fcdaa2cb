use std::fmt;

use crate::presentation::formatters::truncate;
use crate::presentation::view_models::{CreateView, TabEntryViewModel, TabListViewModel};
use crate::types::ViewStyle;

const LABEL_WIDTH: usize = 20;

impl CreateView for TabListViewModel {
    fn create_view<'a>(&'a self, _style: ViewStyle) -> Box<dyn fmt::Display + 'a> {
        Box::new(TabListView::new(self))
    }
}

pub struct TabListView<'a> {
    data: &'a TabListViewModel,
}

impl<'a> TabListView<'a> {
    pub fn new(data: &'a TabListViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for TabListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.tabs.is_empty() {
            return writeln!(f, "No saved tabs for {}.", self.data.list);
        }

        writeln!(f, "{:<4} {:<20} {:<20} FILTERS", "ID", "LABEL", "SEARCH")?;
        writeln!(f, "{}", "-".repeat(60))?;
        for tab in &self.data.tabs {
            writeln!(
                f,
                "{:<4} {:<20} {:<20} {}",
                tab.id,
                truncate(&tab.label, LABEL_WIDTH),
                truncate(&tab.search, LABEL_WIDTH),
                filters_text(tab)
            )?;
        }
        Ok(())
    }
}

fn filters_text(tab: &TabEntryViewModel) -> String {
    tab.filters
        .iter()
        .map(|(key, values)| format!("{}={}", key, values.join(",")))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_long_labels_are_cut() {
        let vm = TabListViewModel {
            list: "staff".to_string(),
            tabs: vec![TabEntryViewModel {
                id: 1,
                label: "Everyone hired before the migration".to_string(),
                search: String::new(),
                filters: BTreeMap::from([("status".to_string(), vec!["active".to_string()])]),
            }],
        };

        let text = TabListView::new(&vm).to_string();
        assert!(text.contains("1    Everyone hired be..."));
        assert!(text.trim_end().ends_with("status=active"));
    }
}
