use dashlist_engine::{ListScreen, Propagation};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ListPageViewModel {
    pub screen: ListScreen,
    /// Matching entities before pagination.
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dispatch: Option<DispatchViewModel>,
}

/// A UI event routed through the page and what it produced.
#[derive(Debug, Clone, Serialize)]
pub struct DispatchViewModel {
    pub event: String,
    pub propagation: Propagation,
    pub intents: Vec<IntentViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct IntentViewModel {
    pub intent: &'static str,
    /// Intent payload; `null` for intents without one.
    pub value: serde_json::Value,
    /// What the caller did with it.
    pub outcome: String,
}
