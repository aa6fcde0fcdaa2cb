use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize)]
pub struct TabListViewModel {
    pub list: String,
    pub tabs: Vec<TabEntryViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TabEntryViewModel {
    pub id: u32,
    pub label: String,
    pub search: String,
    pub filters: BTreeMap<String, Vec<String>>,
}
