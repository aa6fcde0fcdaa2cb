use serde::Serialize;

use super::common::StatusLevel;

/// Bottom line of the interactive browser.
#[derive(Debug, Clone, Serialize)]
pub struct BrowseStatusViewModel {
    pub list: String,
    /// Entity rows on screen.
    pub shown: usize,
    /// Matches before pagination.
    pub total: usize,
    pub message: String,
    pub level: StatusLevel,
}
