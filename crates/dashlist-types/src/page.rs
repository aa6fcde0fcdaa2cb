use serde::{Deserialize, Serialize};

/// Row counts offered by the list settings.
pub const ROWS_PER_PAGE_CHOICES: &[u16] = &[10, 20, 30, 50, 100];

pub const DEFAULT_ROWS_PER_PAGE: u16 = 20;

/// Relay-style page information returned with a page of entities.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next_page: bool,
    pub has_previous_page: bool,
    pub start_cursor: Option<String>,
    pub end_cursor: Option<String>,
}

/// Cursor position and page size requested by the caller.
///
/// At most one of `after` / `before` is set at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub after: Option<String>,
    pub before: Option<String>,
    pub rows_per_page: u16,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            after: None,
            before: None,
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
        }
    }
}

impl Pagination {
    pub fn with_rows_per_page(rows_per_page: u16) -> Self {
        Self {
            rows_per_page,
            ..Self::default()
        }
    }

    /// Back to the first page, keeping the page size.
    pub fn reset(&mut self) {
        self.after = None;
        self.before = None;
    }

    pub fn is_first_page(&self) -> bool {
        self.after.is_none() && self.before.is_none()
    }
}
