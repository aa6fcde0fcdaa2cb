// Engine module - the list-page contract (screen building, event routing, intents)
// This layer sits between the data model (types) and CLI presentation

pub mod controller;
pub mod events;
pub mod intent;
pub mod limits;
pub mod messages;
pub mod pages;
pub mod screen;
pub mod state;
pub mod translate;
pub mod variant;

pub use controller::{ListController, ListProps};
pub use events::{ClickTarget, Dispatch, Propagation, RowControl, UiEvent};
pub use intent::{IntentLog, ListCallbacks, ListIntent, NoCallbacks};
pub use limits::{has_limits, is_limit_reached};
pub use pages::{ChannelsList, MenuSortField, MenusList, StaffFilterKey, StaffList, StaffSortField};
pub use screen::{
    ActionButton, BulkToolbar, Cell, ColumnHeader, FilterBar, FilterChoice, FilterField,
    ListScreen, LoadState, Notice, PaginationBar, Row, RowAction, RowKind, TabButton, Table,
};
pub use state::ListState;
pub use translate::{Catalog, DefaultMessages, Message, Translate, interpolate};
pub use variant::{
    Column, ColumnRole, DEFAULT_SKELETON_ROWS, FilterBarSpec, LimitSpec, ListVariant, PageSpec,
    RemovalPolicy,
};

// Façade API - Stable entry points for callers that do not hold a controller

/// Build the screen for a set of props with the built-in English messages.
pub fn render_screen<V: ListVariant>(props: &ListProps<V>) -> ListScreen {
    ListController::new(props, &DefaultMessages).screen()
}

/// Route one UI event and return the intents it produces.
pub fn handle_event<V: ListVariant>(
    props: &ListProps<V>,
    event: UiEvent<V::FilterKey>,
) -> Dispatch<V::SortField, V::FilterKey> {
    ListController::new(props, &DefaultMessages).handle(event)
}
