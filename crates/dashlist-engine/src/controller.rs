//! The list-page controller.
//!
//! `ListController` is a pure function of `ListProps`: it builds the screen
//! and turns UI events into intents, but never stores or fetches anything.
//! Feeding it `entities: None` again puts every row back into the skeleton
//! state, whatever the query looked like before.

use dashlist_types::{
    EntityId, FilterSet, Limits, ListEntity, ListQueryState, PageInfo, ROWS_PER_PAGE_CHOICES,
    Sort, SortDirection, Tab, TabId, TabSelection,
};
use tracing::{debug, trace};

use crate::events::{ClickTarget, Dispatch, Propagation, RowControl, RowHandler, UiEvent, row_route};
use crate::intent::{ListCallbacks, ListIntent};
use crate::limits::{has_limits, is_limit_reached};
use crate::messages;
use crate::screen::{
    ActionButton, BulkToolbar, Cell, ColumnHeader, FilterBar, ListScreen, LoadState, Notice,
    PaginationBar, Row, RowAction, RowKind, TabButton, Table,
};
use crate::translate::{Message, Translate};
use crate::variant::{ColumnRole, ListVariant};

/// Everything a list page renders from.
#[derive(Debug, Clone)]
pub struct ListProps<V: ListVariant> {
    /// `None` while loading.
    pub entities: Option<Vec<V::Entity>>,
    pub limits: Option<Limits>,
    pub query: ListQueryState<V::SortField, V::FilterKey>,
    pub tabs: Vec<Tab<V::FilterKey>>,
    pub page_info: Option<PageInfo>,
    pub selected: Vec<EntityId>,
    pub disabled: bool,
    /// Upstream failure, already formatted by the caller.
    pub error: Option<String>,
}

impl<V: ListVariant> ListProps<V> {
    pub fn new(entities: Option<Vec<V::Entity>>) -> Self {
        Self {
            entities,
            limits: None,
            query: ListQueryState::default(),
            tabs: Vec::new(),
            page_info: None,
            selected: Vec::new(),
            disabled: false,
            error: None,
        }
    }

    pub fn loading() -> Self {
        Self::new(None)
    }

    pub fn loaded(entities: Vec<V::Entity>) -> Self {
        Self::new(Some(entities))
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn with_query(mut self, query: ListQueryState<V::SortField, V::FilterKey>) -> Self {
        self.query = query;
        self
    }

    pub fn with_tabs(mut self, tabs: Vec<Tab<V::FilterKey>>) -> Self {
        self.tabs = tabs;
        self
    }

    pub fn with_page_info(mut self, page_info: PageInfo) -> Self {
        self.page_info = Some(page_info);
        self
    }

    pub fn with_selected(mut self, selected: Vec<EntityId>) -> Self {
        self.selected = selected;
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }
}

pub struct ListController<'a, V: ListVariant> {
    props: &'a ListProps<V>,
    translator: &'a dyn Translate,
}

impl<'a, V: ListVariant> ListController<'a, V> {
    pub fn new(props: &'a ListProps<V>, translator: &'a dyn Translate) -> Self {
        Self { props, translator }
    }

    pub fn props(&self) -> &ListProps<V> {
        self.props
    }

    fn t(&self, message: &Message) -> String {
        self.translator.translate(message, &[])
    }

    pub fn has_limits(&self) -> bool {
        V::PAGE
            .limit
            .is_some_and(|limit| has_limits(self.props.limits.as_ref(), limit.kind))
    }

    pub fn limit_reached(&self) -> bool {
        V::PAGE
            .limit
            .is_some_and(|limit| is_limit_reached(self.props.limits.as_ref(), limit.kind))
    }

    /// Whether rows currently offer their remove control.
    pub fn removal_allowed(&self) -> bool {
        let total = self.props.entities.as_ref().map_or(0, Vec::len);
        V::REMOVAL_POLICY.allows(total)
    }

    fn load_state(&self) -> LoadState {
        match &self.props.entities {
            None => LoadState::Loading,
            Some(entities) if entities.is_empty() => LoadState::Empty,
            Some(_) => LoadState::Loaded,
        }
    }

    pub fn screen(&self) -> ListScreen {
        let limit_reached = self.limit_reached();

        let screen = ListScreen {
            list: V::PAGE.list,
            state: self.load_state(),
            disabled: self.props.disabled,
            back: self.t(&messages::CONFIGURATION),
            title: self.t(&V::PAGE.title),
            create: ActionButton {
                label: self.t(&V::PAGE.create),
                test_id: V::PAGE.create_test_id,
                enabled: !limit_reached,
            },
            limit_text: self.limit_text(),
            limit_alert: self.limit_alert(limit_reached),
            error: self.props.error.clone(),
            filter_bar: self.filter_bar(),
            bulk: self.bulk_toolbar(),
            table: Table {
                column_count: V::NUMBER_OF_COLUMNS,
                columns: self.column_headers(),
                rows: self.rows(),
            },
            pagination: self.pagination(),
        };

        trace!(
            list = V::PAGE.list,
            state = ?screen.state,
            rows = screen.table.rows.len(),
            limit_reached,
            "built list screen"
        );

        screen
    }

    fn limit_text(&self) -> Option<String> {
        let limit = V::PAGE.limit?;
        let limits = self.props.limits.as_ref()?;
        let max = limits.allowed(limit.kind)?;

        Some(self.translator.translate(
            &limit.counter,
            &[
                ("count", limits.current(limit.kind).to_string()),
                ("max", max.to_string()),
            ],
        ))
    }

    fn limit_alert(&self, limit_reached: bool) -> Option<Notice> {
        let limit = V::PAGE.limit?;
        limit_reached.then(|| Notice {
            title: self.t(&limit.reached_title),
            body: self.t(&limit.reached_body),
        })
    }

    fn filter_bar(&self) -> Option<FilterBar> {
        let spec = V::PAGE.filter_bar?;
        let query = &self.props.query;

        let mut tabs = vec![TabButton {
            selection: TabSelection::All,
            label: self.t(&spec.all_tab),
            current: query.tab == TabSelection::All,
        }];

        tabs.extend(self.props.tabs.iter().map(|tab| TabButton {
            selection: TabSelection::Saved(tab.id),
            label: tab.label.clone(),
            current: query.tab == TabSelection::Saved(tab.id),
        }));

        if query.tab == TabSelection::Custom {
            tabs.push(TabButton {
                selection: TabSelection::Custom,
                label: self.t(&messages::CUSTOM_FILTER),
                current: true,
            });
        }

        Some(FilterBar {
            tabs,
            search_placeholder: self.t(&spec.search_placeholder),
            search: query.search.clone(),
            fields: V::filter_fields(&query.filters, self.translator),
            active_filter_count: query.filters.len(),
        })
    }

    fn bulk_toolbar(&self) -> Option<BulkToolbar> {
        if !V::supports_bulk() || self.props.selected.is_empty() {
            return None;
        }

        let selected = self.props.selected.len();
        Some(BulkToolbar {
            selected,
            label: self
                .translator
                .translate(&messages::SELECTED_COUNT, &[("count", selected.to_string())]),
            remove_label: self.t(&messages::DELETE_SELECTED),
            remove_enabled: !self.props.disabled,
            all_selected: self.all_selected(),
        })
    }

    fn all_selected(&self) -> bool {
        match &self.props.entities {
            Some(entities) if !entities.is_empty() => entities
                .iter()
                .all(|entity| self.props.selected.contains(entity.id())),
            _ => false,
        }
    }

    fn column_headers(&self) -> Vec<ColumnHeader> {
        V::COLUMNS
            .iter()
            .map(|column| ColumnHeader {
                role: column.role,
                label: column.label.map(|label| self.t(&label)).unwrap_or_default(),
                sortable: column.sort.is_some(),
                sort: column
                    .sort
                    .and_then(|field| self.props.query.direction_for(field)),
            })
            .collect()
    }

    fn rows(&self) -> Vec<Row> {
        match &self.props.entities {
            None => (0..V::SKELETON_ROWS)
                .map(|_| Row::skeleton(V::NUMBER_OF_COLUMNS))
                .collect(),
            Some(entities) if entities.is_empty() => vec![Row::empty(
                V::NUMBER_OF_COLUMNS,
                self.t(&V::PAGE.no_results),
            )],
            Some(entities) => {
                let removable = self.removal_allowed();
                entities
                    .iter()
                    .map(|entity| self.entity_row(entity, removable))
                    .collect()
            }
        }
    }

    fn entity_row(&self, entity: &V::Entity, removable: bool) -> Row {
        let selected = self.props.selected.contains(entity.id());
        let mut texts = V::cells(entity, self.translator).into_iter();

        let cells = V::COLUMNS
            .iter()
            .map(|column| match column.role {
                ColumnRole::Selection => Cell::Checkbox {
                    checked: selected,
                    enabled: !self.props.disabled,
                },
                ColumnRole::Data => Cell::Text {
                    text: texts.next().unwrap_or_default(),
                },
                ColumnRole::Actions => Cell::Actions {
                    actions: if removable {
                        vec![RowAction {
                            control: RowControl::Remove,
                            label: self.t(&messages::DELETE),
                            enabled: !self.props.disabled,
                        }]
                    } else {
                        Vec::new()
                    },
                },
            })
            .collect();

        Row {
            kind: RowKind::Entity,
            id: Some(entity.id().clone()),
            navigable: true,
            selected,
            cells,
        }
    }

    fn pagination(&self) -> Option<PaginationBar> {
        if !V::PAGINATED {
            return None;
        }

        let page_info = self.props.page_info.clone().unwrap_or_default();
        Some(PaginationBar {
            has_next: page_info.has_next_page,
            has_previous: page_info.has_previous_page,
            rows_per_page: self.props.query.pagination.rows_per_page,
            choices: ROWS_PER_PAGE_CHOICES.to_vec(),
            enabled: !self.props.disabled,
        })
    }

    /// Route one UI event to the intents it produces.
    pub fn handle(&self, event: UiEvent<V::FilterKey>) -> Dispatch<V::SortField, V::FilterKey> {
        let dispatch = match event {
            UiEvent::Click(target) => self.click(target),
            UiEvent::SearchInput(query) => self.search_input(query),
            UiEvent::FilterApply(filters) => self.filter_apply(filters),
            UiEvent::TabSelect(tab) => self.tab_select(tab),
            UiEvent::TabSave(name) => self.tab_save(&name),
            UiEvent::TabDelete(id) => self.tab_delete(id),
            UiEvent::RowsPerPage(rows) => self.rows_per_page(rows),
        };

        if !dispatch.is_empty() {
            debug!(
                list = V::PAGE.list,
                intents = ?dispatch.intents.iter().map(ListIntent::name).collect::<Vec<_>>(),
                stopped = dispatch.stopped(),
                "dispatching list intents"
            );
        }

        dispatch
    }

    /// Route one UI event and deliver its intents to `callbacks`.
    pub fn dispatch(
        &self,
        event: UiEvent<V::FilterKey>,
        callbacks: &mut dyn ListCallbacks<V::SortField, V::FilterKey>,
    ) -> Propagation {
        let dispatch = self.handle(event);
        for intent in &dispatch.intents {
            intent.deliver(callbacks);
        }
        dispatch.propagation
    }

    fn click(&self, target: ClickTarget) -> Dispatch<V::SortField, V::FilterKey> {
        match target {
            ClickTarget::Create => {
                if self.limit_reached() {
                    Dispatch::none()
                } else {
                    Dispatch::one(ListIntent::Add)
                }
            }
            ClickTarget::Back => Dispatch::one(ListIntent::Back),
            ClickTarget::ColumnHeader(index) => self.header_click(index),
            ClickTarget::NextPage => self.next_page(),
            ClickTarget::PreviousPage => self.previous_page(),
            ClickTarget::SelectAll => self.select_all(),
            ClickTarget::BulkRemove => self.bulk_remove(),
            ClickTarget::Row { index, control } => self.row_click(index, control),
        }
    }

    fn header_click(&self, index: usize) -> Dispatch<V::SortField, V::FilterKey> {
        let Some(field) = V::COLUMNS.get(index).and_then(|column| column.sort) else {
            return Dispatch::none();
        };

        let direction = match self.props.query.sort {
            Some(sort) if sort.field == field => sort.direction.toggled(),
            _ => SortDirection::Asc,
        };

        Dispatch::one(ListIntent::SortChange(Sort::new(field, direction)))
    }

    fn row_click(
        &self,
        index: usize,
        control: Option<RowControl>,
    ) -> Dispatch<V::SortField, V::FilterKey> {
        let mut dispatch = Dispatch::none();

        // Skeleton and empty rows carry no handlers.
        let Some(entity) = self
            .props
            .entities
            .as_ref()
            .and_then(|entities| entities.get(index))
        else {
            return dispatch;
        };

        for handler in row_route(control) {
            match handler {
                RowHandler::Control(control) => {
                    if let Some(intent) = self.control_intent(entity, control) {
                        dispatch.push(intent);
                    }
                    dispatch.propagation = Propagation::Stopped;
                }
                RowHandler::Row => dispatch.push(ListIntent::Open(entity.id().clone())),
            }

            if dispatch.stopped() {
                break;
            }
        }

        dispatch
    }

    fn control_intent(
        &self,
        entity: &V::Entity,
        control: RowControl,
    ) -> Option<ListIntent<V::SortField, V::FilterKey>> {
        if self.props.disabled {
            return None;
        }

        match control {
            RowControl::Remove => self
                .removal_allowed()
                .then(|| ListIntent::Remove(entity.id().clone())),
            RowControl::Select => V::supports_bulk()
                .then(|| ListIntent::ToggleSelection(entity.id().clone())),
        }
    }

    fn select_all(&self) -> Dispatch<V::SortField, V::FilterKey> {
        if !V::supports_bulk() || self.props.disabled {
            return Dispatch::none();
        }
        let Some(entities) = &self.props.entities else {
            return Dispatch::none();
        };

        let ids = if self.all_selected() {
            Vec::new()
        } else {
            entities.iter().map(|entity| entity.id().clone()).collect()
        };

        Dispatch::one(ListIntent::SetSelection(ids))
    }

    fn bulk_remove(&self) -> Dispatch<V::SortField, V::FilterKey> {
        if !V::supports_bulk() || self.props.disabled || self.props.selected.is_empty() {
            return Dispatch::none();
        }
        Dispatch::one(ListIntent::BulkRemove(self.props.selected.clone()))
    }

    fn next_page(&self) -> Dispatch<V::SortField, V::FilterKey> {
        if !V::PAGINATED || self.props.disabled {
            return Dispatch::none();
        }
        match &self.props.page_info {
            Some(PageInfo {
                has_next_page: true,
                end_cursor: Some(cursor),
                ..
            }) => Dispatch::one(ListIntent::NextPage(cursor.clone())),
            _ => Dispatch::none(),
        }
    }

    fn previous_page(&self) -> Dispatch<V::SortField, V::FilterKey> {
        if !V::PAGINATED || self.props.disabled {
            return Dispatch::none();
        }
        match &self.props.page_info {
            Some(PageInfo {
                has_previous_page: true,
                start_cursor: Some(cursor),
                ..
            }) => Dispatch::one(ListIntent::PreviousPage(cursor.clone())),
            _ => Dispatch::none(),
        }
    }

    fn rows_per_page(&self, rows: u16) -> Dispatch<V::SortField, V::FilterKey> {
        if !V::PAGINATED
            || !ROWS_PER_PAGE_CHOICES.contains(&rows)
            || rows == self.props.query.pagination.rows_per_page
        {
            return Dispatch::none();
        }
        Dispatch::one(ListIntent::RowsPerPage(rows))
    }

    fn search_input(&self, query: String) -> Dispatch<V::SortField, V::FilterKey> {
        if V::PAGE.filter_bar.is_none() || query == self.props.query.search {
            return Dispatch::none();
        }
        Dispatch::one(ListIntent::SearchChange(query))
    }

    fn filter_apply(&self, filters: FilterSet<V::FilterKey>) -> Dispatch<V::SortField, V::FilterKey> {
        if V::PAGE.filter_bar.is_none() {
            return Dispatch::none();
        }
        Dispatch::one(ListIntent::FilterChange(filters))
    }

    /// Intents that take the list back to the "All" tab.
    fn reset_to_all(&self, dispatch: &mut Dispatch<V::SortField, V::FilterKey>) {
        dispatch.push(ListIntent::TabChange(TabSelection::All));
        dispatch.push(ListIntent::FilterChange(FilterSet::new()));
        if !self.props.query.search.is_empty() {
            dispatch.push(ListIntent::SearchChange(String::new()));
        }
    }

    fn tab_select(&self, tab: TabSelection) -> Dispatch<V::SortField, V::FilterKey> {
        if V::PAGE.filter_bar.is_none() {
            return Dispatch::none();
        }

        let mut dispatch = Dispatch::none();
        match tab {
            TabSelection::All => self.reset_to_all(&mut dispatch),
            TabSelection::Saved(id) => {
                if let Some(saved) = self.props.tabs.iter().find(|saved| saved.id == id) {
                    dispatch.push(ListIntent::TabChange(tab));
                    dispatch.push(ListIntent::FilterChange(saved.filters.clone()));
                    dispatch.push(ListIntent::SearchChange(saved.search.clone()));
                }
            }
            // Custom is derived from the active filters, it cannot be picked.
            TabSelection::Custom => {}
        }
        dispatch
    }

    fn tab_save(&self, name: &str) -> Dispatch<V::SortField, V::FilterKey> {
        let name = name.trim();
        if V::PAGE.filter_bar.is_none() || name.is_empty() {
            return Dispatch::none();
        }
        Dispatch::one(ListIntent::TabSave(name.to_string()))
    }

    fn tab_delete(&self, id: TabId) -> Dispatch<V::SortField, V::FilterKey> {
        if V::PAGE.filter_bar.is_none() || !self.props.tabs.iter().any(|tab| tab.id == id) {
            return Dispatch::none();
        }

        let mut dispatch = Dispatch::one(ListIntent::TabDelete(id));
        if self.props.query.tab == TabSelection::Saved(id) {
            self.reset_to_all(&mut dispatch);
        }
        dispatch
    }
}
