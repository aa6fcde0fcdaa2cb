//! A list page's caller state held in memory.
//!
//! `ListSession` answers intents the way the dashboard's data layer would:
//! query changes go through `ListState`, creation and removal edit the
//! entity set and the plan usage, navigation is only reported.

use dashlist_engine::{ListIntent, ListProps, ListState};
use dashlist_types::{EntityId, ListEntity, Limits, ListQueryState, Tab};
use tracing::{debug, info};

use super::query::{FixtureVariant, run_query};

pub struct ListSession<V: FixtureVariant> {
    entities: Option<Vec<V::Entity>>,
    limits: Option<Limits>,
    pub state: ListState<V::SortField, V::FilterKey>,
    pub disabled: bool,
    pub error: Option<String>,
    created: usize,
    tabs_dirty: bool,
}

impl<V: FixtureVariant> ListSession<V> {
    pub fn new(
        entities: Option<Vec<V::Entity>>,
        limits: Option<Limits>,
        query: ListQueryState<V::SortField, V::FilterKey>,
        tabs: Vec<Tab<V::FilterKey>>,
    ) -> Self {
        Self {
            entities,
            limits,
            state: ListState::new(query, tabs),
            disabled: false,
            error: None,
            created: 0,
            tabs_dirty: false,
        }
    }

    pub fn limits(&self) -> Option<&Limits> {
        self.limits.as_ref()
    }

    /// Whether saved tabs changed since the session started.
    pub fn tabs_dirty(&self) -> bool {
        self.tabs_dirty
    }

    /// Props for the current page, plus the match count before paging.
    pub fn props(&self) -> (ListProps<V>, usize) {
        let (entities, page_info, total) = match &self.entities {
            None => (None, None, 0),
            Some(all) => {
                let page = run_query::<V>(all, &self.state.query);
                (Some(page.entities), page.page_info, page.total)
            }
        };

        let mut props = ListProps::<V>::new(entities)
            .with_query(self.state.query.clone())
            .with_tabs(self.state.tabs.clone())
            .with_selected(self.state.selected.clone())
            .with_disabled(self.disabled);
        if let Some(limits) = &self.limits {
            props = props.with_limits(limits.clone());
        }
        if let Some(page_info) = page_info {
            props = props.with_page_info(page_info);
        }
        if let Some(error) = &self.error {
            props = props.with_error(error.clone());
        }

        (props, total)
    }

    /// Answer one intent. Returns a short note for the status line.
    pub fn apply(&mut self, intent: &ListIntent<V::SortField, V::FilterKey>) -> String {
        debug!(list = V::PAGE.list, intent = intent.name(), "applying intent");

        let note = match intent {
            ListIntent::Add => self.create(),
            ListIntent::Back => "back to configuration".to_string(),
            ListIntent::Open(id) => format!("open {}", id),
            ListIntent::Remove(id) => {
                let removed = self.remove(std::slice::from_ref(id));
                format!("removed {} {}", removed, V::PAGE.list)
            }
            ListIntent::BulkRemove(ids) => {
                let removed = self.remove(ids);
                format!("removed {} {}", removed, V::PAGE.list)
            }
            ListIntent::TabSave(name) if !self.state.can_save_tab(name) => {
                return format!("no tab id left, tab '{}' not saved", name.trim());
            }
            ListIntent::TabSave(name) => format!("saved tab '{}'", name),
            ListIntent::TabDelete(id) => format!("deleted tab {}", id),
            other => other.name().replace('_', " "),
        };

        let tabs_before = self.state.tabs.len();
        self.state.apply(intent);
        if matches!(intent, ListIntent::TabSave(_) | ListIntent::TabDelete(_)) {
            self.tabs_dirty = true;
            info!(
                list = V::PAGE.list,
                before = tabs_before,
                after = self.state.tabs.len(),
                "saved tabs changed"
            );
        }

        note
    }

    fn create(&mut self) -> String {
        let Some(entities) = &mut self.entities else {
            return "still loading".to_string();
        };

        self.created += 1;
        let ordinal = entities.len() + 1;
        let id = EntityId::new(format!("new-{}", self.created));
        let entity = V::placeholder(id, ordinal);
        let name = entity.display_name();
        entities.push(entity);

        self.adjust_usage(1);
        format!("created {}", name)
    }

    fn remove(&mut self, ids: &[EntityId]) -> usize {
        let Some(entities) = &mut self.entities else {
            return 0;
        };

        let before = entities.len();
        entities.retain(|entity| !ids.contains(entity.id()));
        let removed = before - entities.len();

        self.adjust_usage(-(removed as i64));
        removed
    }

    fn adjust_usage(&mut self, delta: i64) {
        let (Some(kind), Some(limits)) = (V::resource_kind(), self.limits.as_mut()) else {
            return;
        };

        let current = limits.current(kind).saturating_add_signed(delta);
        limits.current_usage.set(kind, Some(current));
    }
}
