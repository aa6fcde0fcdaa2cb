use anyhow::{Result, bail};
use dashlist_engine::{ListIntent, ListState, ListVariant};
use dashlist_types::{FilterSet, ListQueryState, TabId};

use super::HandlerContext;
use crate::context::ExecutionContext;
use crate::presentation::presenters::{present_tab_change, present_tab_list};
use crate::types::{OutputFormat, ViewStyle};

pub fn list<V: ListVariant>(ctx: &ExecutionContext, format: OutputFormat) -> Result<()> {
    let list = V::PAGE.list;
    let view_model = present_tab_list(list, ctx.tab_store()?.stored(list));
    HandlerContext::new(format, ViewStyle::Standard).render(view_model)
}

pub fn save<V: ListVariant>(
    ctx: &ExecutionContext,
    name: &str,
    filter_specs: &[String],
    search: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let list = V::PAGE.list;
    ensure_filter_tabs::<V>()?;

    let name = name.trim();
    if name.is_empty() {
        bail!("tab name must not be empty");
    }

    let mut filters = FilterSet::new();
    for spec in filter_specs {
        let (key, values) = FilterSet::<V::FilterKey>::parse_assignment(spec, list)?;
        filters.set(key, values);
    }
    let query = ListQueryState::new()
        .with_filters(filters)
        .with_search(search.unwrap_or_default());

    let mut store = ctx.tab_store()?.clone();
    let mut state = ListState::<V::SortField, V::FilterKey>::new(query, store.tabs(list));
    if !state.can_save_tab(name) {
        bail!("{} has no tab id left for '{}'", list, name);
    }
    state.apply(&ListIntent::TabSave(name.to_string()));

    store.set_tabs(list, &state.tabs);
    ctx.save_tab_store(&store)?;

    let view_model = present_tab_change(list, store.stored(list), format!("Saved tab '{}'", name));
    HandlerContext::new(format, ViewStyle::Standard).render(view_model)
}

pub fn delete<V: ListVariant>(ctx: &ExecutionContext, id: u32, format: OutputFormat) -> Result<()> {
    let list = V::PAGE.list;
    ensure_filter_tabs::<V>()?;

    let mut store = ctx.tab_store()?.clone();
    let mut state =
        ListState::<V::SortField, V::FilterKey>::new(ListQueryState::new(), store.tabs(list));

    let id = TabId::new(id);
    if state.tab(id).is_none() {
        bail!("{} has no saved tab {}", list, id);
    }
    state.apply(&ListIntent::TabDelete(id));

    store.set_tabs(list, &state.tabs);
    ctx.save_tab_store(&store)?;

    let view_model = present_tab_change(list, store.stored(list), format!("Deleted tab {}", id));
    HandlerContext::new(format, ViewStyle::Standard).render(view_model)
}

fn ensure_filter_tabs<V: ListVariant>() -> Result<()> {
    if V::PAGE.filter_bar.is_none() {
        bail!("{} has no filter bar, so it has no saved tabs", V::PAGE.list);
    }
    Ok(())
}
