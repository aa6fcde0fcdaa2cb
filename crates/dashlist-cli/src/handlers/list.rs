use anyhow::{Result, bail};
use dashlist_engine::{ListController, ListIntent};
use dashlist_types::{
    EntityId, FilterSet, ListQueryState, Pagination, ROWS_PER_PAGE_CHOICES, Sort, TabSelection,
};
use std::path::Path;
use tracing::{debug, info};

use super::HandlerContext;
use crate::args::ListArgs;
use crate::backend::{Fixture, FixtureVariant, ListSession};
use crate::context::ExecutionContext;
use crate::event_spec::parse_event;
use crate::presentation::presenters::{present_dispatch, present_list_page};
use crate::types::OutputFormat;

pub fn handle<V: FixtureVariant>(
    ctx: &ExecutionContext,
    args: &ListArgs,
    format: OutputFormat,
) -> Result<()> {
    let list = V::PAGE.list;
    let mut session = open_session::<V>(ctx, &args.fixture, args.loading, args.rows)?;
    apply_query_flags(&mut session, args)?;

    let catalog = ctx.catalog()?;

    let dispatch = match &args.event {
        Some(spec) => {
            let event = parse_event::<V::FilterKey>(spec, list)?;
            let (props, _) = session.props();
            let dispatch = ListController::new(&props, catalog).handle(event);

            let outcomes = dispatch
                .intents
                .iter()
                .map(|intent| session.apply(intent))
                .collect();
            if session.tabs_dirty() {
                persist_tabs(ctx, &session)?;
            }
            Some(present_dispatch(spec, &dispatch, outcomes))
        }
        None => None,
    };

    let (props, total) = session.props();
    let screen = ListController::new(&props, catalog).screen();
    debug!(list, total, rows = screen.rows().len(), "rendering list page");

    let command = format!("dashlist {} --fixture {}", list, args.fixture.display());
    let view_model = present_list_page(screen, total, props.page_info.as_ref(), dispatch, &command);

    HandlerContext::new(format, args.style).render(view_model)
}

/// Load the fixture and the saved tabs into a fresh session.
pub fn open_session<V: FixtureVariant>(
    ctx: &ExecutionContext,
    fixture: &Path,
    loading: bool,
    rows: Option<u16>,
) -> Result<ListSession<V>> {
    let fixture = Fixture::load(fixture)?;
    let entities = (!loading).then(|| V::entities(&fixture));

    let rows_per_page = match rows {
        Some(rows) if ROWS_PER_PAGE_CHOICES.contains(&rows) => rows,
        Some(rows) => bail!(
            "--rows {} is not offered, choose one of {:?}",
            rows,
            ROWS_PER_PAGE_CHOICES
        ),
        None => ctx.config()?.rows_per_page(),
    };

    let query = ListQueryState::new().with_pagination(Pagination::with_rows_per_page(rows_per_page));
    let tabs = ctx.tab_store()?.tabs::<V::FilterKey>(V::PAGE.list);

    Ok(ListSession::new(entities, fixture.limits, query, tabs))
}

/// Write the session's saved tabs back to the tab store.
pub fn persist_tabs<V: FixtureVariant>(ctx: &ExecutionContext, session: &ListSession<V>) -> Result<()> {
    let mut store = ctx.tab_store()?.clone();
    store.set_tabs(V::PAGE.list, &session.state.tabs);
    ctx.save_tab_store(&store)?;

    info!(list = V::PAGE.list, tabs = session.state.tabs.len(), "saved tabs written");
    Ok(())
}

/// Bring the session to the query the flags describe, the way the page
/// itself would: through intents.
fn apply_query_flags<V: FixtureVariant>(session: &mut ListSession<V>, args: &ListArgs) -> Result<()> {
    let list = V::PAGE.list;
    let state = &mut session.state;

    let narrows = args.tab.is_some() || args.search.is_some() || !args.filters.is_empty();
    if V::PAGE.filter_bar.is_none() && narrows {
        bail!("{} has no filter bar, --search, --filter and --tab do not apply", list);
    }

    if let Some(tab) = &args.tab {
        match tab.parse::<TabSelection>()? {
            TabSelection::All => {}
            TabSelection::Saved(id) => {
                if state.tab(id).is_none() {
                    bail!("{} has no saved tab {}", list, id);
                }
                state.apply(&ListIntent::TabChange(TabSelection::Saved(id)));
            }
            TabSelection::Custom => {
                bail!("the custom tab follows the active filters, use --filter instead")
            }
        }
    }

    if !args.filters.is_empty() {
        let mut filters = FilterSet::new();
        for spec in &args.filters {
            let (key, values) = FilterSet::<V::FilterKey>::parse_assignment(spec, list)?;
            filters.set(key, values);
        }
        state.apply(&ListIntent::FilterChange(filters));
    }

    if let Some(search) = &args.search {
        state.apply(&ListIntent::SearchChange(search.clone()));
    }

    if let Some(sort) = &args.sort {
        let sort = Sort::<V::SortField>::parse(sort, list)?;
        state.apply(&ListIntent::SortChange(sort));
    }

    if !args.selected.is_empty() {
        let ids = args.selected.iter().map(EntityId::new).collect();
        state.apply(&ListIntent::SetSelection(ids));
    }

    // Cursors last: every query change above starts over on the first page.
    state.query.pagination.after = args.after.clone();
    state.query.pagination.before = args.before.clone();

    session.disabled = args.disabled;
    session.error = args.error.clone();
    Ok(())
}
