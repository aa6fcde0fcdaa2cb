//! Text form of UI events, for driving a page from the command line.
//!
//! ```text
//! create | back | next | prev | select-all | bulk-remove
//! header:N | row:N | remove:N | select:N
//! search:TEXT | filter:KEY=V[,V] | filter:none
//! tab:all|custom|ID | save-tab:NAME | delete-tab:ID | rows:N
//! ```
//!
//! Row and header indices are zero-based.

use anyhow::{Context, Result, bail};
use dashlist_engine::{ClickTarget, RowControl, UiEvent};
use dashlist_types::{FilterSet, QueryField, TabId, TabSelection};

pub fn parse_event<K: QueryField>(spec: &str, list: &'static str) -> Result<UiEvent<K>> {
    let spec = spec.trim();
    let (name, arg) = match spec.split_once(':') {
        Some((name, arg)) => (name, Some(arg)),
        None => (spec, None),
    };

    let event = match (name, arg) {
        ("create", None) => UiEvent::Click(ClickTarget::Create),
        ("back", None) => UiEvent::Click(ClickTarget::Back),
        ("next", None) => UiEvent::Click(ClickTarget::NextPage),
        ("prev", None) => UiEvent::Click(ClickTarget::PreviousPage),
        ("select-all", None) => UiEvent::Click(ClickTarget::SelectAll),
        ("bulk-remove", None) => UiEvent::Click(ClickTarget::BulkRemove),
        ("header", Some(index)) => UiEvent::Click(ClickTarget::ColumnHeader(index_arg(index)?)),
        ("row", Some(index)) => UiEvent::Click(ClickTarget::row(index_arg(index)?)),
        ("remove", Some(index)) => UiEvent::Click(ClickTarget::row_control(
            index_arg(index)?,
            RowControl::Remove,
        )),
        ("select", Some(index)) => UiEvent::Click(ClickTarget::row_control(
            index_arg(index)?,
            RowControl::Select,
        )),
        ("search", Some(text)) => UiEvent::SearchInput(text.to_string()),
        ("filter", Some("none")) => UiEvent::FilterApply(FilterSet::new()),
        ("filter", Some(assignment)) => {
            let (key, values) = FilterSet::<K>::parse_assignment(assignment, list)?;
            let mut filters = FilterSet::new();
            filters.set(key, values);
            UiEvent::FilterApply(filters)
        }
        ("tab", Some(tab)) => UiEvent::TabSelect(tab.parse::<TabSelection>()?),
        ("save-tab", Some(name)) => UiEvent::TabSave(name.to_string()),
        ("delete-tab", Some(id)) => UiEvent::TabDelete(TabId::new(
            id.parse().with_context(|| format!("Invalid tab id '{}'", id))?,
        )),
        ("rows", Some(rows)) => UiEvent::RowsPerPage(
            rows.parse()
                .with_context(|| format!("Invalid rows per page '{}'", rows))?,
        ),
        _ => bail!("Unknown event '{}'", spec),
    };

    Ok(event)
}

fn index_arg(value: &str) -> Result<usize> {
    value
        .parse()
        .with_context(|| format!("Invalid index '{}'", value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashlist_engine::StaffFilterKey;
    use dashlist_types::NoFilterKey;

    #[test]
    fn test_clicks() {
        assert_eq!(
            parse_event::<NoFilterKey>("remove:1", "channels").unwrap(),
            UiEvent::Click(ClickTarget::row_control(1, RowControl::Remove))
        );
        assert_eq!(
            parse_event::<NoFilterKey>("create", "channels").unwrap(),
            UiEvent::Click(ClickTarget::Create)
        );
        assert!(parse_event::<NoFilterKey>("row:x", "channels").is_err());
        assert!(parse_event::<NoFilterKey>("create:1", "channels").is_err());
    }

    #[test]
    fn test_filters_and_tabs() {
        let event = parse_event::<StaffFilterKey>("filter:status=active", "staff").unwrap();
        assert_eq!(
            event,
            UiEvent::FilterApply(FilterSet::new().with(StaffFilterKey::Status, "active"))
        );

        assert_eq!(
            parse_event::<StaffFilterKey>("tab:all", "staff").unwrap(),
            UiEvent::TabSelect(TabSelection::All)
        );
        assert_eq!(
            parse_event::<StaffFilterKey>("delete-tab:2", "staff").unwrap(),
            UiEvent::TabDelete(TabId::new(2))
        );
        assert!(parse_event::<StaffFilterKey>("filter:role=owner", "staff").is_err());
    }

    #[test]
    fn test_search_keeps_colons() {
        assert_eq!(
            parse_event::<StaffFilterKey>("search:a:b", "staff").unwrap(),
            UiEvent::SearchInput("a:b".to_string())
        );
    }
}
