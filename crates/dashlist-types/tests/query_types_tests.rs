use dashlist_types::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
enum Field {
    Name,
    Email,
}

impl QueryField for Field {
    const ALL: &'static [Self] = &[Field::Name, Field::Email];

    fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
        }
    }
}

#[test]
fn test_sort_parse_with_and_without_direction() {
    let sort = Sort::<Field>::parse("email:desc", "staff").unwrap();
    assert_eq!(sort, Sort::new(Field::Email, SortDirection::Desc));

    let sort = Sort::<Field>::parse("name", "staff").unwrap();
    assert_eq!(sort, Sort::asc(Field::Name));
    assert_eq!(sort.to_string(), "name:asc");
}

#[test]
fn test_sort_parse_rejects_unknown_field_and_direction() {
    let err = Sort::<Field>::parse("age", "staff").unwrap_err();
    assert_eq!(
        err,
        Error::UnknownField {
            list: "staff",
            field: "age".to_string()
        }
    );

    let err = Sort::<Field>::parse("name:sideways", "staff").unwrap_err();
    assert_eq!(err.to_string(), "Invalid sort direction: 'sideways'");
}

#[test]
fn test_no_sort_field_parses_nothing() {
    assert!(NoSortField::parse("name").is_none());
    assert!(NoSortField::ALL.is_empty());
}

#[test]
fn test_filter_assignment_parsing() {
    let (key, values) = FilterSet::<Field>::parse_assignment("name=a, b,", "staff").unwrap();
    assert_eq!(key, Field::Name);
    assert_eq!(values, vec!["a".to_string(), "b".to_string()]);

    assert!(FilterSet::<Field>::parse_assignment("name=", "staff").is_err());
    assert!(FilterSet::<Field>::parse_assignment("name", "staff").is_err());
}

#[test]
fn test_filter_set_drops_empty_keys() {
    let mut filters = FilterSet::new().with(Field::Name, "a").with(Field::Name, "a");
    assert_eq!(filters.get(Field::Name), ["a".to_string()]);

    filters.set(Field::Name, Vec::new());
    assert!(filters.is_empty());
}

#[test]
fn test_filter_values_ignore_choice_order() {
    let picked_forward = {
        let mut filters = FilterSet::new();
        filters.set(Field::Name, vec!["active".to_string(), "deactivated".to_string()]);
        filters
    };
    let picked_backward = FilterSet::new()
        .with(Field::Name, "deactivated")
        .with(Field::Name, "active");

    assert_eq!(picked_forward, picked_backward);
    assert_eq!(
        picked_backward.get(Field::Name),
        ["active".to_string(), "deactivated".to_string()]
    );

    let tab = Tab::new(TabId::new(1), "Everyone").with_filters(picked_backward);
    assert!(tab.matches(&picked_forward, ""));
}

#[test]
fn test_deserialized_filters_drop_empty_keys() {
    let filters: FilterSet<Field> =
        serde_json::from_str(r#"{"name": [], "email": ["b", "a", "b"]}"#).unwrap();

    assert_eq!(filters.len(), 1);
    assert!(filters.get(Field::Name).is_empty());
    assert_eq!(filters.get(Field::Email), ["a".to_string(), "b".to_string()]);
}

#[test]
fn test_tab_id_next_stops_at_max() {
    assert_eq!(TabId::new(4).next(), Some(TabId::new(5)));
    assert_eq!(TabId::new(u32::MAX).next(), None);
}

#[test]
fn test_tab_selection_round_trips_through_text() {
    for text in ["all", "custom", "3"] {
        let selection: TabSelection = text.parse().unwrap();
        assert_eq!(selection.to_string(), text);
    }
    assert!("third".parse::<TabSelection>().is_err());
}

#[test]
fn test_tab_matches_exact_query_only() {
    let filters = FilterSet::new().with(Field::Email, "x@example.com");
    let tab = Tab::new(TabId::new(1), "Mine").with_filters(filters.clone());

    assert!(tab.matches(&filters, ""));
    assert!(!tab.matches(&filters, "jane"));
    assert!(!tab.matches(&FilterSet::new(), ""));
}

#[test]
fn test_query_state_defaults_and_direction() {
    let state: ListQueryState<Field, Field> = ListQueryState::new();
    assert_eq!(state.tab, TabSelection::All);
    assert_eq!(state.pagination.rows_per_page, DEFAULT_ROWS_PER_PAGE);
    assert!(!state.is_filtered());

    let state = state.with_sort(Sort::new(Field::Name, SortDirection::Desc));
    assert_eq!(state.direction_for(Field::Name), Some(SortDirection::Desc));
    assert_eq!(state.direction_for(Field::Email), None);
}

#[test]
fn test_tab_serializes_to_json() {
    let tab: Tab<Field> = Tab::new(TabId::new(2), "Admins")
        .with_filters(FilterSet::new().with(Field::Email, "admin@example.com"));

    let text = serde_json::to_string(&tab).unwrap();
    assert!(text.contains(r#""filters":{"email":["admin@example.com"]}"#));
    let back: Tab<Field> = serde_json::from_str(&text).unwrap();

    assert_eq!(back, tab);
}

#[test]
fn test_domain_records_accept_minimal_payloads() {
    let channel: Channel = serde_json::from_str(r#"{"id":"1","name":"A"}"#).unwrap();
    assert!(channel.is_active);
    assert_eq!(channel.display_name(), "A");

    let member: StaffMember =
        serde_json::from_str(r#"{"id":"s1","email":"no-name@example.com"}"#).unwrap();
    assert_eq!(member.display_name(), "no-name@example.com");

    let menu: Menu =
        serde_json::from_str(r#"{"id":"m1","name":"navbar","items":[{"id":"i1"}]}"#).unwrap();
    assert_eq!(menu.items_count(), 1);
}
