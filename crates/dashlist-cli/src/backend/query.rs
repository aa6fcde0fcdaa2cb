//! In-memory execution of a list query against fixture data.
//!
//! Cursors are entity ids: `after` starts the page behind that entity,
//! `before` ends it in front of it.

use dashlist_engine::{
    ChannelsList, ListVariant, MenuSortField, MenusList, StaffFilterKey, StaffList, StaffSortField,
};
use dashlist_types::{
    Channel, EntityId, ListEntity, ListQueryState, Menu, PageInfo, ResourceKind, StaffMember,
};
use std::cmp::Ordering;

use super::fixture::Fixture;

/// A list page the CLI can serve from a fixture.
pub trait FixtureVariant: ListVariant {
    fn entities(fixture: &Fixture) -> Vec<Self::Entity>;

    /// Text the search box matches against.
    fn search_text(entity: &Self::Entity) -> String {
        entity.display_name()
    }

    fn matches_filter(entity: &Self::Entity, key: Self::FilterKey, values: &[String]) -> bool;

    fn compare(a: &Self::Entity, b: &Self::Entity, field: Self::SortField) -> Ordering;

    /// Entity created by the add action in interactive sessions.
    fn placeholder(id: EntityId, ordinal: usize) -> Self::Entity;

    /// Resource kind counted against the plan, if any.
    fn resource_kind() -> Option<ResourceKind> {
        Self::PAGE.limit.map(|limit| limit.kind)
    }
}

impl FixtureVariant for ChannelsList {
    fn entities(fixture: &Fixture) -> Vec<Channel> {
        fixture.channels.clone()
    }

    fn matches_filter(_channel: &Channel, key: Self::FilterKey, _values: &[String]) -> bool {
        match key {}
    }

    fn compare(_a: &Channel, _b: &Channel, field: Self::SortField) -> Ordering {
        match field {}
    }

    fn placeholder(id: EntityId, ordinal: usize) -> Channel {
        Channel::new(id, format!("Channel {}", ordinal))
    }
}

impl FixtureVariant for StaffList {
    fn entities(fixture: &Fixture) -> Vec<StaffMember> {
        fixture.staff_members.clone()
    }

    fn search_text(member: &StaffMember) -> String {
        format!("{} {}", member.display_name(), member.email)
    }

    fn matches_filter(member: &StaffMember, key: StaffFilterKey, values: &[String]) -> bool {
        match key {
            StaffFilterKey::Status => values.iter().any(|value| match value.as_str() {
                "active" => member.is_active,
                "deactivated" => !member.is_active,
                _ => false,
            }),
        }
    }

    fn compare(a: &StaffMember, b: &StaffMember, field: StaffSortField) -> Ordering {
        match field {
            StaffSortField::Name => a
                .display_name()
                .to_lowercase()
                .cmp(&b.display_name().to_lowercase()),
            StaffSortField::Email => a.email.cmp(&b.email),
        }
    }

    fn placeholder(id: EntityId, ordinal: usize) -> StaffMember {
        StaffMember::new(
            id,
            "Invited",
            ordinal.to_string(),
            format!("invited{}@example.com", ordinal),
        )
        .deactivated()
    }
}

impl FixtureVariant for MenusList {
    fn entities(fixture: &Fixture) -> Vec<Menu> {
        fixture.menus.clone()
    }

    fn matches_filter(_menu: &Menu, key: Self::FilterKey, _values: &[String]) -> bool {
        match key {}
    }

    fn compare(a: &Menu, b: &Menu, field: MenuSortField) -> Ordering {
        match field {
            MenuSortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            MenuSortField::ItemsCount => a.items_count().cmp(&b.items_count()),
        }
    }

    fn placeholder(id: EntityId, ordinal: usize) -> Menu {
        Menu::new(id, format!("menu-{}", ordinal))
    }
}

/// One page of query results.
#[derive(Debug, Clone)]
pub struct QueryPage<E> {
    pub entities: Vec<E>,
    /// `None` for lists that do not paginate.
    pub page_info: Option<PageInfo>,
    /// Matches before pagination.
    pub total: usize,
}

pub fn run_query<V: FixtureVariant>(
    entities: &[V::Entity],
    query: &ListQueryState<V::SortField, V::FilterKey>,
) -> QueryPage<V::Entity> {
    // Lists without a filter bar cannot be narrowed, whatever the query holds.
    let narrowable = V::PAGE.filter_bar.is_some();
    let needle = if narrowable {
        query.search.trim().to_lowercase()
    } else {
        String::new()
    };

    let mut matched: Vec<V::Entity> = entities
        .iter()
        .filter(|entity| {
            needle.is_empty() || V::search_text(entity).to_lowercase().contains(&needle)
        })
        .filter(|entity| {
            !narrowable
                || query
                    .filters
                    .iter()
                    .all(|(key, values)| values.is_empty() || V::matches_filter(entity, key, values))
        })
        .cloned()
        .collect();

    if let Some(sort) = query.sort {
        matched.sort_by(|a, b| {
            let ordering = V::compare(a, b, sort.field);
            if sort.direction.is_asc() {
                ordering
            } else {
                ordering.reverse()
            }
        });
    }

    let total = matched.len();

    if !V::PAGINATED {
        return QueryPage {
            entities: matched,
            page_info: None,
            total,
        };
    }

    let rows = usize::from(query.pagination.rows_per_page.max(1));
    let position = |cursor: &str| matched.iter().position(|entity| entity.id().as_str() == cursor);

    let (start, end) = if let Some(after) = &query.pagination.after {
        let start = position(after.as_str()).map_or(0, |index| index + 1);
        (start, (start + rows).min(total))
    } else if let Some(before) = &query.pagination.before {
        let end = position(before.as_str()).unwrap_or(total);
        (end.saturating_sub(rows), end)
    } else {
        (0, rows.min(total))
    };

    let page: Vec<V::Entity> = matched[start..end].to_vec();
    let page_info = PageInfo {
        has_next_page: end < total,
        has_previous_page: start > 0,
        start_cursor: page.first().map(|entity| entity.id().to_string()),
        end_cursor: page.last().map(|entity| entity.id().to_string()),
    };

    QueryPage {
        entities: page,
        page_info: Some(page_info),
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashlist_types::{FilterSet, Pagination, Sort, SortDirection};

    fn staff() -> Vec<StaffMember> {
        vec![
            StaffMember::new("s1", "Grace", "Hopper", "grace@example.com"),
            StaffMember::new("s2", "Ada", "Lovelace", "ada@example.com").deactivated(),
            StaffMember::new("s3", "Alan", "Turing", "alan@example.com"),
        ]
    }

    fn ids<E: ListEntity>(entities: &[E]) -> Vec<&str> {
        entities.iter().map(|entity| entity.id().as_str()).collect()
    }

    #[test]
    fn test_search_and_status_filter() {
        let query = ListQueryState::new()
            .with_search("a")
            .with_filters(FilterSet::new().with(StaffFilterKey::Status, "active"));

        let page = run_query::<StaffList>(&staff(), &query);

        assert_eq!(ids(&page.entities), vec!["s1", "s3"]);
        assert_eq!(page.total, 2);
    }

    #[test]
    fn test_sort_descending_by_name() {
        let query =
            ListQueryState::new().with_sort(Sort::new(StaffSortField::Name, SortDirection::Desc));

        let page = run_query::<StaffList>(&staff(), &query);

        assert_eq!(ids(&page.entities), vec!["s1", "s3", "s2"]);
    }

    #[test]
    fn test_cursor_pages() {
        let first = ListQueryState::<StaffSortField, StaffFilterKey>::new()
            .with_pagination(Pagination::with_rows_per_page(2));
        let page = run_query::<StaffList>(&staff(), &first);

        assert_eq!(ids(&page.entities), vec!["s1", "s2"]);
        let info = page.page_info.unwrap();
        assert!(info.has_next_page);
        assert!(!info.has_previous_page);
        assert_eq!(info.end_cursor.as_deref(), Some("s2"));

        let mut next = first.clone();
        next.pagination.after = info.end_cursor;
        let page = run_query::<StaffList>(&staff(), &next);
        assert_eq!(ids(&page.entities), vec!["s3"]);
        let info = page.page_info.unwrap();
        assert!(!info.has_next_page);
        assert!(info.has_previous_page);

        let mut previous = first;
        previous.pagination.before = Some("s3".to_string());
        let page = run_query::<StaffList>(&staff(), &previous);
        assert_eq!(ids(&page.entities), vec!["s1", "s2"]);
    }

    #[test]
    fn test_channels_are_not_paginated() {
        let channels: Vec<Channel> = (1..=30)
            .map(|n| Channel::new(n.to_string(), format!("Channel {}", n)))
            .collect();

        let page = run_query::<ChannelsList>(&channels, &ListQueryState::new());

        assert_eq!(page.entities.len(), 30);
        assert!(page.page_info.is_none());
    }

    #[test]
    fn test_channels_ignore_search() {
        let channels = vec![Channel::new("1", "A"), Channel::new("2", "B")];
        let query = ListQueryState::new().with_search("A");

        let page = run_query::<ChannelsList>(&channels, &query);

        assert_eq!(ids(&page.entities), vec!["1", "2"]);
        assert_eq!(page.total, 2);
    }

    #[test]
    fn test_menus_sort_by_items() {
        let menus = vec![
            Menu::new("m1", "navbar").with_items(3),
            Menu::new("m2", "footer").with_items(1),
        ];
        let query = ListQueryState::new().with_sort(Sort::asc(MenuSortField::ItemsCount));

        let page = run_query::<MenusList>(&menus, &query);

        assert_eq!(ids(&page.entities), vec!["m2", "m1"]);
    }
}
