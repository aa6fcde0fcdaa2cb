use dashlist_types::{FilterSet, ListEntity, QueryField, ResourceKind, StaffMember};
use serde::{Deserialize, Serialize};

use crate::screen::{FilterChoice, FilterField};
use crate::translate::{Message, Translate};
use crate::variant::{Column, FilterBarSpec, LimitSpec, ListVariant, PageSpec, RemovalPolicy};

const NAME: Message = Message::new("staff.column.name", "Name");
const EMAIL: Message = Message::new("staff.column.email", "Email Address");
const ACTIVE: Message = Message::new("staff.status.active", "Active");
const INACTIVE: Message = Message::new("staff.status.inactive", "Inactive");
const STATUS: Message = Message::new("staff.filter.status", "Status");
const STATUS_ACTIVE: Message = Message::new("staff.filter.status.active", "Active");
const STATUS_DEACTIVATED: Message =
    Message::new("staff.filter.status.deactivated", "Deactivated");

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaffSortField {
    Name,
    Email,
}

impl QueryField for StaffSortField {
    const ALL: &'static [Self] = &[StaffSortField::Name, StaffSortField::Email];

    fn as_str(&self) -> &'static str {
        match self {
            StaffSortField::Name => "name",
            StaffSortField::Email => "email",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaffFilterKey {
    Status,
}

impl QueryField for StaffFilterKey {
    const ALL: &'static [Self] = &[StaffFilterKey::Status];

    fn as_str(&self) -> &'static str {
        match self {
            StaffFilterKey::Status => "status",
        }
    }
}

impl StaffFilterKey {
    /// Values the filter accepts, with their labels.
    pub fn choices(&self) -> &'static [(&'static str, Message)] {
        match self {
            StaffFilterKey::Status => &[("active", STATUS_ACTIVE), ("deactivated", STATUS_DEACTIVATED)],
        }
    }
}

/// Staff members page: paginated, sortable, filterable by status.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaffList;

impl ListVariant for StaffList {
    type Entity = StaffMember;
    type SortField = StaffSortField;
    type FilterKey = StaffFilterKey;

    const PAGE: PageSpec = PageSpec {
        list: "staff",
        title: Message::new("sectionNames.staff", "Staff Members"),
        create: Message::new("staff.create", "Invite staff member"),
        create_test_id: "invite-staff-member",
        no_results: Message::new("staff.empty", "No staff members found"),
        limit: Some(LimitSpec {
            kind: ResourceKind::StaffUsers,
            counter: Message::new("staff.limit.counter", "{count}/{max} members"),
            reached_title: Message::new("staff.limit.title", "Staff Member limit reached"),
            reached_body: Message::new(
                "staff.limit.body",
                "You have reached your staff member limit, you will be no longer able to add staff members to your store. If you would like to up your limit, contact your administration staff about raising your limits.",
            ),
        }),
        filter_bar: Some(FilterBarSpec {
            all_tab: Message::new("staff.tab.all", "All Staff Members"),
            search_placeholder: Message::new("staff.search", "Search Staff Member"),
        }),
    };

    const COLUMNS: &'static [Column<StaffSortField>] = &[
        Column::data(NAME, Some(StaffSortField::Name)),
        Column::data(EMAIL, Some(StaffSortField::Email)),
    ];
    const NUMBER_OF_COLUMNS: usize = 2;
    const REMOVAL_POLICY: RemovalPolicy = RemovalPolicy::Never;
    const PAGINATED: bool = true;

    fn cells(member: &StaffMember, t: &dyn Translate) -> Vec<String> {
        let status = if member.is_active { &ACTIVE } else { &INACTIVE };
        vec![
            format!("{} ({})", member.display_name(), t.translate(status, &[])),
            member.email.clone(),
        ]
    }

    fn filter_fields(filters: &FilterSet<StaffFilterKey>, t: &dyn Translate) -> Vec<FilterField> {
        StaffFilterKey::ALL
            .iter()
            .map(|key| FilterField {
                key: key.as_str(),
                label: t.translate(&STATUS, &[]),
                choices: key
                    .choices()
                    .iter()
                    .map(|(value, label)| FilterChoice {
                        value: value.to_string(),
                        label: t.translate(label, &[]),
                        active: filters.contains(*key, value),
                    })
                    .collect(),
            })
            .collect()
    }
}
