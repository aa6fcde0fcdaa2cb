use dashlist_types::{Menu, NoFilterKey, QueryField};
use serde::{Deserialize, Serialize};

use crate::messages;
use crate::translate::{Message, Translate};
use crate::variant::{Column, ListVariant, PageSpec, RemovalPolicy};

const MENU_TITLE: Message = Message::new("menus.column.title", "Menu Title");
const ITEMS: Message = Message::new("menus.column.items", "Items");

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuSortField {
    Name,
    ItemsCount,
}

impl QueryField for MenuSortField {
    const ALL: &'static [Self] = &[MenuSortField::Name, MenuSortField::ItemsCount];

    fn as_str(&self) -> &'static str {
        match self {
            MenuSortField::Name => "name",
            MenuSortField::ItemsCount => "items",
        }
    }
}

/// Navigation menus page with bulk selection.
#[derive(Debug, Clone, Copy, Default)]
pub struct MenusList;

impl ListVariant for MenusList {
    type Entity = Menu;
    type SortField = MenuSortField;
    type FilterKey = NoFilterKey;

    const PAGE: PageSpec = PageSpec {
        list: "menus",
        title: Message::new("sectionNames.navigation", "Navigation"),
        create: Message::new("menus.create", "Create Menu"),
        create_test_id: "add-menu",
        no_results: Message::new("menus.empty", "No menus found"),
        limit: None,
        filter_bar: None,
    };

    const COLUMNS: &'static [Column<MenuSortField>] = &[
        Column::selection(),
        Column::data(MENU_TITLE, Some(MenuSortField::Name)),
        Column::data(ITEMS, Some(MenuSortField::ItemsCount)),
        Column::actions(messages::ACTIONS),
    ];
    const NUMBER_OF_COLUMNS: usize = 4;
    const REMOVAL_POLICY: RemovalPolicy = RemovalPolicy::Always;
    const PAGINATED: bool = true;

    fn cells(menu: &Menu, _t: &dyn Translate) -> Vec<String> {
        vec![menu.name.clone(), menu.items_count().to_string()]
    }
}
