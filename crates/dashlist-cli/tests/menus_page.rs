use dashlist_testing::assertions::{assert_entity_ids, assert_intents, assert_row_count};
use dashlist_testing::{FixtureBuilder, TestWorld};

fn twelve_menus() -> TestWorld {
    TestWorld::new().with_fixture("menus", FixtureBuilder::menus(12).build())
}

#[test]
fn test_first_page_and_next_tip() {
    let world = twelve_menus();

    let json = world
        .run_list("menus", "menus", &["--rows", "10"])
        .unwrap()
        .json()
        .unwrap();

    assert_row_count(&json, 10).unwrap();
    assert_eq!(json["content"]["total"], 12);
    let pagination = &json["content"]["screen"]["pagination"];
    assert_eq!(pagination["has_next"], true);
    assert_eq!(pagination["has_previous"], false);
    assert_eq!(pagination["rows_per_page"], 10);

    let tips = json["suggestions"].as_array().unwrap();
    assert!(
        tips.iter()
            .any(|tip| tip["command"].as_str().is_some_and(|cmd| cmd.ends_with("--after m10")))
    );
}

#[test]
fn test_after_cursor_shows_second_page() {
    let world = twelve_menus();

    let json = world
        .run_list("menus", "menus", &["--rows", "10", "--after", "m10"])
        .unwrap()
        .json()
        .unwrap();

    assert_entity_ids(&json, &["m11", "m12"]).unwrap();
    let pagination = &json["content"]["screen"]["pagination"];
    assert_eq!(pagination["has_next"], false);
    assert_eq!(pagination["has_previous"], true);
}

#[test]
fn test_next_event_moves_cursor() {
    let world = twelve_menus();

    let json = world
        .run_list("menus", "menus", &["--rows", "10", "--event", "next"])
        .unwrap()
        .json()
        .unwrap();

    assert_intents(&json, &["next_page"]).unwrap();
    assert_eq!(json["content"]["dispatch"]["intents"][0]["value"], "m10");
    assert_entity_ids(&json, &["m11", "m12"]).unwrap();
}

#[test]
fn test_prev_is_ignored_on_first_page() {
    let world = twelve_menus();

    let json = world
        .run_list("menus", "menus", &["--rows", "10", "--event", "prev"])
        .unwrap()
        .json()
        .unwrap();

    assert_intents(&json, &[]).unwrap();
}

#[test]
fn test_rows_per_page_event() {
    let world = twelve_menus();

    let json = world
        .run_list("menus", "menus", &["--rows", "10", "--event", "rows:50"])
        .unwrap()
        .json()
        .unwrap();

    assert_intents(&json, &["rows_per_page"]).unwrap();
    assert_row_count(&json, 12).unwrap();
    assert_eq!(json["content"]["screen"]["pagination"]["rows_per_page"], 50);
}

#[test]
fn test_rows_per_page_from_config() {
    let world = twelve_menus().with_config("rows_per_page = 10\n");

    let json = world.run_list("menus", "menus", &[]).unwrap().json().unwrap();

    assert_row_count(&json, 10).unwrap();
}

#[test]
fn test_select_all_then_bulk_remove() {
    let world = twelve_menus();

    let json = world
        .run_list("menus", "menus", &["--rows", "10", "--event", "select-all"])
        .unwrap()
        .json()
        .unwrap();

    assert_intents(&json, &["set_selection"]).unwrap();
    let bulk = &json["content"]["screen"]["bulk"];
    assert_eq!(bulk["selected"], 10);
    assert_eq!(bulk["label"], "10 selected");
    assert_eq!(bulk["all_selected"], true);

    let json = world
        .run_list("menus", "menus", &["--select", "m01,m02", "--event", "bulk-remove"])
        .unwrap()
        .json()
        .unwrap();

    assert_intents(&json, &["bulk_remove"]).unwrap();
    let intent = &json["content"]["dispatch"]["intents"][0];
    assert_eq!(intent["value"], serde_json::json!(["m01", "m02"]));
    assert_eq!(intent["outcome"], "removed 2 menus");
    assert_eq!(json["content"]["total"], 10);
    assert!(json["content"]["screen"]["bulk"].is_null());
}

#[test]
fn test_bulk_remove_without_selection_is_ignored() {
    let world = twelve_menus();

    let json = world
        .run_list("menus", "menus", &["--event", "bulk-remove"])
        .unwrap()
        .json()
        .unwrap();

    assert_intents(&json, &[]).unwrap();
    assert_eq!(json["content"]["total"], 12);
}

#[test]
fn test_checkbox_click_toggles_selection() {
    let world = twelve_menus();

    let json = world
        .run_list("menus", "menus", &["--event", "select:2"])
        .unwrap()
        .json()
        .unwrap();

    assert_intents(&json, &["toggle_selection"]).unwrap();
    assert_eq!(json["content"]["dispatch"]["propagation"], "stopped");
    let row = &json["content"]["screen"]["table"]["rows"][2];
    assert_eq!(row["selected"], true);
    assert_eq!(row["cells"][0]["checked"], true);
}

#[test]
fn test_sort_by_items_descending() {
    let world = twelve_menus();

    let json = world
        .run_list("menus", "menus", &["--rows", "10", "--sort", "items:desc"])
        .unwrap()
        .json()
        .unwrap();

    let rows = json["content"]["screen"]["table"]["rows"].as_array().unwrap();
    assert_eq!(rows[0]["id"], "m12");
    assert_eq!(rows[9]["id"], "m03");
}

#[test]
fn test_header_click_sorts_by_title() {
    let world = twelve_menus();

    let json = world
        .run_list("menus", "menus", &["--rows", "10", "--event", "header:1"])
        .unwrap()
        .json()
        .unwrap();

    assert_intents(&json, &["sort_change"]).unwrap();
    let rows = json["content"]["screen"]["table"]["rows"].as_array().unwrap();
    assert_eq!(rows[0]["id"], "m01");
    assert_eq!(rows[1]["id"], "m10");
    assert_eq!(json["content"]["screen"]["table"]["columns"][1]["sort"], "asc");
}
