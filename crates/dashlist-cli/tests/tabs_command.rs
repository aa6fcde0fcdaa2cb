use dashlist_testing::{FixtureBuilder, TestWorld};

#[test]
fn test_save_list_and_delete() {
    let world = TestWorld::new();

    let saved = world
        .run_json(&["tabs", "save", "staff", "Active", "--filter", "status=active"])
        .unwrap();
    assert!(saved.success(), "stderr: {}", saved.stderr());
    let json = saved.json().unwrap();
    assert_eq!(json["badge"]["label"], "Saved tab 'Active'");
    assert_eq!(json["content"]["tabs"][0]["id"], 1);

    world
        .run_json(&["tabs", "save", "staff", "Searching", "--search", "ada"])
        .unwrap();

    let listed = world.run_json(&["tabs", "list", "staff"]).unwrap().json().unwrap();
    let tabs = listed["content"]["tabs"].as_array().unwrap();
    assert_eq!(tabs.len(), 2);
    assert_eq!(tabs[0]["filters"]["status"], serde_json::json!(["active"]));
    assert_eq!(tabs[1]["id"], 2);
    assert_eq!(tabs[1]["search"], "ada");

    let deleted = world.run_json(&["tabs", "delete", "staff", "1"]).unwrap().json().unwrap();
    assert_eq!(deleted["badge"]["label"], "Deleted tab 1");
    assert_eq!(deleted["content"]["tabs"].as_array().unwrap().len(), 1);
}

#[test]
fn test_saving_same_label_replaces_tab() {
    let world = TestWorld::new();

    world
        .run_json(&["tabs", "save", "staff", "Team", "--filter", "status=active"])
        .unwrap();
    world
        .run_json(&["tabs", "save", "staff", "Team", "--filter", "status=deactivated"])
        .unwrap();

    let listed = world.run_json(&["tabs", "list", "staff"]).unwrap().json().unwrap();
    let tabs = listed["content"]["tabs"].as_array().unwrap();
    assert_eq!(tabs.len(), 1);
    assert_eq!(tabs[0]["filters"]["status"], serde_json::json!(["deactivated"]));
}

#[test]
fn test_empty_list_suggests_saving() {
    let world = TestWorld::new();

    let result = world.run(&["tabs", "list", "staff"]).unwrap();

    assert!(result.success());
    assert!(result.stdout().contains("No saved tabs for staff."));
    assert!(result.stdout().contains("dashlist tabs save staff NAME"));
}

#[test]
fn test_channels_have_no_tabs() {
    let world = TestWorld::new();

    let result = world.run(&["tabs", "save", "channels", "Mine"]).unwrap();

    assert!(!result.success());
    assert!(result.stderr().contains("channels has no filter bar"));
}

#[test]
fn test_delete_unknown_tab_fails() {
    let world = TestWorld::new();

    let result = world.run(&["tabs", "delete", "staff", "7"]).unwrap();

    assert!(!result.success());
    assert!(result.stderr().contains("staff has no saved tab 7"));
}

fn tab_ids_exhausted() -> TestWorld {
    let world = TestWorld::new().with_fixture("roster", FixtureBuilder::staff_roster().build());
    std::fs::write(
        world.data_dir().join("tabs.toml"),
        "[[lists.staff]]\nid = 4294967295\nlabel = \"Last\"\n",
    )
    .unwrap();
    world
}

#[test]
fn test_save_fails_when_tab_ids_run_out() {
    let world = tab_ids_exhausted();

    let result = world.run(&["tabs", "save", "staff", "New"]).unwrap();

    assert!(!result.success());
    assert!(result.stderr().contains("staff has no tab id left for 'New'"));
    let stored = world.read_data_file("tabs.toml").unwrap();
    assert!(!stored.contains("New"));
}

#[test]
fn test_save_tab_event_reports_exhausted_ids() {
    let world = tab_ids_exhausted();

    let result = world
        .run_list("staff", "roster", &["--event", "save-tab:New"])
        .unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json().unwrap();
    let intent = &json["content"]["dispatch"]["intents"][0];
    assert_eq!(intent["outcome"], "no tab id left, tab 'New' not saved");
    assert_eq!(json["content"]["screen"]["filter_bar"]["tabs"].as_array().unwrap().len(), 2);
}
