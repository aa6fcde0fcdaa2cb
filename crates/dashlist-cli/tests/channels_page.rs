use dashlist_testing::assertions::{
    assert_create_enabled, assert_delete_controls, assert_entity_ids, assert_intents,
    assert_limit_alert, assert_row_count, assert_row_kinds, assert_stdout_contains,
};
use dashlist_testing::{FixtureBuilder, TestWorld};
use serde_json::json;

fn shop() -> TestWorld {
    TestWorld::new().with_fixture("shop", FixtureBuilder::channels_at_limit().build())
}

#[test]
fn test_channels_at_limit_end_to_end() {
    let world = shop();

    let result = world.run_list("channels", "shop", &[]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json().unwrap();
    assert_create_enabled(&json, false).unwrap();
    assert_limit_alert(&json, true).unwrap();
    assert_row_count(&json, 2).unwrap();
    assert_delete_controls(&json, 2).unwrap();
    assert_entity_ids(&json, &["1", "2"]).unwrap();

    assert_eq!(json["badge"]["level"], "warning");
    assert_eq!(json["badge"]["label"], "Channel limit reached");
    assert_eq!(json["content"]["screen"]["limit_text"], "2/2 channels used");
    assert_eq!(json["content"]["screen"]["create"]["test_id"], "add-channel");
}

#[test]
fn test_plain_output_shows_banner_and_rows() {
    let world = shop();
    let fixture = world.fixture_path("shop");

    let result = world
        .run(&["channels", "--fixture", fixture.to_str().unwrap()])
        .unwrap();
    assert!(result.success());

    assert_stdout_contains(&result, "Channels (2/2 channels used)").unwrap();
    assert_stdout_contains(&result, "[Create Channel] disabled").unwrap();
    assert_stdout_contains(&result, "! Channel limit reached").unwrap();
    assert_stdout_contains(&result, "A             [Delete]").unwrap();
    assert_stdout_contains(&result, "💡 Tips:").unwrap();
}

#[test]
fn test_minimal_style_prints_ids() {
    let world = shop();
    let fixture = world.fixture_path("shop");

    let result = world
        .run(&["channels", "--fixture", fixture.to_str().unwrap(), "--style", "minimal"])
        .unwrap();

    assert_eq!(result.stdout(), "1\n2\n");
}

#[test]
fn test_empty_list_plain() {
    let world = TestWorld::new().with_fixture("empty", json!({"channels": []}));
    let fixture = world.fixture_path("empty");

    let result = world
        .run(&["channels", "--fixture", fixture.to_str().unwrap()])
        .unwrap();
    assert!(result.success());

    insta::assert_snapshot!(result.stdout(), @r"
    ℹ️ No channels to show

    < Configuration
    Channels
    [Create Channel]

    Channel Name  Actions
    ---------------------
    No channels found
    ");
}

#[test]
fn test_empty_row_spans_all_columns() {
    let world = TestWorld::new().with_fixture("empty", json!({"channels": []}));

    let json = world.run_list("channels", "empty", &[]).unwrap().json().unwrap();

    assert_row_count(&json, 1).unwrap();
    assert_row_kinds(&json, "empty").unwrap();
    let cell = &json["content"]["screen"]["table"]["rows"][0]["cells"][0];
    assert_eq!(cell["type"], "span");
    assert_eq!(cell["colspan"], 2);
    assert_eq!(cell["text"], "No channels found");
}

#[test]
fn test_loading_renders_skeleton() {
    let world = shop();

    let json = world
        .run_list("channels", "shop", &["--loading"])
        .unwrap()
        .json()
        .unwrap();

    assert_eq!(json["content"]["screen"]["state"], "loading");
    assert_row_count(&json, 1).unwrap();
    assert_row_kinds(&json, "skeleton").unwrap();
    let cells = json["content"]["screen"]["table"]["rows"][0]["cells"]
        .as_array()
        .unwrap();
    assert_eq!(cells.len(), 2);
    assert_eq!(json["badge"]["level"], "warning");
}

#[test]
fn test_remove_event_stops_at_control() {
    let world = shop();

    let json = world
        .run_list("channels", "shop", &["--event", "remove:1"])
        .unwrap()
        .json()
        .unwrap();

    assert_intents(&json, &["remove"]).unwrap();
    let dispatch = &json["content"]["dispatch"];
    assert_eq!(dispatch["propagation"], "stopped");
    assert_eq!(dispatch["intents"][0]["value"], "2");
    assert_eq!(dispatch["intents"][0]["outcome"], "removed 1 channels");

    // One channel left: it cannot be removed, and creation is allowed again.
    assert_entity_ids(&json, &["1"]).unwrap();
    assert_delete_controls(&json, 0).unwrap();
    assert_create_enabled(&json, true).unwrap();
    assert_limit_alert(&json, false).unwrap();
}

#[test]
fn test_row_click_opens_entity() {
    let world = shop();

    let json = world
        .run_list("channels", "shop", &["--event", "row:0"])
        .unwrap()
        .json()
        .unwrap();

    assert_intents(&json, &["open"]).unwrap();
    assert_eq!(json["content"]["dispatch"]["propagation"], "continue");
    assert_eq!(json["content"]["dispatch"]["intents"][0]["value"], "1");
}

#[test]
fn test_create_is_ignored_at_limit() {
    let world = shop();

    let json = world
        .run_list("channels", "shop", &["--event", "create"])
        .unwrap()
        .json()
        .unwrap();

    assert_intents(&json, &[]).unwrap();
    assert_row_count(&json, 2).unwrap();
}

#[test]
fn test_create_below_limit_adds_channel() {
    let world = TestWorld::new().with_fixture(
        "shop",
        FixtureBuilder::new()
            .with_limit(dashlist_types::ResourceKind::Channels, 1, 2)
            .with_channel("1", "A")
            .build(),
    );

    let json = world
        .run_list("channels", "shop", &["--event", "create"])
        .unwrap()
        .json()
        .unwrap();

    assert_intents(&json, &["add"]).unwrap();
    assert_entity_ids(&json, &["1", "new-1"]).unwrap();
    assert_create_enabled(&json, false).unwrap();
    assert_eq!(json["content"]["screen"]["limit_text"], "2/2 channels used");
}

#[test]
fn test_last_channel_has_no_delete() {
    let world = TestWorld::new().with_fixture(
        "single",
        FixtureBuilder::new().with_channel("1", "Default").build(),
    );

    let json = world
        .run_list("channels", "single", &["--event", "remove:0"])
        .unwrap()
        .json()
        .unwrap();

    assert_delete_controls(&json, 0).unwrap();
    assert_intents(&json, &[]).unwrap();
    assert_eq!(json["content"]["dispatch"]["propagation"], "stopped");
    assert_create_enabled(&json, true).unwrap();
}

#[test]
fn test_search_cannot_hide_delete_controls() {
    let world = shop();

    let result = world.run_list("channels", "shop", &["--search", "A"]).unwrap();

    assert!(!result.success());
    assert!(result.stderr().contains("channels has no filter bar"));

    // Both channels stay removable when nothing narrows the list.
    let json = world.run_list("channels", "shop", &[]).unwrap().json().unwrap();
    assert_delete_controls(&json, 2).unwrap();
}

#[test]
fn test_locale_overrides_from_config() {
    let world = shop().with_config("[locale_overrides]\n\"channels.create\" = \"Add channel\"\n");

    let json = world.run_list("channels", "shop", &[]).unwrap().json().unwrap();

    assert_eq!(json["content"]["screen"]["create"]["label"], "Add channel");
}

#[test]
fn test_upstream_error_is_shown() {
    let world = shop();

    let json = world
        .run_list("channels", "shop", &["--error", "Could not load channels"])
        .unwrap()
        .json()
        .unwrap();

    assert_eq!(json["content"]["screen"]["error"], "Could not load channels");
    assert_eq!(json["badge"]["level"], "error");
}

#[test]
fn test_logs_stay_off_stdout() {
    let world = shop().with_env("RUST_LOG", "debug");

    let result = world
        .run_list("channels", "shop", &["--event", "remove:1"])
        .unwrap();

    assert!(result.success());
    assert!(result.stderr().contains("applying intent"));
    assert!(result.json().is_ok(), "stdout must stay valid JSON");
}
