use dashlist_testing::{FixtureBuilder, TestWorld};

fn world() -> TestWorld {
    TestWorld::new()
        .with_fixture("roster", FixtureBuilder::staff_roster().build())
        .with_fixture("menus", FixtureBuilder::menus(3).build())
}

#[test]
fn test_missing_fixture() {
    let world = world();

    let result = world.run(&["channels", "--fixture", "nowhere.json"]).unwrap();

    assert!(!result.success());
    assert!(result.stderr().contains("Failed to read fixture"));
}

#[test]
fn test_unknown_sort_field() {
    let world = world();

    let result = world.run_list("staff", "roster", &["--sort", "color"]).unwrap();

    assert!(!result.success());
}

#[test]
fn test_rows_not_offered() {
    let world = world();

    let result = world.run_list("menus", "menus", &["--rows", "7"]).unwrap();

    assert!(!result.success());
    assert!(result.stderr().contains("--rows 7 is not offered"));
}

#[test]
fn test_unknown_event() {
    let world = world();

    let result = world.run_list("menus", "menus", &["--event", "explode"]).unwrap();

    assert!(!result.success());
    assert!(result.stderr().contains("Unknown event 'explode'"));
}

#[test]
fn test_unknown_saved_tab() {
    let world = world();

    let result = world.run_list("staff", "roster", &["--tab", "9"]).unwrap();

    assert!(!result.success());
    assert!(result.stderr().contains("staff has no saved tab 9"));
}

#[test]
fn test_menus_reject_narrowing_flags() {
    let world = world();

    for flags in [&["--tab", "1"][..], &["--filter", "name=navbar"], &["--search", "nav"]] {
        let result = world.run_list("menus", "menus", flags).unwrap();

        assert!(!result.success(), "{:?} was accepted", flags);
        assert!(result.stderr().contains("menus has no filter bar"));
    }
}

#[test]
fn test_browse_needs_terminal() {
    let world = world();
    let fixture = world.fixture_path("roster");

    let result = world
        .run(&["browse", "staff", "--fixture", fixture.to_str().unwrap()])
        .unwrap();

    assert!(!result.success());
    assert!(result.stderr().contains("interactive terminal"));
}
