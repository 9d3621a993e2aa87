use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{Sandbox, rcardio};

#[test]
fn test_init_in_test_mode_creates_only_storage() {
    let sb = Sandbox::new();

    sb.cmd()
        .args(["--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert!(sb.storage_dir().is_dir());
    assert!(!sb.config_path().exists());
}

#[test]
fn test_init_writes_config_with_home() {
    let sb = Sandbox::new();

    sb.cmd()
        .args(["init", "--home-lat", "45.46", "--home-lng", "-9.19"])
        .assert()
        .success();

    let conf = fs::read_to_string(sb.config_path()).unwrap();
    assert!(conf.contains("home_location"));

    sb.cmd()
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("storage_key: workouts").and(contains("map_zoom: 13")));
}

#[test]
fn test_init_rejects_out_of_range_home() {
    let sb = Sandbox::new();

    sb.cmd()
        .args(["init", "--home-lat", "95", "--home-lng", "9"])
        .assert()
        .failure()
        .stderr(contains("latitude"));
}

#[test]
fn test_list_on_empty_storage() {
    let sb = Sandbox::new();

    sb.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(contains("No workouts logged yet."));
}

#[test]
fn test_add_running_is_saved_and_listed() {
    let sb = Sandbox::new();
    sb.add_running(45.0, 9.0, "5", "30", "170");

    let records = sb.stored();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["kind"], "running");
    assert_eq!(records[0]["distanceKm"], 5.0);
    assert_eq!(records[0]["durationMin"], 30.0);
    assert_eq!(records[0]["cadenceStepsPerMin"], 170.0);
    assert!(records[0].get("elevationGainM").is_none());
    assert!(records[0].get("pace").is_none());

    sb.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(
            contains("Running ")
                .and(contains("6.00 min/km"))
                .and(contains("170 spm")),
        );
}

#[test]
fn test_add_cycling_reports_speed() {
    let sb = Sandbox::new();
    sb.add_cycling(45.0, 9.0, "20", "60", "300");

    sb.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(
            contains("Cycling ")
                .and(contains("20.00 km/h"))
                .and(contains("300 m")),
        );
}

#[test]
fn test_workouts_are_listed_in_creation_order() {
    let sb = Sandbox::new();
    sb.add_running(45.0, 9.0, "5", "30", "170");
    sb.add_cycling(45.1, 9.1, "20", "60", "0");
    sb.add_running(45.2, 9.2, "10", "55", "165");

    let kinds: Vec<String> = sb
        .stored()
        .iter()
        .map(|r| r["kind"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(kinds, ["running", "cycling", "running"]);

    let out = sb.cmd().arg("list").output().unwrap();
    let stdout = String::from_utf8_lossy(&out.stdout);
    let first = stdout.find("6.00 min/km").unwrap();
    let second = stdout.find("20.00 km/h").unwrap();
    let third = stdout.find("5.50 min/km").unwrap();
    assert!(first < second && second < third, "{stdout}");
}

#[test]
fn test_invalid_input_is_rejected_and_not_saved() {
    let sb = Sandbox::new();

    sb.cmd()
        .args(["add", "--lat", "45", "--lng", "9"])
        .args(["--distance", "abc", "--duration", "30", "--cadence", "170"])
        .assert()
        .failure()
        .stderr(contains("distance must be a number"));

    sb.cmd()
        .args(["add", "--kind", "cycling", "--lat", "45", "--lng", "9"])
        .args(["--distance", "10", "--duration", "-5", "--elevation", "100"])
        .assert()
        .failure()
        .stderr(contains("duration must be a positive number"));

    assert!(!sb.slot_path().exists());
}

#[test]
fn test_negative_elevation_is_rejected_zero_is_not() {
    let sb = Sandbox::new();

    sb.cmd()
        .args(["add", "--kind", "cycling", "--lat", "45", "--lng", "9"])
        .args(["--distance", "10", "--duration", "30", "--elevation", "-1"])
        .assert()
        .failure()
        .stderr(contains("elevation gain must not be negative"));

    sb.add_cycling(45.0, 9.0, "10", "30", "0");
    assert_eq!(sb.stored().len(), 1);
}

#[test]
fn test_out_of_range_location_is_rejected() {
    let sb = Sandbox::new();

    sb.cmd()
        .args(["add", "--lat", "91", "--lng", "9"])
        .args(["--distance", "5", "--duration", "30", "--cadence", "170"])
        .assert()
        .failure()
        .stderr(contains("latitude 91 is outside"));
}

#[test]
fn test_markers_are_drawn_when_home_is_configured() {
    let sb = Sandbox::with_home(45.0, 9.0);
    sb.add_running(45.01, 9.01, "5", "30", "170");

    sb.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(
            contains("Map centered on (45.00000, 9.00000) (zoom 13)")
                .and(contains("running-popup")),
        );
}

#[test]
fn test_show_centers_on_the_selected_workout() {
    let sb = Sandbox::with_home(45.0, 9.0);
    sb.add_cycling(46.5, 11.25, "30", "90", "500");

    let id = sb.stored()[0]["id"].as_str().unwrap().to_string();

    sb.cmd()
        .args(["show", &id])
        .assert()
        .success()
        .stdout(
            contains("Map centered on (46.50000, 11.25000) (zoom 13, animated)")
                .and(contains(id.as_str())),
        );
}

#[test]
fn test_show_unknown_id_fails() {
    let sb = Sandbox::new();

    sb.cmd()
        .args(["show", "does-not-exist"])
        .assert()
        .failure()
        .stderr(contains("Workout not found"));
}

#[test]
fn test_reset_force_clears_history() {
    let sb = Sandbox::new();
    sb.add_running(45.0, 9.0, "5", "30", "170");
    sb.add_cycling(45.0, 9.0, "20", "60", "300");

    sb.cmd()
        .args(["reset", "--force"])
        .assert()
        .success()
        .stdout(contains("2 workout(s) deleted."));

    assert!(!sb.slot_path().exists());

    sb.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(contains("No workouts logged yet."));
}

#[test]
fn test_reset_without_confirmation_keeps_history() {
    let sb = Sandbox::new();
    sb.add_running(45.0, 9.0, "5", "30", "170");

    sb.cmd()
        .arg("reset")
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled."));

    assert_eq!(sb.stored().len(), 1);
}

#[test]
fn test_corrupt_storage_starts_empty_with_diagnostic() {
    let sb = Sandbox::new();
    fs::create_dir_all(sb.storage_dir()).unwrap();
    fs::write(sb.slot_path(), "{ this is not json").unwrap();

    sb.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(contains("Stored workouts are corrupt").and(contains("No workouts logged yet.")));
}

#[test]
fn test_bad_record_is_skipped_good_ones_survive() {
    let sb = Sandbox::new();
    sb.add_running(45.0, 9.0, "5", "30", "170");

    let mut records = sb.stored();
    records.push(serde_json::json!({ "id": "broken", "kind": "running" }));
    fs::write(sb.slot_path(), serde_json::to_string(&records).unwrap()).unwrap();

    sb.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(
            contains("1 entry skipped")
                .and(contains("record #2"))
                .and(contains("6.00 min/km")),
        );
}

#[test]
fn test_legacy_records_are_loaded() {
    let sb = Sandbox::new();
    fs::create_dir_all(sb.storage_dir()).unwrap();
    fs::write(
        sb.slot_path(),
        r#"[{"date":"2024-05-01T10:00:00.000Z","id":"1714557600000","coords":[45.0,9.0],
            "distance":5,"duration":25,"type":"running","temp":178,"pace":5,
            "description":"Running on May 1"}]"#,
    )
    .unwrap();

    sb.cmd()
        .args(["show", "1714557600000"])
        .assert()
        .success()
        .stdout(contains("5.00 min/km").and(contains("178 spm")));
}

#[test]
fn test_unknown_subcommand_fails() {
    rcardio().arg("frobnicate").assert().failure();
}
