use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{bl, init_db_with_data, setup_test_db};

#[test]
fn test_status_shows_age_and_latest_measurements() {
    let db_path = setup_test_db("status");
    init_db_with_data(&db_path);

    // A newer weight must win over the June 1st one
    bl().args([
        "--db",
        &db_path,
        "add",
        "weight",
        "7.4",
        "--at",
        "2025-07-01T08:00:00",
    ])
    .assert()
    .success();

    bl().args(["--db", &db_path, "status"])
        .assert()
        .success()
        .stdout(contains("Nina"))
        .stdout(contains("7.4 kg"))
        .stdout(contains("62 cm"))
        .stdout(contains("Milestones"));
}

#[test]
fn test_status_default_pinned_milestones_toggle() {
    let db_path = setup_test_db("status_pins");
    init_db_with_data(&db_path);

    // Default pins show as pending
    bl().args(["--db", &db_path, "status"])
        .assert()
        .success()
        .stdout(contains("Smiled"))
        .stdout(contains("Sat up"))
        .stdout(contains("First tooth"));

    bl().args([
        "--db",
        &db_path,
        "add",
        "milestone",
        "smiled",
        "--at",
        "2025-04-01T09:00:00",
    ])
    .assert()
    .success();

    // Logged milestone now carries its date
    bl().args(["--db", &db_path, "status"])
        .assert()
        .success()
        .stdout(contains("Smiled (2025-04-01)"));
}

#[test]
fn test_milestones_pin_and_unpin() {
    let db_path = setup_test_db("milestone_pins");
    init_db_with_data(&db_path);

    bl().args(["--db", &db_path, "milestones", "pin", "first-step"])
        .assert()
        .success()
        .stdout(contains("First steps pinned."));

    bl().args(["--db", &db_path, "milestones"])
        .assert()
        .success()
        .stdout(contains("First steps (pending)"));

    bl().args(["--db", &db_path, "milestones", "unpin", "first-step"])
        .assert()
        .success()
        .stdout(contains("First steps unpinned."));

    bl().args(["--db", &db_path, "milestones", "unpin", "first-step"])
        .assert()
        .success()
        .stdout(contains("was not pinned"));
}

#[test]
fn test_vaccines_take_undo_round_trip() {
    let db_path = setup_test_db("vaccines");
    init_db_with_data(&db_path);

    bl().args(["--db", &db_path, "vaccines", "take", "bcg"])
        .assert()
        .success()
        .stdout(contains("BCG marked as taken."));

    // Taking twice is a no-op
    bl().args(["--db", &db_path, "vaccines", "take", "bcg"])
        .assert()
        .success()
        .stdout(contains("already marked"));

    // The referencing event shows up in the diary
    bl().args(["--db", &db_path, "list", "--filter", "vaccine"])
        .assert()
        .success()
        .stdout(contains("BCG"));

    bl().args(["--db", &db_path, "vaccines", "undo", "bcg"])
        .assert()
        .success()
        .stdout(contains("BCG unmarked."));

    // Round trip leaves no referencing event
    bl().args(["--db", &db_path, "list", "--filter", "vaccine"])
        .assert()
        .success()
        .stdout(contains("No entries found"));

    bl().args(["--db", &db_path, "vaccines", "undo", "bcg"])
        .assert()
        .success()
        .stdout(contains("was not marked"));
}

#[test]
fn test_vaccines_unknown_id_is_an_error() {
    let db_path = setup_test_db("vaccines_unknown");
    init_db_with_data(&db_path);

    bl().args(["--db", &db_path, "vaccines", "take", "polio_99"])
        .assert()
        .failure()
        .stderr(contains("Unknown vaccine id"));
}

#[test]
fn test_vaccines_list_groups_and_private_flag() {
    let db_path = setup_test_db("vaccines_list");
    init_db_with_data(&db_path);

    // Public view hides private-only doses
    bl().args(["--db", &db_path, "vaccines"])
        .assert()
        .success()
        .stdout(contains("AT BIRTH"))
        .stdout(contains("12 MONTHS (1 YEAR)"))
        .stdout(contains("BCG"))
        .stdout(contains("Meningococcal B (D1)").not());

    bl().args(["--db", &db_path, "vaccines", "list", "--all"])
        .assert()
        .success()
        .stdout(contains("Meningococcal B (D1)"))
        .stdout(contains("[private]"));
}

#[test]
fn test_growth_merges_same_day_measurements() {
    let db_path = setup_test_db("growth");
    init_db_with_data(&db_path);

    let out = bl()
        .args(["--db", &db_path, "growth"])
        .assert()
        .success()
        .stdout(contains("01/06"))
        .get_output()
        .stdout
        .clone();

    // Weight and length from the same day merge into one row
    let text = String::from_utf8_lossy(&out);
    let row = text
        .lines()
        .find(|l| l.contains("01/06"))
        .expect("growth row for 01/06");
    assert!(row.contains("6.9 kg"), "row: {row}");
    assert!(row.contains("62 cm"), "row: {row}");
}

#[test]
fn test_growth_age_column_uses_month_float() {
    let db_path = setup_test_db("growth_age");
    init_db_with_data(&db_path);

    // Birth 2025-01-01, measurement 2025-06-01 -> 151 days / 30.44 ~ 5.0
    let out = bl()
        .args(["--db", &db_path, "growth"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8_lossy(&out);
    let row = text
        .lines()
        .find(|l| l.contains("01/06"))
        .expect("growth row for 01/06");
    assert!(row.contains("5.0"), "row: {row}");
}

#[test]
fn test_theme_toggle_round_trip() {
    let db_path = setup_test_db("theme");
    init_db_with_data(&db_path);

    bl().args(["--db", &db_path, "theme"])
        .assert()
        .success()
        .stdout(contains("light"));

    bl().args(["--db", &db_path, "theme", "--dark"])
        .assert()
        .success()
        .stdout(contains("dark"));

    bl().args(["--db", &db_path, "theme"])
        .assert()
        .success()
        .stdout(contains("dark"));
}
