use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{bl, init_db_with_data, insert_event_with_id, setup_test_db};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init");

    bl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_profile_set_and_show() {
    let db_path = setup_test_db("profile");

    bl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    bl().args([
        "--db",
        &db_path,
        "profile",
        "--name",
        "Nina",
        "--birth-date",
        "2025-01-01",
    ])
    .assert()
    .success()
    .stdout(contains("Profile updated.").and(contains("Nina")));

    bl().args(["--db", &db_path, "profile"])
        .assert()
        .success()
        .stdout(contains("Nina").and(contains("2025-01-01")));
}

#[test]
fn test_profile_rejects_bad_birth_date() {
    let db_path = setup_test_db("profile_bad_date");

    bl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    bl().args(["--db", &db_path, "profile", "--birth-date", "01/06/2025"])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));
}

#[test]
fn test_add_and_list_grouped_by_day() {
    let db_path = setup_test_db("add_list");
    init_db_with_data(&db_path);

    bl().args(["--db", &db_path, "list"])
        .assert()
        .success()
        // Day headers carry weekday + day + month
        .stdout(contains("SUNDAY, 1 JUNE"))
        .stdout(contains("MONDAY, 2 JUNE"))
        .stdout(contains("Weight"))
        .stdout(contains("6.9 kg"))
        .stdout(contains("Bottle"))
        .stdout(contains("formula · 120 ml"));
}

#[test]
fn test_list_filter_by_kind() {
    let db_path = setup_test_db("list_filter");
    init_db_with_data(&db_path);

    bl().args(["--db", &db_path, "list", "--filter", "bottle"])
        .assert()
        .success()
        .stdout(contains("Bottle").and(contains("Weight").not()));

    bl().args(["--db", &db_path, "list", "--filter", "nonsense"])
        .assert()
        .failure()
        .stderr(contains("Invalid event kind"));
}

#[test]
fn test_list_filter_milestone_meta_category() {
    let db_path = setup_test_db("list_milestones");
    init_db_with_data(&db_path);

    bl().args([
        "--db",
        &db_path,
        "add",
        "milestone",
        "first-tooth",
        "--at",
        "2025-06-03T10:00:00",
    ])
    .assert()
    .success();

    bl().args(["--db", &db_path, "list", "--filter", "milestone"])
        .assert()
        .success()
        .stdout(contains("First tooth").and(contains("Bottle").not()));
}

#[test]
fn test_list_period_filtering() {
    let db_path = setup_test_db("list_period");
    init_db_with_data(&db_path);

    bl().args([
        "--db",
        &db_path,
        "add",
        "bath",
        "--at",
        "2024-12-31T18:00:00",
    ])
    .assert()
    .success();

    // Only the 2024 event
    bl().args(["--db", &db_path, "list", "--period", "2024"])
        .assert()
        .success()
        .stdout(contains("Bath").and(contains("Bottle").not()));

    // A day range covering June 1st only
    bl().args(["--db", &db_path, "list", "--period", "2025-06-01"])
        .assert()
        .success()
        .stdout(contains("Weight").and(contains("Bottle").not()));
}

#[test]
fn test_add_sleep_reports_duration_with_overnight_wrap() {
    let db_path = setup_test_db("sleep");

    bl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    bl().args([
        "--db",
        &db_path,
        "add",
        "sleep",
        "--date",
        "2025-06-01",
        "--start",
        "20:00",
        "--end",
        "07:00",
    ])
    .assert()
    .success()
    .stdout(contains("Slept 11h 0m"));

    // The wake-up lands on the following day
    bl().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("MONDAY, 2 JUNE"))
        .stdout(contains("20:00 → 07:00 (night)"));
}

#[test]
fn test_add_diaper_requires_content() {
    let db_path = setup_test_db("diaper");

    bl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    bl().args(["--db", &db_path, "add", "diaper"])
        .assert()
        .failure()
        .stderr(contains("--pee and/or --poop"));

    bl().args(["--db", &db_path, "add", "diaper", "--pee", "--poop"])
        .assert()
        .success()
        .stdout(contains("pee + poop"));
}

#[test]
fn test_add_measurements_fans_out() {
    let db_path = setup_test_db("measurements");

    bl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    bl().args([
        "--db",
        &db_path,
        "add",
        "measurements",
        "--weight",
        "7.2",
        "--length",
        "64",
        "--at",
        "2025-06-10T09:00:00",
    ])
    .assert()
    .success()
    .stdout(contains("Weight").and(contains("Length")));

    bl().args(["--db", &db_path, "list", "--filter", "weight"])
        .assert()
        .success()
        .stdout(contains("7.2 kg"));

    bl().args(["--db", &db_path, "list", "--filter", "length"])
        .assert()
        .success()
        .stdout(contains("64 cm"));
}

#[test]
fn test_add_rejects_malformed_timestamp() {
    let db_path = setup_test_db("bad_at");

    bl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    bl().args(["--db", &db_path, "add", "bath", "--at", "yesterday"])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));
}

#[test]
fn test_edit_event_in_place() {
    let db_path = setup_test_db("edit");

    bl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    insert_event_with_id(&db_path, "fixed-1", "2025-06-01T10:00:00");

    bl().args([
        "--db",
        &db_path,
        "edit",
        "fixed-1",
        "--notes",
        "first time in the big tub",
    ])
    .assert()
    .success()
    .stdout(contains("updated"));

    bl().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("first time in the big tub"))
        .stdout(contains("(id fixed-1)"));

    bl().args(["--db", &db_path, "edit", "ghost", "--notes", "x"])
        .assert()
        .failure()
        .stderr(contains("No event found"));
}

#[test]
fn test_del_event_by_id() {
    let db_path = setup_test_db("del");

    bl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    insert_event_with_id(&db_path, "fixed-2", "2025-06-01T10:00:00");

    bl().args(["--db", &db_path, "del", "fixed-2", "--yes"])
        .assert()
        .success()
        .stdout(contains("deleted"));

    bl().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No entries found"));

    bl().args(["--db", &db_path, "del", "fixed-2", "--yes"])
        .assert()
        .failure()
        .stderr(contains("No event found"));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("audit_log");
    init_db_with_data(&db_path);

    bl().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log"))
        .stdout(contains("init"))
        .stdout(contains("add"));
}

#[test]
fn test_db_check_and_info() {
    let db_path = setup_test_db("db_info");
    init_db_with_data(&db_path);

    bl().args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"));

    bl().args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Schema version"))
        .stdout(contains("Events:"));
}
