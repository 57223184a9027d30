use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{bl, init_db_with_data, setup_test_db};

#[test]
fn test_agenda_add_list_del() {
    let db_path = setup_test_db("agenda");
    init_db_with_data(&db_path);

    bl().args([
        "--db",
        &db_path,
        "agenda",
        "add",
        "Routine pediatrician",
        "--date",
        "2031-01-15",
        "--time",
        "14:30",
        "--kind",
        "doctor",
    ])
    .assert()
    .success()
    .stdout(contains("Reminder 'Routine pediatrician' added."));

    bl().args([
        "--db",
        &db_path,
        "agenda",
        "add",
        "One year shots",
        "--date",
        "2031-01-05",
        "--time",
        "09:00",
        "--kind",
        "vaccine",
    ])
    .assert()
    .success();

    // Soonest first
    let out = bl()
        .args(["--db", &db_path, "agenda"])
        .assert()
        .success()
        .stdout(contains("Routine pediatrician").and(contains("One year shots")))
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8_lossy(&out);
    let shots = text.find("One year shots").unwrap();
    let routine = text.find("Routine pediatrician").unwrap();
    assert!(shots < routine, "reminders not sorted by date:\n{text}");

    // The nearest upcoming reminder feeds the status widget
    bl().args(["--db", &db_path, "widgets", "add", "next-reminder"])
        .assert()
        .success();

    bl().args(["--db", &db_path, "status"])
        .assert()
        .success()
        .stdout(contains("Next appointment"))
        .stdout(contains("One year shots"));
}

#[test]
fn test_agenda_validates_date_and_time() {
    let db_path = setup_test_db("agenda_invalid");
    init_db_with_data(&db_path);

    bl().args([
        "--db", &db_path, "agenda", "add", "X", "--date", "soon", "--time", "09:00",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid date"));

    bl().args([
        "--db",
        &db_path,
        "agenda",
        "add",
        "X",
        "--date",
        "2031-01-01",
        "--time",
        "9 o'clock",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid time"));
}

#[test]
fn test_agenda_del_unknown_id() {
    let db_path = setup_test_db("agenda_del");
    init_db_with_data(&db_path);

    bl().args(["--db", &db_path, "agenda", "del", "ghost"])
        .assert()
        .failure()
        .stderr(contains("No reminder found"));
}

#[test]
fn test_docs_add_list_del() {
    let db_path = setup_test_db("docs");
    init_db_with_data(&db_path);

    bl().args([
        "--db",
        &db_path,
        "docs",
        "add",
        "Birth certificate",
        "--kind",
        "id",
        "--number",
        "123456789",
    ])
    .assert()
    .success()
    .stdout(contains("Document 'Birth certificate' added."));

    bl().args(["--db", &db_path, "docs"])
        .assert()
        .success()
        .stdout(contains("Birth certificate"))
        .stdout(contains("123456789"));

    bl().args(["--db", &db_path, "docs", "del", "ghost"])
        .assert()
        .failure()
        .stderr(contains("No document found"));
}

#[test]
fn test_widgets_add_list_del() {
    let db_path = setup_test_db("widgets");
    init_db_with_data(&db_path);

    bl().args(["--db", &db_path, "widgets"])
        .assert()
        .success()
        .stdout(contains("No widgets configured"));

    bl().args(["--db", &db_path, "widgets", "add", "last-milestone"])
        .assert()
        .success()
        .stdout(contains("Widget 'last_milestone' added."));

    bl().args(["--db", &db_path, "widgets"])
        .assert()
        .success()
        .stdout(contains("last_milestone"));

    bl().args(["--db", &db_path, "status"])
        .assert()
        .success()
        .stdout(contains("Last achievement"));

    bl().args(["--db", &db_path, "widgets", "del", "ghost"])
        .assert()
        .failure()
        .stderr(contains("No widget found"));
}
