#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn bl() -> Command {
    cargo_bin_cmd!("babylog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_babylog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB, set a profile and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    bl().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    bl().args([
        "--db",
        db_path,
        "profile",
        "--name",
        "Nina",
        "--birth-date",
        "2025-01-01",
    ])
    .assert()
    .success();

    bl().args([
        "--db",
        db_path,
        "add",
        "weight",
        "6.9",
        "--at",
        "2025-06-01T08:00:00",
    ])
    .assert()
    .success();

    bl().args([
        "--db",
        db_path,
        "add",
        "length",
        "62",
        "--at",
        "2025-06-01T08:05:00",
    ])
    .assert()
    .success();

    bl().args([
        "--db",
        db_path,
        "add",
        "bottle",
        "formula",
        "--amount",
        "120",
        "--at",
        "2025-06-02T12:00:00",
    ])
    .assert()
    .success();
}

/// Insert an event with a fixed id through the library API, so CLI tests
/// can address it deterministically.
pub fn insert_event_with_id(db_path: &str, id: &str, timestamp: &str) {
    use babylog::db::pool::DbPool;
    use babylog::models::LoggedEvent;
    use babylog::models::event::EventDetail;
    use babylog::state::AppState;

    let pool = DbPool::open_ready(db_path).expect("open db");
    let mut state = AppState::load(&pool).expect("load state");

    state.add_event(LoggedEvent {
        id: id.to_string(),
        timestamp: timestamp.to_string(),
        notes: None,
        detail: EventDetail::Bath,
    });

    state.save_events(&pool).expect("save events");
}
