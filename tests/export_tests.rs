use predicates::str::contains;
use std::fs;

mod common;
use common::{bl, init_db_with_data, setup_test_db, temp_out};

#[test]
fn test_export_csv_contains_events() {
    let db_path = setup_test_db("export_csv");
    let out = temp_out("export_csv", "csv");
    init_db_with_data(&db_path);

    bl().args(["--db", &db_path, "export", "--file", &out, "--force"])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read csv");
    assert!(content.contains("id,date,time,kind,category,detail,notes"));
    assert!(content.contains("weight"));
    assert!(content.contains("bottle"));
    assert!(content.contains("2025-06-01"));
}

#[test]
fn test_export_json_is_valid_and_complete() {
    let db_path = setup_test_db("export_json");
    let out = temp_out("export_json", "json");
    init_db_with_data(&db_path);

    bl().args([
        "--db", &db_path, "export", "--format", "json", "--file", &out, "--force",
    ])
    .assert()
    .success()
    .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("read json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = rows.as_array().expect("array of rows");
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().any(|r| r["kind"] == "length"));
}

#[test]
fn test_export_range_filters_events() {
    let db_path = setup_test_db("export_range");
    let out = temp_out("export_range", "csv");
    init_db_with_data(&db_path);

    bl().args([
        "--db",
        &db_path,
        "export",
        "--file",
        &out,
        "--range",
        "2025-06-01",
        "--force",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read csv");
    assert!(content.contains("weight"));
    assert!(content.contains("length"));
    assert!(!content.contains("bottle"));
}

#[test]
fn test_export_rejects_relative_path_and_bad_range() {
    let db_path = setup_test_db("export_bad");
    init_db_with_data(&db_path);

    bl().args(["--db", &db_path, "export", "--file", "out.csv", "--force"])
        .assert()
        .failure()
        .stderr(contains("absolute"));

    let out = temp_out("export_bad", "csv");
    bl().args([
        "--db", &db_path, "export", "--file", &out, "--range", "June", "--force",
    ])
    .assert()
    .failure()
    .stderr(contains("range"));
}

#[test]
fn test_export_empty_range_warns_and_writes_nothing() {
    let db_path = setup_test_db("export_empty");
    let out = temp_out("export_empty", "csv");
    init_db_with_data(&db_path);

    bl().args([
        "--db", &db_path, "export", "--file", &out, "--range", "1999", "--force",
    ])
    .assert()
    .success()
    .stdout(contains("No events found"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_export_xlsx_and_pdf_write_files() {
    let db_path = setup_test_db("export_binary");
    init_db_with_data(&db_path);

    let xlsx = temp_out("export_binary", "xlsx");
    bl().args([
        "--db", &db_path, "export", "--format", "xlsx", "--file", &xlsx, "--force",
    ])
    .assert()
    .success()
    .stdout(contains("XLSX export completed"));
    assert!(fs::metadata(&xlsx).map(|m| m.len() > 0).unwrap_or(false));

    let pdf = temp_out("export_binary", "pdf");
    bl().args([
        "--db", &db_path, "export", "--format", "pdf", "--file", &pdf, "--force",
    ])
    .assert()
    .success()
    .stdout(contains("PDF export completed"));

    let pdf_bytes = fs::read(&pdf).expect("read pdf");
    assert!(pdf_bytes.starts_with(b"%PDF"));
}

#[test]
fn test_backup_plain_and_compressed() {
    let db_path = setup_test_db("backup");
    init_db_with_data(&db_path);

    let dest = temp_out("backup_plain", "sqlite");
    bl().args(["--db", &db_path, "backup", "--file", &dest])
        .assert()
        .success()
        .stdout(contains("Backup created"));
    assert!(std::path::Path::new(&dest).exists());

    let dest2 = temp_out("backup_gz", "sqlite");
    let expected = if cfg!(target_os = "windows") {
        std::path::Path::new(&dest2).with_extension("zip")
    } else {
        std::path::Path::new(&dest2).with_extension("tar.gz")
    };
    fs::remove_file(&expected).ok();

    bl().args(["--db", &db_path, "backup", "--file", &dest2, "--compress"])
        .assert()
        .success()
        .stdout(contains("Compressed"));

    assert!(expected.exists());
    // The uncompressed intermediate copy is removed
    assert!(!std::path::Path::new(&dest2).exists());
}

#[test]
fn test_backup_missing_database_fails() {
    let db_path = setup_test_db("backup_missing");
    let dest = temp_out("backup_missing", "sqlite");

    bl().args(["--db", &db_path, "backup", "--file", &dest])
        .assert()
        .failure()
        .stderr(contains("database not found"));
}
