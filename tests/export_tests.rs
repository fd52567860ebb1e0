use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use std::path::Path;

mod common;
use common::{init_db_with_data, rsl, setup_test_db, temp_out};

#[test]
fn test_export_csv_all() {
    let db_path = setup_test_db("export_csv_all");
    init_db_with_data(&db_path);

    let out = temp_out("export_csv_all", "csv");

    rsl()
        .args([
            "--db", &db_path, "--test", "export", "--format", "csv", "--file", &out, "--force",
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("id,date,time,supply_cards"));
    assert!(content.contains("2025-09-01"));
    assert!(content.contains("843.5"));
}

#[test]
fn test_export_csv_range_filters_rows() {
    let db_path = setup_test_db("export_csv_range");
    init_db_with_data(&db_path);

    let out = temp_out("export_csv_range", "csv");

    rsl()
        .args([
            "--db",
            &db_path,
            "--test",
            "export",
            "--format",
            "csv",
            "--file",
            &out,
            "--range",
            "2025-09-01",
            "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("2025-09-01"));
    assert!(!content.contains("2025-09-15"));
}

#[test]
fn test_export_json_has_fields() {
    let db_path = setup_test_db("export_json_fields");
    init_db_with_data(&db_path);

    let out = temp_out("export_json_fields", "json");

    rsl()
        .args([
            "--db", &db_path, "--test", "export", "--format", "json", "--file", &out, "--force",
        ])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("read exported json");
    let parsed: serde_json::Value = serde_json::from_str(&content).expect("valid json");

    let rows = parsed.as_array().expect("array of reports");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["supply_cards"], 2);
    assert_eq!(rows[1]["supply_total"], 843.5);
}

#[test]
fn test_export_xlsx_writes_file() {
    let db_path = setup_test_db("export_xlsx_file");
    init_db_with_data(&db_path);

    let out = temp_out("export_xlsx_file", "xlsx");

    rsl()
        .args([
            "--db", &db_path, "--test", "export", "--format", "xlsx", "--file", &out, "--force",
        ])
        .assert()
        .success()
        .stdout(contains("XLSX export completed"));

    let meta = fs::metadata(Path::new(&out)).expect("exported xlsx exists");
    assert!(meta.len() > 0);
}

#[test]
fn test_export_empty_range_warns_and_writes_nothing() {
    let db_path = setup_test_db("export_empty_range");
    init_db_with_data(&db_path);

    let out = temp_out("export_empty_range", "csv");

    rsl()
        .args([
            "--db",
            &db_path,
            "--test",
            "export",
            "--format",
            "csv",
            "--file",
            &out,
            "--range",
            "2030",
            "--force",
        ])
        .assert()
        .success()
        .stdout(contains("No reports found"));

    assert!(!Path::new(&out).exists());
}

#[test]
fn test_export_relative_path_is_rejected() {
    let db_path = setup_test_db("export_relative_path");
    init_db_with_data(&db_path);

    rsl()
        .args([
            "--db",
            &db_path,
            "--test",
            "export",
            "--format",
            "csv",
            "--file",
            "relative.csv",
            "--force",
        ])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_invalid_range_fails() {
    let db_path = setup_test_db("export_invalid_range");
    init_db_with_data(&db_path);

    let out = temp_out("export_invalid_range", "csv");

    rsl()
        .args([
            "--db",
            &db_path,
            "--test",
            "export",
            "--format",
            "csv",
            "--file",
            &out,
            "--range",
            "2025-9",
            "--force",
        ])
        .assert()
        .failure()
        .stderr(contains("Export error").or(contains("unsupported")));
}
