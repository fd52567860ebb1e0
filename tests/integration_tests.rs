use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db_with_data, rsl, setup_test_db, temp_png};

#[test]
fn test_init_creates_schema() {
    let db_path = setup_test_db("init_schema");

    rsl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    // the reports table exists and is empty
    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM reports", [], |row| row.get(0))
        .expect("query reports");
    assert_eq!(count, 0);
}

#[test]
fn test_add_and_list_reports() {
    let db_path = setup_test_db("add_and_list");
    init_db_with_data(&db_path);

    rsl()
        .args(["--db", &db_path, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("2025-09-01"))
        .stdout(contains("2025-09-15"))
        .stdout(contains("843.50"))
        .stdout(contains("2 report(s)."));
}

#[test]
fn test_list_period_filter() {
    let db_path = setup_test_db("list_period");
    init_db_with_data(&db_path);

    rsl()
        .args(["--db", &db_path, "--test", "list", "--period", "2025-09-01"])
        .assert()
        .success()
        .stdout(contains("2025-09-01"))
        .stdout(contains("2025-09-15").not());
}

#[test]
fn test_list_empty_db() {
    let db_path = setup_test_db("list_empty");

    rsl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rsl()
        .args(["--db", &db_path, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("No saved reports."));
}

#[test]
fn test_report_daily_aggregation() {
    let db_path = setup_test_db("daily_aggregation");

    rsl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    // {supplyCards: 2, exchangeCards: 3, supplyTotal: 10, exchangeAmount: 5}
    rsl()
        .args([
            "--db",
            &db_path,
            "add",
            "--date",
            "2025-09-01",
            "--supply-cards",
            "2",
            "--supply-total",
            "10",
            "--exchange-cards",
            "3",
            "--exchange-amount",
            "5",
        ])
        .assert()
        .success();

    // {supplyCards: 1, exchangeCards: 0, supplyTotal: 0, exchangeAmount: 0}
    rsl()
        .args([
            "--db",
            &db_path,
            "add",
            "--date",
            "2025-09-01",
            "--supply-cards",
            "1",
        ])
        .assert()
        .success();

    rsl()
        .args(["--db", &db_path, "--test", "report", "2025-09-01"])
        .assert()
        .success()
        .stdout(contains("Operations:     2"))
        .stdout(contains("Supply cards:   3"))
        .stdout(contains("Exchange cards: 3"))
        .stdout(contains("15.00"));
}

#[test]
fn test_report_empty_day() {
    let db_path = setup_test_db("report_empty_day");

    rsl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rsl()
        .args(["--db", &db_path, "--test", "report", "2030-01-01"])
        .assert()
        .success()
        .stdout(contains("No operations recorded."));
}

#[test]
fn test_add_with_unparseable_numbers_defaults_to_zero() {
    let db_path = setup_test_db("add_parse_default");

    rsl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    // parse failures become 0, never an error
    rsl()
        .args([
            "--db",
            &db_path,
            "add",
            "--date",
            "2025-09-01",
            "--supply-cards",
            "abc",
            "--supply-total",
            "12x.9",
        ])
        .assert()
        .success();

    rsl()
        .args(["--db", &db_path, "--test", "report", "2025-09-01"])
        .assert()
        .success()
        .stdout(contains("Operations:     1"))
        .stdout(contains("Supply cards:   0"))
        .stdout(contains("0.00"));
}

#[test]
fn test_add_and_delete_report() {
    let db_path = setup_test_db("delete_report");
    init_db_with_data(&db_path);

    // Delete report #1 -- answer 'y' to confirmation prompt
    rsl()
        .args(["--db", &db_path, "--test", "del", "1"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("deleted"));

    rsl()
        .args(["--db", &db_path, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("2025-09-01").not())
        .stdout(contains("2025-09-15"));
}

#[test]
fn test_delete_cancelled_keeps_report() {
    let db_path = setup_test_db("delete_cancelled");
    init_db_with_data(&db_path);

    rsl()
        .args(["--db", &db_path, "--test", "del", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled."));

    rsl()
        .args(["--db", &db_path, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("2025-09-01"));
}

#[test]
fn test_delete_nonexistent_report_succeeds() {
    let db_path = setup_test_db("delete_nonexistent");
    init_db_with_data(&db_path);

    // the command must not error and must not change the stored count
    rsl()
        .args(["--db", &db_path, "--test", "del", "999"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("nothing to delete"));

    rsl()
        .args(["--db", &db_path, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("2 report(s)."));
}

#[test]
fn test_capture_non_image_is_silently_ignored() {
    let db_path = setup_test_db("capture_non_image");

    rsl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    // a text file pretending to be a receipt
    let mut fake = std::env::temp_dir();
    fake.push("capture_non_image_receipt.png");
    std::fs::write(&fake, b"this is not an image at all").unwrap();

    rsl()
        .args([
            "--db",
            &db_path,
            "--test",
            "capture",
            fake.to_str().unwrap(),
            "--yes",
        ])
        .assert()
        .success()
        .stdout(contains("does not look like an image"));

    // flow stayed idle: nothing was captured
    rsl()
        .args(["--db", &db_path, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("No saved reports."));
}

#[test]
fn test_capture_missing_file_fails() {
    let db_path = setup_test_db("capture_missing_file");

    rsl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rsl()
        .args([
            "--db",
            &db_path,
            "--test",
            "capture",
            "/definitely/not/there.png",
            "--yes",
        ])
        .assert()
        .failure()
        .stderr(contains("No image selected"));
}

#[cfg(unix)]
#[test]
fn test_capture_with_stub_engine_saves_report() {
    use std::os::unix::fs::PermissionsExt;

    let db_path = setup_test_db("capture_stub_engine");

    rsl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    // stand-in OCR binary: prints a fixed receipt text, ignores its args
    let mut script = std::env::temp_dir();
    script.push("capture_stub_engine_ocr.sh");
    std::fs::write(&script, "#!/bin/sh\necho \"12 500.50 6000.00 3 250.75\"\n").unwrap();
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

    let image = temp_png("capture_stub_engine");

    rsl()
        .args([
            "--db",
            &db_path,
            "--test",
            "capture",
            &image,
            "--yes",
            "--date",
            "2025-09-20",
            "--notes",
            "evening shift",
            "--ocr",
            script.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(contains("saved for 2025-09-20"));

    rsl()
        .args(["--db", &db_path, "--test", "list", "--period", "2025-09-20"])
        .assert()
        .success()
        .stdout(contains("6000.00"))
        .stdout(contains("250.75"))
        .stdout(contains("evening shift"));
}

#[cfg(unix)]
#[test]
fn test_capture_engine_failure_resets_and_fails() {
    use std::os::unix::fs::PermissionsExt;

    let db_path = setup_test_db("capture_engine_failure");

    rsl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    let mut script = std::env::temp_dir();
    script.push("capture_engine_failure_ocr.sh");
    std::fs::write(&script, "#!/bin/sh\necho \"cannot read image\" >&2\nexit 1\n").unwrap();
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

    let image = temp_png("capture_engine_failure");

    rsl()
        .args([
            "--db",
            &db_path,
            "--test",
            "capture",
            &image,
            "--yes",
            "--ocr",
            script.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(contains("Recognition failed"));

    // nothing was saved
    rsl()
        .args(["--db", &db_path, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("No saved reports."));
}

#[test]
fn test_db_info_and_check() {
    let db_path = setup_test_db("db_info_check");
    init_db_with_data(&db_path);

    rsl()
        .args(["--db", &db_path, "--test", "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("Total reports:"))
        .stdout(contains("Integrity check passed."));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("log_operations");
    init_db_with_data(&db_path);

    rsl()
        .args(["--db", &db_path, "--test", "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log"))
        .stdout(contains("add"));
}

#[test]
fn test_backup_creates_copy() {
    let db_path = setup_test_db("backup_copy");
    init_db_with_data(&db_path);

    let dest = common::temp_out("backup_copy", "sqlite");

    rsl()
        .args(["--db", &db_path, "--test", "backup", "--file", &dest])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    assert!(std::path::Path::new(&dest).exists());
}
