#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rsl() -> Command {
    cargo_bin_cmd!("rsupplylog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rsupplylog.sqlite", name));
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

/// Minimal valid-looking PNG payload: the magic bytes plus some filler.
/// Enough for the sniffer; no engine in the test suite ever decodes it.
pub fn tiny_png() -> Vec<u8> {
    let mut bytes = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    bytes.extend_from_slice(&[0x00; 32]);
    bytes
}

/// Write a tiny PNG file into tempdir and return its path.
pub fn temp_png(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_receipt.png", name));
    fs::write(&path, tiny_png()).expect("write test image");
    path.to_string_lossy().to_string()
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    // init DB (creates tables)
    rsl()
        .args(["--db", db_path, "--test", "init"]) // uses --test init to create schema
        .assert()
        .success();

    // add a couple of reports via CLI
    rsl()
        .args([
            "--db",
            db_path,
            "add",
            "--date",
            "2025-09-01",
            "--time",
            "09:30",
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

    rsl()
        .args([
            "--db",
            db_path,
            "add",
            "--date",
            "2025-09-15",
            "--time",
            "14:00",
            "--supply-cards",
            "7",
            "--supply-amount",
            "120.50",
            "--supply-total",
            "843.50",
        ])
        .assert()
        .success();
}
