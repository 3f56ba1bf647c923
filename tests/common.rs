#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use blocktracker::Engine;
use chrono::NaiveDate;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn tracker() -> Command {
    cargo_bin_cmd!("tracker")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_blocktracker.sqlite", name));
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

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

pub fn memory_engine() -> Engine {
    Engine::open_in_memory().expect("open in-memory ledger")
}

/// Initialize DB and add a small dataset through the CLI:
/// table `coding` with blocks `rust` (target 60) and `docs` (target 30).
pub fn init_db_with_data(db_path: &str) {
    tracker()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    tracker()
        .args(["--db", db_path, "new-table", "coding", "--refresh", "30d"])
        .assert()
        .success();

    tracker()
        .args(["--db", db_path, "add-block", "coding", "rust", "--target", "60"])
        .assert()
        .success();

    tracker()
        .args(["--db", db_path, "add-block", "coding", "docs", "--target", "30"])
        .assert()
        .success();

    for (block, minutes, day) in [
        ("rust", "20", "2025-09-01"),
        ("rust", "25", "2025-09-01"),
        ("docs", "30", "2025-09-01"),
        ("rust", "90", "2025-09-15"),
    ] {
        tracker()
            .args(["--db", db_path, "log", "coding", block, minutes, "--date", day])
            .assert()
            .success();
    }
}
