#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use attendlog::store::MemoryStore;
use chrono::{DateTime, Utc};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn att() -> Command {
    cargo_bin_cmd!("attendlog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_attendlog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize a fresh DB in test mode (no config file written)
pub fn init_db(db_path: &str) {
    att()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Run a tracker command with UTC calendar days.
pub fn att_utc(db_path: &str, args: &[&str]) -> Command {
    let mut cmd = att();
    cmd.args(["--db", db_path, "--test", "--utc"]).args(args);
    cmd
}

pub fn ts(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .expect("valid RFC 3339 timestamp")
        .with_timezone(&Utc)
}

pub fn memory_store() -> MemoryStore {
    MemoryStore::new()
}
