use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{att_utc, init_db, setup_test_db};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init_creates");
    init_db(&db_path);

    assert!(std::path::Path::new(&db_path).exists());

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let tables: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name IN ('kv','log')",
            [],
            |row| row.get(0),
        )
        .expect("count tables");
    assert_eq!(tables, 2);
}

#[test]
fn test_check_in_and_out_full_day() {
    let db_path = setup_test_db("full_day");
    init_db(&db_path);

    att_utc(&db_path, &["in", "--at", "2024-01-01T09:00:00Z"])
        .assert()
        .success()
        .stdout(contains("Checked in at 09:00"));

    att_utc(&db_path, &["out", "--at", "2024-01-01T17:30:00Z"])
        .assert()
        .success()
        .stdout(contains("Checked out at 17:30"))
        .stdout(contains("8.5"));

    att_utc(&db_path, &["list"])
        .assert()
        .success()
        .stdout(contains("2024-01-01"))
        .stdout(contains("09:00"))
        .stdout(contains("17:30"))
        .stdout(contains("8.5"));

    att_utc(&db_path, &["stats", "--json"])
        .assert()
        .success()
        .stdout(contains("\"days_present\": 1"))
        .stdout(contains("\"total_hours\": 8.5"));
}

#[test]
fn test_second_check_in_same_day_is_a_notice_not_a_failure() {
    let db_path = setup_test_db("second_checkin");
    init_db(&db_path);

    att_utc(&db_path, &["in", "--at", "2024-01-01T09:00:00Z"])
        .assert()
        .success();

    att_utc(&db_path, &["in", "--at", "2024-01-01T09:05:00Z"])
        .assert()
        .success()
        .stdout(contains("Already checked in"))
        .stdout(contains("2024-01-01"));

    att_utc(&db_path, &["status", "--at", "2024-01-01T10:00:00Z"])
        .assert()
        .success()
        .stdout(contains("Checked in"))
        .stdout(contains("09:00"));
}

#[test]
fn test_check_out_without_session_is_silent_noop() {
    let db_path = setup_test_db("out_noop");
    init_db(&db_path);

    att_utc(&db_path, &["out", "--at", "2024-01-01T17:00:00Z"])
        .assert()
        .success()
        .stdout(contains("Not checked in"));

    att_utc(&db_path, &["list"])
        .assert()
        .success()
        .stdout(contains("No attendance records yet"));
}

#[test]
fn test_hourly_rate_computes_earnings_and_report() {
    let db_path = setup_test_db("rate_report");
    init_db(&db_path);

    att_utc(&db_path, &["rate", "--set", "20"])
        .assert()
        .success()
        .stdout(contains("Hourly rate set to $20.00"));

    att_utc(&db_path, &["in", "--at", "2024-01-01T09:00:00Z"])
        .assert()
        .success();
    att_utc(&db_path, &["out", "--at", "2024-01-01T17:30:00Z"])
        .assert()
        .success()
        .stdout(contains("$170.00"));

    att_utc(&db_path, &["in", "--at", "2024-01-02T09:00:00Z"])
        .assert()
        .success();
    att_utc(
        &db_path,
        &["out", "--at", "2024-01-02T10:00:00Z", "--earnings", "5"],
    )
    .assert()
    .success()
    .stdout(contains("$5.00"));

    att_utc(&db_path, &["report", "--week", "2024-01-03"])
        .assert()
        .success()
        .stdout(contains("Monday"))
        .stdout(contains("Sunday"))
        .stdout(contains("170.00"))
        .stdout(contains("Weekly Total"))
        .stdout(contains("$175.00"));
}

#[test]
fn test_invalid_earnings_is_rejected() {
    let db_path = setup_test_db("bad_earnings");
    init_db(&db_path);

    att_utc(&db_path, &["in", "--at", "2024-01-01T09:00:00Z"])
        .assert()
        .success();

    att_utc(
        &db_path,
        &["out", "--at", "2024-01-01T17:00:00Z", "--earnings", "-3"],
    )
    .assert()
    .failure()
    .stderr(contains("Invalid amount"));

    // The session is still open.
    att_utc(&db_path, &["status", "--at", "2024-01-01T17:00:00Z"])
        .assert()
        .success()
        .stdout(contains("Checked in"));
}

#[test]
fn test_invalid_timestamp_fails() {
    let db_path = setup_test_db("bad_ts");
    init_db(&db_path);

    att_utc(&db_path, &["in", "--at", "tomorrow morning"])
        .assert()
        .failure()
        .stderr(contains("Invalid timestamp"));
}

#[test]
fn test_clear_requires_confirmation() {
    let db_path = setup_test_db("clear_confirm");
    init_db(&db_path);

    att_utc(&db_path, &["in", "--at", "2024-01-01T09:00:00Z"])
        .assert()
        .success();
    att_utc(&db_path, &["out", "--at", "2024-01-01T17:00:00Z"])
        .assert()
        .success();

    att_utc(&db_path, &["clear"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled."));

    att_utc(&db_path, &["stats", "--json"])
        .assert()
        .success()
        .stdout(contains("\"days_present\": 1"));

    att_utc(&db_path, &["clear"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("All attendance data has been cleared."));

    att_utc(&db_path, &["stats", "--json"])
        .assert()
        .success()
        .stdout(contains("\"days_present\": 0"))
        .stdout(contains("\"average_hours\": 0.0"));
}

#[test]
fn test_clear_keeps_hourly_rate() {
    let db_path = setup_test_db("clear_keeps_rate");
    init_db(&db_path);

    att_utc(&db_path, &["rate", "--set", "15.5"])
        .assert()
        .success();
    att_utc(&db_path, &["clear", "--yes"]).assert().success();

    att_utc(&db_path, &["rate"])
        .assert()
        .success()
        .stdout(contains("$15.50"));
}

#[test]
fn test_corrupt_records_are_reported_and_ignored() {
    let db_path = setup_test_db("corrupt_records");
    init_db(&db_path);

    {
        let conn = rusqlite::Connection::open(&db_path).expect("open db");
        conn.execute(
            "INSERT INTO kv (key, value, updated_at) VALUES ('attendance_data', '{oops', 'now')",
            [],
        )
        .expect("insert corrupt value");
    }

    att_utc(&db_path, &["list"])
        .assert()
        .success()
        .stdout(contains("attendance_data"))
        .stdout(contains("No attendance records yet"));

    // Still usable afterwards.
    att_utc(&db_path, &["in", "--at", "2024-01-01T09:00:00Z"])
        .assert()
        .success()
        .stdout(contains("Checked in at 09:00"));

    att_utc(&db_path, &["log", "--print"])
        .assert()
        .success()
        .stdout(contains("malformed_state"))
        .stdout(contains("checkin"));
}

#[test]
fn test_unclosed_session_is_replaced_next_day() {
    let db_path = setup_test_db("unclosed_replaced");
    init_db(&db_path);

    att_utc(&db_path, &["in", "--at", "2024-01-01T09:00:00Z"])
        .assert()
        .success();

    att_utc(&db_path, &["in", "--at", "2024-01-02T08:00:00Z"])
        .assert()
        .success()
        .stdout(contains("never closed"))
        .stdout(contains("Checked in at 08:00"));

    att_utc(&db_path, &["out", "--at", "2024-01-02T16:00:00Z"])
        .assert()
        .success();

    att_utc(&db_path, &["list"])
        .assert()
        .success()
        .stdout(contains("2024-01-02"))
        .stdout(contains("2024-01-01").not());
}

#[test]
fn test_db_info_and_check() {
    let db_path = setup_test_db("db_info");
    init_db(&db_path);

    att_utc(&db_path, &["db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("Migrations applied"))
        .stdout(contains("Integrity check passed"));
}

#[test]
fn test_check_out_before_check_in_is_rejected() {
    let db_path = setup_test_db("checkout_before_checkin");
    init_db(&db_path);

    att_utc(&db_path, &["in", "--at", "2024-01-05T09:00:00Z"])
        .assert()
        .success();

    att_utc(&db_path, &["out", "--at", "2024-01-05T08:00:00Z"])
        .assert()
        .success()
        .stdout(contains("Check-out rejected"));

    att_utc(&db_path, &["status", "--at", "2024-01-05T10:00:00Z"])
        .assert()
        .success()
        .stdout(contains("Checked in"));

    att_utc(&db_path, &["log", "--print"])
        .assert()
        .success()
        .stdout(contains("checkout_rejected"));
}
