use attendlog::core::report::week_report;
use attendlog::core::settings::{Settings, parse_amount};
use attendlog::core::stats::{average_hours, days_present, summarize, total_earnings, total_hours};
use attendlog::errors::AppError;
use attendlog::models::AttendanceRecord;
use attendlog::store::{KeyValueStore, MemoryStore, keys};
use attendlog::utils::date::{same_calendar_day, week_start};
use chrono::{FixedOffset, NaiveDate, Utc};

mod common;
use common::ts;

fn record(check_in: &str, check_out: &str, earnings: Option<f64>) -> AttendanceRecord {
    let mut r = AttendanceRecord::closed(ts(check_in), ts(check_out), 0.0);
    r.earnings = earnings;
    r
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_aggregates_of_no_records_are_zero() {
    let s = summarize(&[]);
    assert_eq!(s.total_hours, 0.0);
    assert_eq!(s.days_present, 0);
    assert_eq!(s.average_hours, 0.0);
    assert!(s.average_hours.is_finite());
    assert_eq!(s.total_earnings, 0.0);
}

#[test]
fn test_aggregates_sum_hours_and_earnings() {
    let records = vec![
        record("2024-01-02T09:00:00Z", "2024-01-02T15:00:00Z", Some(60.0)),
        record("2024-01-01T09:00:00Z", "2024-01-01T17:30:00Z", None),
    ];

    assert_eq!(total_hours(&records), 14.5);
    assert_eq!(days_present(&records), 2);
    assert_eq!(average_hours(&records), 7.25);
    assert_eq!(total_earnings(&records), 60.0);
}

#[test]
fn test_missing_total_hours_counts_as_zero() {
    let mut r = record("2024-01-01T09:00:00Z", "2024-01-01T17:00:00Z", None);
    r.total_hours = None;
    let records = vec![r, record("2024-01-02T09:00:00Z", "2024-01-02T13:00:00Z", None)];

    assert_eq!(total_hours(&records), 4.0);
    assert_eq!(average_hours(&records), 2.0);
}

#[test]
fn test_same_calendar_day_depends_on_timezone() {
    let a = ts("2024-01-01T22:30:00Z");
    let b = ts("2024-01-02T01:00:00Z");

    assert!(!same_calendar_day(&a, &b, &Utc));

    let new_york = FixedOffset::west_opt(5 * 3600).unwrap();
    assert!(same_calendar_day(&a, &b, &new_york));
}

#[test]
fn test_week_start_is_monday() {
    assert_eq!(week_start(ymd(2024, 1, 3)), ymd(2024, 1, 1));
    assert_eq!(week_start(ymd(2024, 1, 7)), ymd(2024, 1, 1));
    assert_eq!(week_start(ymd(2024, 1, 8)), ymd(2024, 1, 8));
}

#[test]
fn test_week_report_groups_by_day() {
    let records = vec![
        record("2024-01-08T09:00:00Z", "2024-01-08T17:00:00Z", Some(99.0)),
        record("2024-01-03T09:00:00Z", "2024-01-03T13:00:00Z", Some(40.0)),
        record("2024-01-01T09:00:00Z", "2024-01-01T17:30:00Z", Some(85.0)),
        record("2023-12-31T09:00:00Z", "2023-12-31T10:00:00Z", Some(10.0)),
    ];

    let report = week_report(&records, ymd(2024, 1, 4), &Utc);

    assert_eq!(report.days.len(), 7);
    assert_eq!(report.days[0].date, ymd(2024, 1, 1));
    assert_eq!(report.days[0].weekday_name(), "Monday");
    assert_eq!(report.days[6].date, ymd(2024, 1, 7));

    assert_eq!(report.days[0].amount, 85.0);
    assert_eq!(report.days[0].hours, 8.5);
    assert_eq!(report.days[2].amount, 40.0);
    assert_eq!(report.days[1].amount, 0.0);
    assert_eq!(report.days[1].sessions, 0);

    assert_eq!(report.total_amount, 125.0);
    assert_eq!(report.total_hours, 12.5);
}

#[test]
fn test_hourly_rate_setting() {
    let mut store = MemoryStore::new();
    assert_eq!(Settings::hourly_rate(&store).unwrap(), None);

    Settings::set_hourly_rate(&mut store, 22.5).unwrap();
    assert_eq!(Settings::hourly_rate(&store).unwrap(), Some(22.5));

    Settings::clear_hourly_rate(&mut store).unwrap();
    assert_eq!(Settings::hourly_rate(&store).unwrap(), None);

    store.set(keys::HOURLY_RATE, "").unwrap();
    assert_eq!(Settings::hourly_rate(&store).unwrap(), None);
}

#[test]
fn test_amount_parsing_rejects_negative_and_garbage() {
    assert_eq!(parse_amount(" 12.50 ").unwrap(), 12.5);
    assert!(matches!(parse_amount("-1"), Err(AppError::InvalidAmount(_))));
    assert!(matches!(parse_amount("abc"), Err(AppError::InvalidAmount(_))));
    assert!(matches!(parse_amount("NaN"), Err(AppError::InvalidAmount(_))));
}
