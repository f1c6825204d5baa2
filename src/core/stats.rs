//! Aggregates over the record list. Pure, recomputed on every call.

use crate::models::{AttendanceRecord, Summary};

pub fn total_hours(records: &[AttendanceRecord]) -> f64 {
    records.iter().map(AttendanceRecord::hours).sum()
}

pub fn days_present(records: &[AttendanceRecord]) -> usize {
    records.len()
}

/// Zero when there are no records.
pub fn average_hours(records: &[AttendanceRecord]) -> f64 {
    let days = days_present(records);
    if days == 0 {
        return 0.0;
    }
    total_hours(records) / days as f64
}

pub fn total_earnings(records: &[AttendanceRecord]) -> f64 {
    records.iter().map(AttendanceRecord::earned).sum()
}

pub fn summarize(records: &[AttendanceRecord]) -> Summary {
    Summary {
        total_hours: total_hours(records),
        days_present: days_present(records),
        average_hours: average_hours(records),
        total_earnings: total_earnings(records),
    }
}
